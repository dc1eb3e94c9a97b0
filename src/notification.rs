//! Transient toast shown in the top-right corner.
//!
//! Only one notification exists at a time. `show` replaces the current one
//! outright and drops its timers, so a stale hide or removal can never touch
//! the newcomer.

use crate::scheduler::Scheduler;
use std::{cell::RefCell, rc::Rc};

const ENTER_DELAY_MS: u32 = 100;
const EXIT_TRANSITION_MS: u32 = 300;

const BASE_STYLE: &str = "position: fixed; top: 100px; right: 20px; padding: 1rem 1.5rem; \
border-radius: 10px; color: white; font-weight: 500; z-index: 10000; \
transition: transform 0.3s cubic-bezier(0.16, 1, 0.3, 1);";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(45deg, #10b981, #059669)",
            Self::Error => "linear-gradient(45deg, #ef4444, #dc2626)",
            Self::Info => {
                "linear-gradient(45deg, var(--portfolio-gradient-start), var(--portfolio-gradient-end))"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Shown,
    Leaving,
}

impl NotificationPhase {
    pub fn on_screen(self) -> bool {
        matches!(self, Self::Shown)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationView {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl NotificationView {
    pub fn class_name(&self) -> String {
        format!("notification notification--{}", self.kind.as_str())
    }

    pub fn inline_style(&self) -> String {
        let offset = if self.phase.on_screen() { "0" } else { "100%" };
        format!(
            "{BASE_STYLE} transform: translateX({offset}); background: {};",
            self.kind.background()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTimings {
    pub enter_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl NotificationTimings {
    pub fn with_visible_ms(visible_ms: u32) -> Self {
        Self {
            enter_ms: ENTER_DELAY_MS,
            visible_ms,
            exit_ms: EXIT_TRANSITION_MS,
        }
    }
}

struct Slot<H> {
    next_id: u64,
    current: Option<NotificationView>,
    timers: Vec<H>,
}

type Listener = Rc<dyn Fn(Option<NotificationView>)>;

pub struct NotificationCenter<S: Scheduler> {
    scheduler: S,
    timings: NotificationTimings,
    slot: Rc<RefCell<Slot<S::Handle>>>,
    on_change: Listener,
}

impl<S: Scheduler> NotificationCenter<S> {
    pub fn new(
        scheduler: S,
        timings: NotificationTimings,
        on_change: impl Fn(Option<NotificationView>) + 'static,
    ) -> Self {
        Self {
            scheduler,
            timings,
            slot: Rc::new(RefCell::new(Slot {
                next_id: 1,
                current: None,
                timers: Vec::new(),
            })),
            on_change: Rc::new(on_change),
        }
    }

    pub fn current(&self) -> Option<NotificationView> {
        self.slot.borrow().current.clone()
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let (view, superseded) = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_id;
            slot.next_id += 1;

            let view = NotificationView {
                id,
                message: message.into(),
                kind,
                phase: NotificationPhase::Entering,
            };
            slot.current = Some(view.clone());
            (view, std::mem::take(&mut slot.timers))
        };
        drop(superseded);

        (self.on_change)(Some(view.clone()));

        let hide_at = self.timings.visible_ms;
        let remove_at = hide_at.saturating_add(self.timings.exit_ms);
        let timers = vec![
            self.stage(view.id, self.timings.enter_ms, Some(NotificationPhase::Shown)),
            self.stage(view.id, hide_at, Some(NotificationPhase::Leaving)),
            self.stage(view.id, remove_at, None),
        ];
        self.slot.borrow_mut().timers = timers;
    }

    fn stage(&self, id: u64, delay_ms: u32, phase: Option<NotificationPhase>) -> S::Handle {
        let slot = Rc::clone(&self.slot);
        let on_change = Rc::clone(&self.on_change);

        self.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                let next = {
                    let mut slot = slot.borrow_mut();
                    if slot.current.as_ref().map(|view| view.id) != Some(id) {
                        return;
                    }
                    match phase {
                        Some(phase) => {
                            if let Some(view) = slot.current.as_mut() {
                                view.phase = phase;
                            }
                        }
                        None => slot.current = None,
                    }
                    slot.current.clone()
                };
                on_change(next);
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;

    fn center() -> (
        ManualScheduler,
        NotificationCenter<ManualScheduler>,
        Rc<RefCell<Vec<Option<NotificationView>>>>,
    ) {
        let scheduler = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let center = NotificationCenter::new(
            scheduler.clone(),
            NotificationTimings::with_visible_ms(4_000),
            move |view| sink.borrow_mut().push(view),
        );
        (scheduler, center, seen)
    }

    fn phase_of(center: &NotificationCenter<ManualScheduler>) -> Option<NotificationPhase> {
        center.current().map(|view| view.phase)
    }

    #[test]
    fn lifecycle_runs_enter_show_hide_remove() {
        let (scheduler, center, _) = center();

        center.show("Hello", NotificationKind::Info);
        assert_eq!(phase_of(&center), Some(NotificationPhase::Entering));

        scheduler.advance(100);
        assert_eq!(phase_of(&center), Some(NotificationPhase::Shown));

        scheduler.advance(3_900);
        assert_eq!(phase_of(&center), Some(NotificationPhase::Leaving));

        scheduler.advance(299);
        assert_eq!(phase_of(&center), Some(NotificationPhase::Leaving));

        scheduler.advance(1);
        assert_eq!(center.current(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn second_show_replaces_the_first_without_leaking_timers() {
        let (scheduler, center, seen) = center();

        center.show("first", NotificationKind::Info);
        scheduler.advance(2_000);
        let seen_before_second = seen.borrow().len();
        center.show("second", NotificationKind::Success);

        assert_eq!(scheduler.pending(), 3);
        let current = center.current().expect("one notification");
        assert_eq!(current.message, "second");

        // The first notification's hide and removal would have fired here.
        scheduler.advance(2_300);
        let current = center.current().expect("still showing");
        assert_eq!(current.message, "second");
        assert_eq!(current.phase, NotificationPhase::Shown);

        scheduler.advance(2_000);
        assert_eq!(center.current(), None);
        assert!(seen.borrow()[seen_before_second..]
            .iter()
            .flatten()
            .all(|view| view.message == "second"));
    }

    #[test]
    fn show_while_leaving_still_ends_with_one_visible() {
        let (scheduler, center, _) = center();

        center.show("first", NotificationKind::Info);
        scheduler.advance(4_100);
        assert_eq!(phase_of(&center), Some(NotificationPhase::Leaving));

        center.show("second", NotificationKind::Error);
        scheduler.advance(100);

        let current = center.current().expect("one notification");
        assert_eq!(current.message, "second");
        assert_eq!(current.phase, NotificationPhase::Shown);
    }

    #[test]
    fn style_tracks_kind_and_phase() {
        let mut view = NotificationView {
            id: 1,
            message: "Sent".to_string(),
            kind: NotificationKind::Success,
            phase: NotificationPhase::Entering,
        };
        assert_eq!(view.class_name(), "notification notification--success");
        assert!(view.inline_style().contains("translateX(100%)"));
        assert!(view.inline_style().contains("#10b981"));

        view.phase = NotificationPhase::Shown;
        assert!(view.inline_style().contains("translateX(0)"));
    }

    #[test]
    fn info_is_the_default_kind_and_uses_theme_gradient() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert!(NotificationKind::Info
            .background()
            .contains("--portfolio-gradient-start"));
    }
}
