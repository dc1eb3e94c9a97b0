use crate::{notification::NotificationKind, scheduler::Scheduler};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FormError {
    pub fn reason(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Pending,
    AlreadyPending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn idle() -> Self {
        Self {
            label: SUBMIT_LABEL,
            disabled: false,
        }
    }

    pub fn pending() -> Self {
        Self {
            label: PENDING_LABEL,
            disabled: true,
        }
    }
}

/// Whitespace as browsers' `\s` class sees it: Unicode spaces and line
/// terminators plus the BOM, but not NEL.
fn is_browser_space(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}

/// `local@domain.tld` with no whitespace and no extra `@` in any part.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || email.chars().any(is_browser_space) {
        return false;
    }
    if domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

pub fn validate(fields: &ContactFields) -> Result<(), FormError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Hooks the form drives; the page shell routes them into Yew state.
pub struct FormHooks {
    pub notify: Box<dyn Fn(&str, NotificationKind)>,
    pub control: Box<dyn Fn(SubmitControl)>,
    pub reset: Box<dyn Fn()>,
}

/// Simulated contact submission: validation, then a fixed latency before the
/// success path.
pub struct ContactForm<S: Scheduler> {
    scheduler: S,
    latency_ms: u32,
    hooks: Rc<FormHooks>,
    submitting: Rc<Cell<bool>>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> ContactForm<S> {
    pub fn new(scheduler: S, latency_ms: u32, hooks: FormHooks) -> Self {
        Self {
            scheduler,
            latency_ms,
            hooks: Rc::new(hooks),
            submitting: Rc::new(Cell::new(false)),
            pending: RefCell::new(None),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn submit(&self, fields: &ContactFields) -> Result<SubmitOutcome, FormError> {
        if self.submitting.get() {
            return Ok(SubmitOutcome::AlreadyPending);
        }

        if let Err(error) = validate(fields) {
            (self.hooks.notify)(&error.to_string(), NotificationKind::Error);
            return Err(error);
        }

        self.submitting.set(true);
        (self.hooks.control)(SubmitControl::pending());

        let hooks = Rc::clone(&self.hooks);
        let submitting = Rc::clone(&self.submitting);
        let handle = self.scheduler.schedule(
            self.latency_ms,
            Box::new(move || {
                (hooks.notify)(SUCCESS_MESSAGE, NotificationKind::Success);
                (hooks.reset)();
                (hooks.control)(SubmitControl::idle());
                submitting.set(false);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);

        Ok(SubmitOutcome::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;

    #[derive(Debug, PartialEq)]
    enum Effect {
        Notify(String, NotificationKind),
        Control(SubmitControl),
        Reset,
    }

    fn form() -> (ManualScheduler, ContactForm<ManualScheduler>, Rc<RefCell<Vec<Effect>>>) {
        let scheduler = ManualScheduler::default();
        let effects = Rc::new(RefCell::new(Vec::new()));

        let notify_sink = Rc::clone(&effects);
        let control_sink = Rc::clone(&effects);
        let reset_sink = Rc::clone(&effects);
        let hooks = FormHooks {
            notify: Box::new(move |message: &str, kind: NotificationKind| {
                notify_sink
                    .borrow_mut()
                    .push(Effect::Notify(message.to_string(), kind));
            }),
            control: Box::new(move |control: SubmitControl| {
                control_sink.borrow_mut().push(Effect::Control(control));
            }),
            reset: Box::new(move || reset_sink.borrow_mut().push(Effect::Reset)),
        };

        (scheduler.clone(), ContactForm::new(scheduler, 1_500, hooks), effects)
    }

    fn fields(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn missing_name_is_rejected_before_anything_pends() {
        let (scheduler, form, effects) = form();

        let result = form.submit(&fields("", "a@b.com", "hi"));

        assert_eq!(result, Err(FormError::MissingFields));
        assert_eq!(
            *effects.borrow(),
            vec![Effect::Notify(
                "Please fill in all fields".to_string(),
                NotificationKind::Error
            )]
        );
        assert!(!form.is_submitting());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn every_field_is_required_and_checked_before_the_email() {
        let (scheduler, form, effects) = form();

        for (name, email, message) in [("A", "", "hi"), ("A", "a@b.com", ""), ("", "", "")] {
            let result = form.submit(&fields(name, email, message));
            assert_eq!(result, Err(FormError::MissingFields), "{name:?} {email:?} {message:?}");
        }

        let rejection = Effect::Notify(
            "Please fill in all fields".to_string(),
            NotificationKind::Error,
        );
        assert_eq!(effects.borrow().len(), 3);
        assert!(effects.borrow().iter().all(|effect| *effect == rejection));
        assert!(!form.is_submitting());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let (_, form, effects) = form();

        let result = form.submit(&fields("A", "not-an-email", "hi"));

        assert_eq!(result, Err(FormError::InvalidEmail));
        assert_eq!(
            *effects.borrow(),
            vec![Effect::Notify(
                "Please enter a valid email address".to_string(),
                NotificationKind::Error
            )]
        );
    }

    #[test]
    fn accepted_submission_pends_then_succeeds_once() {
        let (scheduler, form, effects) = form();

        let result = form.submit(&fields("A", "a@b.com", "hi"));
        assert_eq!(result, Ok(SubmitOutcome::Pending));
        assert_eq!(*effects.borrow(), vec![Effect::Control(SubmitControl::pending())]);

        scheduler.advance(1_499);
        assert_eq!(effects.borrow().len(), 1);

        scheduler.advance(1);
        assert_eq!(
            *effects.borrow(),
            vec![
                Effect::Control(SubmitControl::pending()),
                Effect::Notify(SUCCESS_MESSAGE.to_string(), NotificationKind::Success),
                Effect::Reset,
                Effect::Control(SubmitControl::idle()),
            ]
        );
        assert!(!form.is_submitting());

        scheduler.advance(10_000);
        assert_eq!(effects.borrow().len(), 4);
    }

    #[test]
    fn resubmitting_while_pending_is_ignored() {
        let (scheduler, form, effects) = form();

        form.submit(&fields("A", "a@b.com", "hi")).expect("accepted");
        let again = form.submit(&fields("A", "a@b.com", "hi"));
        assert_eq!(again, Ok(SubmitOutcome::AlreadyPending));

        scheduler.advance(1_500);
        let successes = effects
            .borrow()
            .iter()
            .filter(|effect| matches!(effect, Effect::Notify(_, NotificationKind::Success)))
            .count();
        assert_eq!(successes, 1);
    }

    #[test]
    fn email_shape_rules() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(is_valid_email("a@b.c."));
        assert!(!is_valid_email("a@b.c\u{feff}"));
        assert!(!is_valid_email("a\u{a0}b@c.com"));
        assert!(is_valid_email("a\u{85}b@c.com"));
    }

    #[test]
    fn error_messages_and_reasons() {
        assert_eq!(FormError::MissingFields.reason(), "missing_fields");
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
