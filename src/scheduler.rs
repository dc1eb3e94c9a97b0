//! Deferred execution seam shared by the throttle, the notification widget and
//! the contact form.
//!
//! A scheduled task runs once after `delay_ms`. Dropping the returned handle
//! before that cancels it, which is how `gloo_timers::callback::Timeout`
//! behaves in the browser.

pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    struct Task {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Cell<u64>,
        seq: Cell<u64>,
        tasks: RefCell<Vec<Task>>,
    }

    /// Virtual clock; time only moves through `advance`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<Clock>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.clock.now.get()
        }

        pub fn pending(&self) -> usize {
            self.clock
                .tasks
                .borrow()
                .iter()
                .filter(|task| !task.cancelled.get())
                .count()
        }

        /// Runs every live task due within the next `ms`, in due order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.now.get() + ms;

            loop {
                let next = {
                    let mut tasks = self.clock.tasks.borrow_mut();
                    tasks.retain(|task| !task.cancelled.get());
                    let position = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.seq))
                        .map(|(index, _)| index);
                    position.map(|index| tasks.remove(index))
                };

                let Some(task) = next else {
                    break;
                };

                self.clock.now.set(task.due);
                (task.run)();
            }

            self.clock.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let seq = self.clock.seq.get();
            self.clock.seq.set(seq + 1);
            self.clock.tasks.borrow_mut().push(Task {
                due: self.clock.now.get() + u64::from(delay_ms),
                seq,
                cancelled: Rc::clone(&cancelled),
                run: task,
            });
            ManualHandle { cancelled }
        }
    }
}
