use crate::scheduler::Scheduler;
use std::{cell::RefCell, rc::Rc};

/// Trailing-edge rate limiter.
///
/// Every `call` supersedes the execution scheduled by the previous one, so the
/// wrapped callback runs once per quiet window with the latest arguments.
pub struct Throttle<S: Scheduler, A> {
    scheduler: S,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, A: 'static> Throttle<S, A> {
    pub fn new(scheduler: S, wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            wait_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, args: A) {
        let callback = Rc::clone(&self.callback);
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || callback(args)));

        // Replacing the handle drops, and so cancels, the superseded execution.
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }
}
