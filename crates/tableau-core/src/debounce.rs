//! Debouncer
//!
//! At most one delayed task pending at a time. Scheduling a new task drops
//! the previous handle, which cancels it.

/// Delayed-task source. Dropping the returned handle must cancel the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Run `task` once `delay_ms` passes without another call.
    pub fn schedule(&mut self, task: impl FnOnce() + 'static) {
        // Cancel before arming so two handles never coexist
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Cancel any pending task (component teardown).
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fires_once_after_last_edit() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let saved = Rc::new(RefCell::new(Vec::<String>::new()));

        for text in ["h", "he", "hel"] {
            let saved = saved.clone();
            let text = text.to_string();
            debouncer.schedule(move || saved.borrow_mut().push(text));
            clock.advance(100);
        }
        assert_eq!(clock.pending(), 1);
        assert!(saved.borrow().is_empty());

        clock.advance(200);
        assert_eq!(*saved.borrow(), vec!["hel"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        debouncer.schedule(move || *flag.borrow_mut() = true);

        debouncer.cancel();
        clock.advance(1_000);
        assert!(!*fired.borrow());
    }
}
