//! Search Debounce
//!
//! Cancellable delayed-task abstraction: rapid repeated input collapses into
//! a single evaluation of the final value after a quiet window. Backed by
//! `gloo_timers::callback::Timeout` in the browser and by a fake scheduler
//! with a manually advanced clock in tests.

/// Quiet window before a pending search term is evaluated.
pub const SEARCH_DEBOUNCE_MS: u32 = 2_000;

/// Handle to a scheduled task that has not fired yet.
pub trait TaskHandle {
    /// Drop the pending task without running it.
    fn cancel(self);
}

/// Schedules a task to run once after a delay.
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Collapses bursts of calls into one delayed evaluation.
///
/// Each [`call`](Debouncer::call) cancels the previously scheduled task, so
/// only the closure from the last call within the quiet window ever runs.
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

    /// Schedule `task`, superseding any still-pending one.
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Cancel the pending task, if any. Used on component cleanup.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// Browser scheduler backed by `setTimeout` via gloo.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl TaskHandle for gloo_timers::callback::Timeout {
    fn cancel(self) {
        gloo_timers::callback::Timeout::cancel(self);
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

/// Debouncer wired for the browser with the standard search quiet window.
pub fn search_debouncer() -> Debouncer<TimeoutScheduler> {
    Debouncer::new(TimeoutScheduler, SEARCH_DEBOUNCE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeTask {
        fire_at: u64,
        run: Option<Box<dyn FnOnce()>>,
        cancelled: bool,
    }

    #[derive(Default)]
    struct FakeClock {
        now: u64,
        tasks: Vec<FakeTask>,
    }

    /// Scheduler whose time only moves when the test advances it.
    #[derive(Clone, Default)]
    struct FakeScheduler {
        clock: Rc<RefCell<FakeClock>>,
    }

    struct FakeHandle {
        clock: Rc<RefCell<FakeClock>>,
        index: usize,
    }

    impl TaskHandle for FakeHandle {
        fn cancel(self) {
            self.clock.borrow_mut().tasks[self.index].cancelled = true;
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeHandle {
            let mut clock = self.clock.borrow_mut();
            let fire_at = clock.now + u64::from(delay_ms);
            clock.tasks.push(FakeTask {
                fire_at,
                run: Some(task),
                cancelled: false,
            });
            FakeHandle {
                clock: Rc::clone(&self.clock),
                index: clock.tasks.len() - 1,
            }
        }
    }

    impl FakeScheduler {
        fn advance(&self, ms: u64) {
            let due: Vec<Box<dyn FnOnce()>> = {
                let mut clock = self.clock.borrow_mut();
                clock.now += ms;
                let now = clock.now;
                clock
                    .tasks
                    .iter_mut()
                    .filter(|t| !t.cancelled && t.fire_at <= now)
                    .filter_map(|t| t.run.take())
                    .collect()
            };
            for task in due {
                task();
            }
        }
    }

    fn recording_debouncer(
        delay_ms: u32,
    ) -> (Debouncer<FakeScheduler>, FakeScheduler, Rc<RefCell<Vec<String>>>) {
        let scheduler = FakeScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), delay_ms);
        (debouncer, scheduler, Rc::new(RefCell::new(Vec::new())))
    }

    fn record(log: &Rc<RefCell<Vec<String>>>, term: &str) -> impl FnOnce() + 'static {
        let log = Rc::clone(log);
        let term = term.to_string();
        move || log.borrow_mut().push(term)
    }

    #[test]
    fn test_single_call_fires_after_quiet_window() {
        let (mut debouncer, scheduler, log) = recording_debouncer(2_000);
        debouncer.call(record(&log, "Pizza"));
        scheduler.advance(1_999);
        assert!(log.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["Pizza"]);
    }

    #[test]
    fn test_burst_collapses_to_last_term_only() {
        let (mut debouncer, scheduler, log) = recording_debouncer(2_000);
        debouncer.call(record(&log, "P"));
        scheduler.advance(500);
        debouncer.call(record(&log, "Pi"));
        scheduler.advance(500);
        debouncer.call(record(&log, "Pizza"));
        scheduler.advance(2_000);
        assert_eq!(*log.borrow(), vec!["Pizza"]);
    }

    #[test]
    fn test_each_keystroke_restarts_the_window() {
        let (mut debouncer, scheduler, log) = recording_debouncer(2_000);
        debouncer.call(record(&log, "a"));
        scheduler.advance(1_900);
        debouncer.call(record(&log, "ab"));
        // The first deadline passing must not fire the superseded task.
        scheduler.advance(1_900);
        assert!(log.borrow().is_empty());
        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["ab"]);
    }

    #[test]
    fn test_separate_bursts_each_fire() {
        let (mut debouncer, scheduler, log) = recording_debouncer(2_000);
        debouncer.call(record(&log, "Burger"));
        scheduler.advance(2_000);
        debouncer.call(record(&log, "Sushi"));
        scheduler.advance(2_000);
        assert_eq!(*log.borrow(), vec!["Burger", "Sushi"]);
    }

    #[test]
    fn test_explicit_cancel_drops_pending_task() {
        let (mut debouncer, scheduler, log) = recording_debouncer(2_000);
        debouncer.call(record(&log, "Taco"));
        debouncer.cancel();
        scheduler.advance(5_000);
        assert!(log.borrow().is_empty());
    }
}
