//! Guard that stops a timer when it goes out of scope.

use tracing::warn;

use crate::{Period, Result, Timer};

/// Keeps a [`Timer`] running until the guard is dropped.
///
/// Created by [`Timer::scope()`]. Dropping the guard stops the timer on every path out of the
/// scope, including early returns and unwinding.
#[derive(Debug)]
#[must_use = "the timer is stopped as soon as the guard is dropped"]
pub struct TimerGuard<'a> {
    timer: &'a mut Timer,
}

impl<'a> TimerGuard<'a> {
    pub(crate) fn new(timer: &'a mut Timer) -> Self {
        Self { timer }
    }

    /// Records an intermediate tick on the guarded timer.
    ///
    /// # Errors
    ///
    /// See [`Timer::mark()`].
    pub fn mark(&mut self, label: impl Into<String>) -> Result<Period> {
        self.timer.mark(label)
    }

    /// The guarded timer.
    #[must_use]
    pub fn timer(&self) -> &Timer {
        self.timer
    }

    /// Stops the timer now and returns the period since it was started.
    ///
    /// # Errors
    ///
    /// See [`Timer::stop()`].
    pub fn finish(self) -> Result<Period> {
        // Dropping the guard afterwards finds the timer already stopped.
        self.timer.stop()
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        if !self.timer.is_running() {
            return;
        }

        if let Err(error) = self.timer.stop() {
            warn!(timer = self.timer.name(), %error, "failed to stop timer at end of scope");
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    #[test]
    fn finish_stops_once() {
        let mut timer = Timer::builder().build();

        let guard = timer.scope().unwrap();
        guard.finish().unwrap();

        assert!(!timer.is_running());
        assert_eq!(timer.len(), 2);
    }

    #[test]
    fn guard_exposes_timer() {
        let mut timer = Timer::builder().name("guarded").build();

        let guard = timer.scope().unwrap();

        assert_eq!(guard.timer().name(), "guarded");
        assert!(guard.timer().is_running());
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Unwinding through the test harness is slow under Miri.
    fn stops_when_unwinding() {
        let mut timer = Timer::builder().build();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = timer.scope().unwrap();
            panic!("work failed");
        }));

        result.unwrap_err();
        assert!(!timer.is_running());
        assert_eq!(timer.recorder().last().unwrap().name(), "stop");
    }
}
