//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use crate::pal::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// Time stands still until a test moves it. Clones share the same underlying time,
/// so a test can keep one clone and advance time after handing another clone to a clock.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    secs: Arc<Mutex<f64>>,
}

impl FakePlatform {
    /// Creates a new fake platform whose time is at the epoch.
    pub(crate) fn new() -> Self {
        Self {
            secs: Arc::new(Mutex::new(0.0)),
        }
    }

    /// Sets the current time, in seconds since the epoch.
    pub(crate) fn set_secs(&self, secs: f64) {
        *self
            .secs
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = secs;
    }

    /// Moves the current time forward by the given number of seconds.
    pub(crate) fn advance_secs(&self, secs: f64) {
        *self
            .secs
            .lock()
            .expect("FakePlatform state lock should not be poisoned") += secs;
    }
}

impl Platform for FakePlatform {
    fn monotonic_secs(&self) -> f64 {
        *self
            .secs
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_epoch() {
        let platform = FakePlatform::new();
        assert!(platform.monotonic_secs().abs() < f64::EPSILON);
    }

    #[test]
    fn advances_and_sets_time() {
        let platform = FakePlatform::new();

        platform.set_secs(10.0);
        platform.advance_secs(0.5);

        assert!((platform.monotonic_secs() - 10.5).abs() < 1e-12);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance_secs(2.0);

        assert!((platform2.monotonic_secs() - 2.0).abs() < 1e-12);
    }
}
