//! Capturing ticks from the monotonic clock.

use crate::pal::{Platform, PlatformFacade};
use crate::{Tick, TimeUnit};

/// Captures [`Tick`]s from the monotonic clock.
///
/// All clocks share one process-wide epoch, so ticks captured by different clocks
/// can be compared and subtracted from each other.
///
/// # Examples
///
/// ```
/// use chronologger::{Clock, TimeUnit};
///
/// let clock = Clock::new();
///
/// let start = clock.tick("start");
/// let end = clock.tick_in("end", TimeUnit::Milliseconds);
///
/// let period = &end - &start;
/// assert!(period.elapsed() >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Clock {
    platform: PlatformFacade,
}

impl Clock {
    /// Creates a clock that reads the real monotonic clock of the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: PlatformFacade::real(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Captures the current instant as a tick expressed in seconds.
    #[must_use]
    pub fn tick(&self, name: impl Into<String>) -> Tick {
        self.tick_in(name, TimeUnit::Seconds)
    }

    /// Captures the current instant as a tick expressed in the given unit.
    #[must_use]
    pub fn tick_in(&self, name: impl Into<String>, unit: TimeUnit) -> Tick {
        Tick::at(name, unit, self.platform.monotonic_secs())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::FakePlatform;

    assert_impl_all!(Clock: Send, Sync);

    #[test]
    fn captures_platform_time() {
        let platform = FakePlatform::new();
        platform.set_secs(42.0);
        let clock = Clock::with_platform(PlatformFacade::fake(platform.clone()));

        let tick = clock.tick("answer");
        assert_eq!(tick.name(), "answer");
        assert_eq!(tick.unit(), TimeUnit::Seconds);
        assert!((tick.time() - 42.0).abs() < 1e-9);

        platform.advance_secs(1.0);

        let tick = clock.tick_in("later", TimeUnit::Milliseconds);
        assert_eq!(tick.unit(), TimeUnit::Milliseconds);
        assert!((tick.time() - 43_000.0).abs() < 1e-6);
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    fn real_clock_is_monotonic() {
        let clock = Clock::new();

        let first = clock.tick("first");
        let second = clock.tick("second");

        assert!(second.secs() >= first.secs());
    }
}
