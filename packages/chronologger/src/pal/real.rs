use std::sync::LazyLock;
use std::time::Instant;

use crate::pal::Platform;

// All real timestamps are measured from the same point so that ticks captured by
// different clocks remain comparable with each other.
static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

pub(crate) static REAL_PLATFORM: RealPlatform = RealPlatform;

/// Reads the monotonic clock of the operating system via `std::time::Instant`.
#[derive(Debug)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn monotonic_secs(&self) -> f64 {
        EPOCH.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn time_moves_forward() {
        let before = REAL_PLATFORM.monotonic_secs();
        thread::sleep(Duration::from_millis(2));
        let after = REAL_PLATFORM.monotonic_secs();

        assert!(after > before);
        assert!(after - before >= 0.002);
    }
}
