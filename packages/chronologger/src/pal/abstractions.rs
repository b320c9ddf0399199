//! Platform abstraction trait definitions.

use std::fmt::Debug;

/// Provides the monotonic timestamps that ticks are captured from.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current monotonic time, in seconds since an arbitrary fixed epoch.
    ///
    /// Successive calls never return a smaller value.
    fn monotonic_secs(&self) -> f64;
}
