//! Instantaneous timestamps.

use std::fmt;
use std::ops::Sub;

use crate::{Clock, Period, TimeEvent, TimeUnit};

/// An immutable, named capture of a single instant.
///
/// The instant is captured once, when the tick is created, and never changes afterwards.
/// The unit only determines how the instant is expressed by [`time()`](Self::time):
/// converting a tick to another unit with [`to()`](Self::to) keeps the same instant.
///
/// Two ticks are equal only if they have the same name, unit and instant, so two ticks
/// captured at different moments are different even if they share a name.
///
/// # Examples
///
/// ```
/// use chronologger::{Tick, TimeUnit};
///
/// let start = Tick::new("start");
/// let end = Tick::with_unit("end", TimeUnit::Milliseconds);
///
/// // Subtracting ticks gives the period between them.
/// let period = &end - &start;
/// assert_eq!(period.name(), "elapsed");
/// assert!(period.elapsed() >= 0.0);
///
/// // The same instant, expressed in another unit.
/// let start_ns = start.to(TimeUnit::Nanoseconds);
/// assert_eq!(start_ns.secs(), start.secs());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    name: String,
    unit: TimeUnit,

    // Seconds since the epoch of the clock the tick was captured from.
    instant_secs: f64,
}

impl Tick {
    /// Captures the current instant from the real clock, expressed in seconds.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Clock::new().tick(name)
    }

    /// Captures the current instant from the real clock, expressed in the given unit.
    #[must_use]
    pub fn with_unit(name: impl Into<String>, unit: TimeUnit) -> Self {
        Clock::new().tick_in(name, unit)
    }

    pub(crate) fn at(name: impl Into<String>, unit: TimeUnit, instant_secs: f64) -> Self {
        Self {
            name: name.into(),
            unit,
            instant_secs,
        }
    }

    /// The name of the tick.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit in which the tick expresses its instant.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The captured instant in seconds since the clock epoch, regardless of the unit.
    #[must_use]
    pub fn secs(&self) -> f64 {
        self.instant_secs
    }

    /// The captured instant expressed in the unit of the tick.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.unit.from_secs(self.instant_secs)
    }

    /// Returns the same tick expressed in another unit.
    ///
    /// The captured instant is shared with the original, only its interpretation changes.
    /// Converting to the unit the tick already has returns an equal tick.
    #[must_use]
    pub fn to(&self, unit: TimeUnit) -> Self {
        Self {
            name: self.name.clone(),
            unit,
            instant_secs: self.instant_secs,
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3} {}", self.name, self.time(), self.unit)
    }
}

/// `end - start` builds the period named "elapsed" that starts at `start` and ends at `end`.
///
/// The period is expressed in the unit of `start`, the subtrahend.
impl Sub for &Tick {
    type Output = Period;

    fn sub(self, other: Self) -> Period {
        Period::new("elapsed", other.unit, other.clone(), self.clone())
    }
}

/// `tick - event` builds the period named "elapsed" from `event` to `tick`, expressed in
/// the unit of `event`.
impl Sub<&TimeEvent> for &Tick {
    type Output = Period;

    fn sub(self, other: &TimeEvent) -> Period {
        Period::new("elapsed", other.unit(), other.clone(), self.clone())
    }
}
