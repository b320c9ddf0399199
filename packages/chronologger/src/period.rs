//! Intervals between two time events.

use std::fmt;
use std::ops::Sub;
use std::sync::Arc;

use crate::{TimeEvent, TimeUnit};

/// An immutable interval between a start and an end [`TimeEvent`].
///
/// A period may be heterogeneous: its start, its end and the period itself may all use
/// different units. Units are reconciled only when the period is read, by converting both
/// endpoints to the unit of the period before subtracting them.
///
/// The endpoints are reference-counted, so cloning a period or converting it to another
/// unit does not copy them.
///
/// # Examples
///
/// ```
/// use chronologger::{Clock, Period, TimeUnit};
///
/// let clock = Clock::new();
/// let start = clock.tick("connect");
/// let end = clock.tick_in("disconnect", TimeUnit::Nanoseconds);
///
/// let period = Period::new("session", TimeUnit::Milliseconds, start, end);
///
/// assert_eq!(period.name(), "session");
/// assert_eq!(period.unit(), TimeUnit::Milliseconds);
/// assert!(period.elapsed() >= 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Period {
    name: String,
    unit: TimeUnit,
    start: Arc<TimeEvent>,
    end: Arc<TimeEvent>,
}

impl Period {
    /// Creates a period between two time events, expressed in the given unit.
    ///
    /// The endpoints keep their own units.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        unit: TimeUnit,
        start: impl Into<TimeEvent>,
        end: impl Into<TimeEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            unit,
            start: Arc::new(start.into()),
            end: Arc::new(end.into()),
        }
    }

    /// The name of the period.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit in which the period expresses its duration.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The time event the period starts at.
    #[must_use]
    pub fn start(&self) -> &TimeEvent {
        &self.start
    }

    /// The time event the period ends at.
    #[must_use]
    pub fn end(&self) -> &TimeEvent {
        &self.end
    }

    /// The duration of the period, expressed in the unit of the period.
    ///
    /// Both endpoints are converted to the unit of the period before being subtracted.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        let start = self.start.to(self.unit).time();
        let end = self.end.to(self.unit).time();

        end - start
    }

    /// Same as [`elapsed()`](Self::elapsed).
    #[must_use]
    pub fn time(&self) -> f64 {
        self.elapsed()
    }

    /// The duration of the period in seconds, regardless of the unit.
    #[must_use]
    pub fn secs(&self) -> f64 {
        self.unit.to_secs(self.elapsed())
    }

    /// Returns a period named "elapsed" with the same endpoints, expressed in another unit.
    ///
    /// The endpoints themselves are not converted.
    #[must_use]
    pub fn to(&self, unit: TimeUnit) -> Self {
        Self {
            name: "elapsed".to_string(),
            unit,
            start: Arc::clone(&self.start),
            end: Arc::clone(&self.end),
        }
    }

    /// Joins `start` with the end of this period into a new period expressed in `unit`.
    ///
    /// Both endpoints are converted to `unit` and the result is named after them.
    pub(crate) fn splice(&self, start: &TimeEvent, unit: TimeUnit) -> Self {
        let start = start.to(unit);
        let end = self.end.to(unit);

        Self::new(
            format!("elapsed ({} - {})", end.name(), start.name()),
            unit,
            start,
            end,
        )
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} {}    =    {} - {}",
            self.name,
            self.elapsed(),
            self.unit,
            self.end,
            self.start
        )
    }
}

/// `later - earlier` splices two periods: the result runs from the start of `earlier` to
/// the end of `later`.
///
/// This is not a numeric subtraction of durations. The result is expressed in the unit of
/// `earlier` (the subtrahend), both endpoints are converted to that unit and the result is
/// named `"elapsed (<end name> - <start name>)"`.
///
/// ```
/// use chronologger::{Clock, Period, TimeUnit};
///
/// let clock = Clock::new();
/// let first = Period::new("first", TimeUnit::Seconds, clock.tick("a"), clock.tick("b"));
/// let second = Period::new("second", TimeUnit::Milliseconds, clock.tick("c"), clock.tick("d"));
///
/// let whole = &second - &first;
/// assert_eq!(whole.name(), "elapsed (d - a)");
/// assert_eq!(whole.unit(), TimeUnit::Seconds);
/// ```
impl Sub for &Period {
    type Output = Period;

    fn sub(self, other: Self) -> Period {
        self.splice(&other.start, other.unit)
    }
}

/// `period - event` splices the period with the opening instant of `event`.
///
/// A tick is its own opening instant and a period opens at its start. The result is
/// expressed in the unit of `event`.
impl Sub<&TimeEvent> for &Period {
    type Output = Period;

    fn sub(self, other: &TimeEvent) -> Period {
        self.splice(other.opening(), other.unit())
    }
}
