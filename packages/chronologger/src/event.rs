//! The closed set of time events.

use std::fmt;
use std::ops::Sub;

use crate::{Period, Tick, TimeUnit};

/// Anything that happens in time: either an instant ([`Tick`]) or an interval ([`Period`]).
///
/// Every time event has a name and a unit, reports a time value in that unit, can be
/// expressed in another unit and can be subtracted from another time event to produce
/// a [`Period`].
///
/// # Examples
///
/// ```
/// use chronologger::{Clock, TimeEvent, TimeUnit};
///
/// let clock = Clock::new();
/// let start = TimeEvent::from(clock.tick("start"));
/// let end = TimeEvent::from(clock.tick("end"));
///
/// let period = end.subtract(&start);
/// assert_eq!(period.start(), &start);
/// assert_eq!(period.end(), &end);
///
/// let as_event = TimeEvent::from(period);
/// assert_eq!(as_event.to(TimeUnit::Milliseconds).unit(), TimeUnit::Milliseconds);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a time event is either an instant or an interval, there is nothing else it could be"
)]
pub enum TimeEvent {
    /// An instant.
    Tick(Tick),

    /// An interval between two time events.
    Period(Period),
}

impl TimeEvent {
    /// The name of the time event.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Tick(tick) => tick.name(),
            Self::Period(period) => period.name(),
        }
    }

    /// The unit in which the time event expresses its time value.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        match self {
            Self::Tick(tick) => tick.unit(),
            Self::Period(period) => period.unit(),
        }
    }

    /// The time value of the event in its unit: the instant of a tick or the duration of a period.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Tick(tick) => tick.time(),
            Self::Period(period) => period.time(),
        }
    }

    /// Returns the same time event expressed in another unit.
    #[must_use]
    pub fn to(&self, unit: TimeUnit) -> Self {
        match self {
            Self::Tick(tick) => Self::Tick(tick.to(unit)),
            Self::Period(period) => Self::Period(period.to(unit)),
        }
    }

    /// Builds the period from `other` to this event (`self - other`).
    ///
    /// * A tick minus anything is the period named "elapsed" from `other` to the tick,
    ///   expressed in the unit of `other`.
    /// * A period minus anything splices the opening instant of `other` with the end of
    ///   the period, as described on [`Period`].
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Period {
        match self {
            Self::Tick(tick) => tick - other,
            Self::Period(period) => period - other,
        }
    }

    /// The tick, if this event is one.
    #[must_use]
    pub fn as_tick(&self) -> Option<&Tick> {
        match self {
            Self::Tick(tick) => Some(tick),
            Self::Period(_) => None,
        }
    }

    /// The period, if this event is one.
    #[must_use]
    pub fn as_period(&self) -> Option<&Period> {
        match self {
            Self::Tick(_) => None,
            Self::Period(period) => Some(period),
        }
    }

    /// The event at which this one opens: a tick opens at itself, a period at its start.
    pub(crate) fn opening(&self) -> &Self {
        match self {
            Self::Tick(_) => self,
            Self::Period(period) => period.start(),
        }
    }
}

impl From<Tick> for TimeEvent {
    fn from(tick: Tick) -> Self {
        Self::Tick(tick)
    }
}

impl From<Period> for TimeEvent {
    fn from(period: Period) -> Self {
        Self::Period(period)
    }
}

impl Sub for &TimeEvent {
    type Output = Period;

    fn sub(self, other: Self) -> Period {
        self.subtract(other)
    }
}

impl fmt::Display for TimeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tick(tick) => fmt::Display::fmt(tick, f),
            Self::Period(period) => fmt::Display::fmt(period, f),
        }
    }
}
