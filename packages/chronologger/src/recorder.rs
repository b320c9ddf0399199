//! Ordered collections of time events.

use std::fmt;
use std::slice;

use crate::{Period, TimeEvent, TimeUnit};

/// An append-only, ordered collection of the time events of a single timer.
///
/// Insertion order is the only order: events are never sorted or removed. The elapsed
/// period of the recorder runs from its first to its last event.
///
/// # Examples
///
/// ```
/// use chronologger::{Clock, EventRecorder};
///
/// let clock = Clock::new();
/// let mut recorder = EventRecorder::new();
///
/// // A single event does not make a period yet.
/// assert!(recorder.add(clock.tick("start")).is_none());
///
/// // Every further event returns the period since the first one.
/// let elapsed = recorder.add(clock.tick("end")).unwrap();
/// assert!(elapsed.elapsed() >= 0.0);
///
/// assert_eq!(recorder.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventRecorder {
    events: Vec<TimeEvent>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and returns the period from the first event to the new one.
    ///
    /// Returns `None` if the recorder held no events before this call.
    pub fn add(&mut self, event: impl Into<TimeEvent>) -> Option<Period> {
        self.events.push(event.into());
        self.elapsed()
    }

    /// The earliest recorded event.
    #[must_use]
    pub fn first(&self) -> Option<&TimeEvent> {
        self.events.first()
    }

    /// The latest recorded event.
    #[must_use]
    pub fn last(&self) -> Option<&TimeEvent> {
        self.events.last()
    }

    /// The period from the first to the last event (`last - first`).
    ///
    /// Returns `None` if fewer than two events have been recorded.
    #[must_use]
    pub fn elapsed(&self) -> Option<Period> {
        if self.events.len() < 2 {
            return None;
        }

        let (first, last) = self.first().zip(self.last())?;
        Some(last.subtract(first))
    }

    /// Returns a new recorder with every event expressed in the given unit.
    ///
    /// The order of the events is preserved and this recorder is not modified.
    #[must_use]
    pub fn to(&self, unit: TimeUnit) -> Self {
        Self {
            events: self.events.iter().map(|event| event.to(unit)).collect(),
        }
    }

    /// All recorded events, in insertion order.
    #[must_use]
    pub fn events(&self) -> &[TimeEvent] {
        &self.events
    }

    /// Iterates over the recorded events in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, TimeEvent> {
        self.events.iter()
    }

    /// The number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventRecorder {
    type Item = &'a TimeEvent;
    type IntoIter = slice::Iter<'a, TimeEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per pair of consecutive events, each showing the period between the pair.
///
/// All periods are expressed in the unit of the first event and are named after the later
/// event of the pair.
impl fmt::Display for EventRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.first() else {
            return Ok(());
        };

        let unit = first.unit();

        for (previous, current) in self.events.iter().zip(self.events.iter().skip(1)) {
            let period = Period::new(current.name(), unit, previous.clone(), current.clone());
            writeln!(f, "\t- {period}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::Tick;

    assert_impl_all!(EventRecorder: Send, Sync, Clone);

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn tick(name: &str, unit: TimeUnit, secs: f64) -> Tick {
        Tick::at(name, unit, secs)
    }

    #[test]
    fn empty_recorder_has_nothing() {
        let recorder = EventRecorder::new();

        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
        assert!(recorder.first().is_none());
        assert!(recorder.last().is_none());
        assert!(recorder.elapsed().is_none());
        assert_eq!(recorder.to_string(), "");
    }

    #[test]
    fn first_add_returns_no_period() {
        let mut recorder = EventRecorder::new();

        assert!(recorder.add(tick("evt 0", TimeUnit::Seconds, 1.0)).is_none());
        assert!(recorder.elapsed().is_none());
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn second_add_returns_period_between_events() {
        let first = tick("evt 0", TimeUnit::Seconds, 1.0);
        let second = tick("evt 1", TimeUnit::Seconds, 1.5);

        let mut recorder = EventRecorder::new();
        recorder.add(first.clone());
        let period = recorder.add(second.clone()).unwrap();

        assert_eq!(period, &second - &first);
        assert!(approx_eq(period.elapsed(), 0.5));
    }

    #[test]
    fn elapsed_spans_first_to_last() {
        let mut recorder = EventRecorder::new();
        recorder.add(tick("evt 0", TimeUnit::Milliseconds, 1.0));
        recorder.add(tick("evt 1", TimeUnit::Seconds, 2.0));
        recorder.add(tick("evt 2", TimeUnit::Seconds, 4.0));

        let elapsed = recorder.elapsed().unwrap();

        assert_eq!(elapsed.start().name(), "evt 0");
        assert_eq!(elapsed.end().name(), "evt 2");
        assert_eq!(elapsed.unit(), TimeUnit::Milliseconds);
        assert!(approx_eq(elapsed.elapsed(), 3_000.0));
    }

    #[test]
    fn holds_events_in_insertion_order() {
        let mut recorder = EventRecorder::new();
        for i in 0..3 {
            recorder.add(tick(&format!("evt {i}"), TimeUnit::Seconds, 10.0 - f64::from(i)));
        }

        let names: Vec<_> = recorder.iter().map(TimeEvent::name).collect();
        assert_eq!(names, ["evt 0", "evt 1", "evt 2"]);
        assert_eq!(recorder.events().len(), 3);
        assert_eq!(recorder.first().unwrap().name(), "evt 0");
        assert_eq!(recorder.last().unwrap().name(), "evt 2");
    }

    #[test]
    fn to_converts_every_event_without_mutating_source() {
        let mut recorder = EventRecorder::new();
        recorder.add(tick("evt 1", TimeUnit::Seconds, 1.0));
        recorder.add(tick("evt 2", TimeUnit::Nanoseconds, 1.1));
        let before = recorder.clone();

        let converted = recorder.to(TimeUnit::Milliseconds);

        assert_eq!(recorder, before);
        assert_eq!(converted.len(), 2);
        assert!(converted.iter().all(|event| event.unit() == TimeUnit::Milliseconds));

        let names: Vec<_> = converted.iter().map(TimeEvent::name).collect();
        assert_eq!(names, ["evt 1", "evt 2"]);
    }

    #[test]
    fn display_uses_unit_of_first_event() {
        let mut recorder = EventRecorder::new();
        recorder.add(tick("start", TimeUnit::Milliseconds, 1.0));
        recorder.add(tick("middle", TimeUnit::Seconds, 1.5));
        recorder.add(tick("end", TimeUnit::Seconds, 2.0));

        let text = recorder.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.starts_with("\t- ")));
        assert!(lines.first().unwrap().starts_with("\t- middle: 500.000 ms"));
        assert!(lines.get(1).unwrap().starts_with("\t- end: 500.000 ms"));
    }

    #[test]
    fn display_of_single_event_is_empty() {
        let mut recorder = EventRecorder::new();
        recorder.add(tick("start", TimeUnit::Seconds, 1.0));

        assert_eq!(recorder.to_string(), "");
    }
}
