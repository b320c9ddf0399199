//! Timers that capture start, mark and stop ticks.

use std::fmt;

use tracing::trace;

use crate::{
    Clock, Error, EventRecorder, LogSink, Period, Result, SharedRepository, Tick, TimeUnit,
    TimerBuilder, TimerGuard,
};

/// Name of the tick a timer records when it is stopped.
pub const STOP_LABEL: &str = "stop";

/// Measures elapsed time between a start, any number of intermediate marks and a stop.
///
/// A timer keeps its own record of the ticks it captured since it was last started. If the timer
/// was built in a repository, every tick is also recorded against the timer's own node in
/// that repository, which keeps the full history even when the timer is reset.
///
/// Timers can be used explicitly, as a scope guard that stops the timer when dropped or to
/// measure a closure.
///
/// # Examples
///
/// ```
/// use chronologger::{TimeUnit, Timer};
///
/// let mut timer = Timer::builder()
///     .name("load_config")
///     .unit(TimeUnit::Milliseconds)
///     .build();
///
/// timer.start()?;
/// // Read the file.
/// timer.mark("read")?;
/// // Parse the file.
/// let elapsed = timer.stop()?;
///
/// assert_eq!(elapsed.unit(), TimeUnit::Milliseconds);
/// println!("{timer}");
/// # Ok::<(), chronologger::Error>(())
/// ```
///
/// With a scope guard:
///
/// ```
/// use chronologger::Timer;
///
/// let mut timer = Timer::builder().name("scoped").build();
///
/// {
///     let mut guard = timer.scope()?;
///     // Do some work.
///     guard.mark("halfway")?;
///     // Do more work.
/// } // The timer is stopped here.
///
/// assert!(!timer.is_running());
/// assert_eq!(timer.len(), 3);
/// # Ok::<(), chronologger::Error>(())
/// ```
#[derive(Debug)]
pub struct Timer {
    name: String,

    // Depth of the timer in its repository, 0 for standalone timers.
    level: usize,

    repository: Option<SharedRepository>,
    options: TimerOptions,

    marks: EventRecorder,
    stopped: bool,
}

/// Settings of a [`Timer`] that do not depend on where it is registered.
#[derive(Debug)]
pub(crate) struct TimerOptions {
    pub(crate) description: String,
    pub(crate) unit: TimeUnit,
    pub(crate) start_label: String,
    pub(crate) log_on_exit: bool,
    pub(crate) verbose_log: bool,
    pub(crate) log_sink: LogSink,
    pub(crate) clock: Clock,
}

impl Timer {
    /// Creates a builder for configuring a new timer.
    pub fn builder() -> TimerBuilder {
        TimerBuilder::new()
    }

    pub(crate) fn new(
        name: String,
        level: usize,
        repository: Option<SharedRepository>,
        options: TimerOptions,
    ) -> Self {
        Self {
            name,
            level,
            repository,
            options,
            marks: EventRecorder::new(),
            stopped: false,
        }
    }

    /// The name of the timer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description of the timer.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.options.description
    }

    /// The unit in which the timer reports its periods.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.options.unit
    }

    /// How deep in its repository the timer is registered. Standalone timers are at level 0.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Starts the timer by recording its start tick.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if the timer has been started since it was created or
    /// last [`reset()`](Self::reset), even if it has been stopped since.
    pub fn start(&mut self) -> Result<()> {
        if !self.marks.is_empty() {
            return Err(Error::AlreadyRunning {
                timer: self.name.clone(),
            });
        }

        let tick = self
            .options
            .clock
            .tick_in(self.options.start_label.as_str(), self.options.unit);

        self.record(tick)?;

        trace!(timer = %self.name, "started");

        Ok(())
    }

    /// Records an intermediate tick and returns the period since the timer was started.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has not been started.
    pub fn mark(&mut self, label: impl Into<String>) -> Result<Period> {
        let label = label.into();
        let elapsed = self.tick_since_start(label.as_str())?;

        trace!(timer = %self.name, label = %label, "marked");

        Ok(elapsed)
    }

    /// Stops the timer by recording a stop tick and returns the period since it was started.
    ///
    /// If configured to log on exit, the elapsed time is logged through the log sink of the timer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has not been started.
    pub fn stop(&mut self) -> Result<Period> {
        let elapsed = self.tick_since_start(STOP_LABEL)?;
        self.stopped = true;

        trace!(timer = %self.name, "stopped");

        if self.options.log_on_exit {
            self.log();
        }

        Ok(elapsed)
    }

    /// Discards every tick captured by the timer, so it can be started again.
    ///
    /// Ticks already recorded in the repository of the timer are kept.
    pub fn reset(&mut self) {
        self.marks = EventRecorder::new();
        self.stopped = false;
    }

    /// Whether the timer has been started and not yet stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.marks.is_empty() && !self.stopped
    }

    /// The number of ticks captured since the timer was created or last reset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether no ticks have been captured since the timer was created or last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// The period from the first to the latest tick, if at least two ticks were captured.
    #[must_use]
    pub fn elapsed(&self) -> Option<Period> {
        self.marks.elapsed()
    }

    /// The ticks captured since the timer was created or last reset.
    #[must_use]
    pub fn recorder(&self) -> &EventRecorder {
        &self.marks
    }

    /// Starts the timer and returns a guard that stops it when dropped.
    ///
    /// A stopped timer starts a fresh measurement: its own ticks are discarded, while the
    /// ticks already recorded in its repository are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if the timer is running.
    pub fn scope(&mut self) -> Result<TimerGuard<'_>> {
        if self.stopped {
            self.reset();
        }

        self.start()?;
        Ok(TimerGuard::new(self))
    }

    /// Runs `f` with the timer running and returns its result with the period it took.
    ///
    /// The timer is stopped even if `f` panics. Like [`scope()`](Self::scope), a stopped timer
    /// can measure again, so the same timer can wrap every call of a function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if the timer is running.
    pub fn measure<R>(&mut self, f: impl FnOnce() -> R) -> Result<(R, Period)> {
        let guard = self.scope()?;
        let value = f();
        let elapsed = guard.finish()?;

        Ok((value, elapsed))
    }

    /// Writes the elapsed time of the timer to its log sink.
    ///
    /// Verbose timers log their full report instead.
    pub fn log(&self) {
        let message = if self.options.verbose_log {
            self.to_string()
        } else {
            format!("{} elapsed {}", self.name, self.format_elapsed())
        };

        self.options.log_sink.log(&message);
    }

    fn tick_since_start(&mut self, label: &str) -> Result<Period> {
        let Some(start) = self.marks.first() else {
            return Err(Error::NotStarted {
                timer: self.name.clone(),
            });
        };

        let tick = self.options.clock.tick_in(label, self.options.unit);
        let elapsed = &tick - start;

        self.record(tick)?;

        Ok(elapsed)
    }

    fn record(&mut self, tick: Tick) -> Result<()> {
        if let Some(repository) = &self.repository {
            repository.add(tick.clone(), &self.name)?;
        }

        self.marks.add(tick);

        Ok(())
    }

    fn format_elapsed(&self) -> String {
        let secs = self.marks.elapsed().map_or(0.0, |elapsed| elapsed.secs());
        self.options.unit.format_secs(secs)
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}) elapsed {}",
            self.name,
            self.level,
            self.format_elapsed()
        )?;

        if !self.options.description.is_empty() {
            writeln!(f, "{}", self.options.description)?;
        }

        write!(f, "{}", self.marks)
    }
}
