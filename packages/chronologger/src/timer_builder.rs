//! Configuration and construction of timers.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::timer::TimerOptions;
use crate::{Clock, Error, LogSink, Result, SharedRepository, TimeUnit, Timer, TimerNode, global};

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(0);

/// Creates instances of [`Timer`].
///
/// All parameters are optional. A timer without an explicit name is named `timer_<n>` with a
/// number that is unique within the process.
///
/// Use `Timer::builder()` to create a new instance of this builder.
#[derive(Debug)]
#[must_use]
pub struct TimerBuilder {
    name: Option<String>,

    /// Only used when the timer is registered in a repository. Defaults to the root timer.
    parent: Option<String>,

    options: TimerOptions,
}

impl TimerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            name: None,
            parent: None,
            options: TimerOptions {
                description: String::new(),
                unit: TimeUnit::default(),
                start_label: "start".to_string(),
                log_on_exit: false,
                verbose_log: false,
                log_sink: LogSink::default(),
                clock: Clock::new(),
            },
        }
    }

    /// Sets the name of the timer.
    ///
    /// Within a repository, timer names must be unique.
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets the name of the timer to register the new timer under.
    ///
    /// Defaults to the root timer of the repository. Ignored by [`build()`](Self::build).
    pub fn parent(self, parent: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
            ..self
        }
    }

    /// Sets a free-form description that is shown in the detailed report of the timer.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.options.description = description.into();
        self
    }

    /// Sets the unit in which the timer reports its periods. Defaults to seconds.
    pub fn unit(mut self, unit: TimeUnit) -> Self {
        self.options.unit = unit;
        self
    }

    /// Sets the name of the tick recorded when the timer starts. Defaults to `"start"`.
    pub fn start_label(mut self, label: impl Into<String>) -> Self {
        self.options.start_label = label.into();
        self
    }

    /// Whether the timer logs its elapsed time whenever it is stopped. Defaults to `false`.
    pub fn log_on_exit(mut self, log_on_exit: bool) -> Self {
        self.options.log_on_exit = log_on_exit;
        self
    }

    /// Whether logged messages contain the full report of the timer, including every mark,
    /// instead of only the elapsed time. Defaults to `false`.
    pub fn verbose_log(mut self, verbose_log: bool) -> Self {
        self.options.verbose_log = verbose_log;
        self
    }

    /// Sets where logged messages go. Defaults to `tracing` events.
    pub fn log_sink(mut self, log_sink: LogSink) -> Self {
        self.options.log_sink = log_sink;
        self
    }

    /// Sets the clock the timer captures its ticks from. Defaults to the real monotonic clock.
    pub fn clock(mut self, clock: Clock) -> Self {
        self.options.clock = clock;
        self
    }

    /// Builds a standalone timer that is not part of any repository.
    #[must_use]
    pub fn build(self) -> Timer {
        let name = self.name.unwrap_or_else(generate_name);
        Timer::new(name, 0, None, self.options)
    }

    /// Builds a timer and registers it in the given repository.
    ///
    /// Every tick the timer records is also recorded against its own timer in the repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParent`] if the configured parent does not exist in the repository.
    ///
    /// Returns [`Error::DuplicateName`] if the repository already has a timer with this name.
    pub fn build_in(self, repository: &SharedRepository) -> Result<Timer> {
        let name = self.name.unwrap_or_else(generate_name);
        let parent = self.parent;

        let level = repository.with_mut(|tree| {
            let parent = parent.unwrap_or_else(|| tree.name().to_string());
            tree.register(name.clone(), &parent)?;

            Ok::<_, Error>(
                tree.node(&name)
                    .map(TimerNode::depth)
                    .expect("timer was registered under the same lock"),
            )
        })?;

        Ok(Timer::new(name, level, Some(repository.clone()), self.options))
    }

    /// Builds a timer and registers it in the process-wide root repository.
    ///
    /// # Errors
    ///
    /// See [`build_in()`](Self::build_in).
    pub fn build_global(self) -> Result<Timer> {
        self.build_in(global::root())
    }
}

fn generate_name() -> String {
    format!("timer_{}", NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
}
