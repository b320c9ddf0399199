#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named timers that record ticks and periods and organize them into a hierarchy.
//!
//! This package helps instrument code with explicit timing points. A timer captures
//! [`Tick`]s (named instants) and reports [`Period`]s (intervals between time events).
//! Timers can be arranged into a tree that is rendered as a human-readable timing report.
//!
//! The core functionality includes:
//! - [`TimeUnit`] - Resolution in which time values are expressed
//! - [`Tick`] and [`Period`] - Immutable time events, unified as [`TimeEvent`]
//! - [`EventRecorder`] - Ordered, append-only collection of the events of one timer
//! - [`TimeRepository`] - Tree of named timers, each with its own recorder
//! - [`RootTimeRepository`] - Repository that starts with a synthetic root tick
//! - [`Timer`] - Start/mark/stop ergonomics on top of the repository, including scope guards
//!
//! # Tick and period arithmetic
//!
//! Subtracting one tick from another produces the period between them. Units are only
//! reconciled when a period is read, so events captured in different units can be mixed.
//!
//! ```
//! use chronologger::{Clock, TimeUnit};
//!
//! let clock = Clock::new();
//! let start = clock.tick("start");
//! let end = clock.tick_in("end", TimeUnit::Nanoseconds);
//!
//! let period = &end - &start;
//! let in_ms = period.to(TimeUnit::Milliseconds);
//!
//! assert!((in_ms.secs() - period.secs()).abs() < 1e-9);
//! println!("{period}");
//! ```
//!
//! # Timer hierarchies
//!
//! Timers built in a shared repository record every tick against their own node of the tree.
//!
//! ```
//! use chronologger::{RootTimeRepository, SharedRepository, Timer};
//!
//! let repository = SharedRepository::from(RootTimeRepository::new("my_app"));
//!
//! let mut request = Timer::builder().name("request").build_in(&repository)?;
//! let mut query = Timer::builder()
//!     .name("query")
//!     .parent("request")
//!     .build_in(&repository)?;
//!
//! {
//!     let _request = request.scope()?;
//!     let (rows, _elapsed) = query.measure(|| vec![1, 2, 3])?;
//!     assert_eq!(rows.len(), 3);
//! }
//!
//! repository.print_to_stdout();
//! # Ok::<(), chronologger::Error>(())
//! ```
//!
//! # Process-wide root
//!
//! The [`global`] module offers a lazily created repository shared by the whole process,
//! for code that does not want to pass a repository around.
//!
//! # Logging
//!
//! Structural changes are logged with `tracing` at the `DEBUG` level and individual ticks at
//! the `TRACE` level. Timers configured to log their elapsed time use a [`LogSink`], which
//! defaults to `INFO` level `tracing` events under the `chronologger` target.

mod clock;
mod error;
mod event;
pub mod global;
mod log_sink;
mod pal;
mod period;
mod recorder;
mod repository;
mod root;
mod shared;
mod tick;
mod timer;
mod timer_builder;
mod timer_guard;
mod unit;

pub use clock::Clock;
pub use error::{Error, Result};
pub use event::TimeEvent;
pub use log_sink::LogSink;
pub use period::Period;
pub use recorder::EventRecorder;
pub use repository::{EventFilter, TimeRepository, TimerNode};
pub use root::{ROOT_TICK_NAME, RootTimeRepository};
pub use shared::SharedRepository;
pub use tick::Tick;
pub use timer::{STOP_LABEL, Timer};
pub use timer_builder::TimerBuilder;
pub use timer_guard::TimerGuard;
pub use unit::TimeUnit;

pub(crate) const ERR_POISONED_LOCK: &str =
    "encountered poisoned lock - program validity cannot be guaranteed";
