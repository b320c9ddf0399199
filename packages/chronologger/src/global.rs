//! The process-wide root repository.
//!
//! The repository is created on first access through [`root()`] and lives until the process
//! exits. Timers built with [`TimerBuilder::build_global()`](crate::TimerBuilder::build_global)
//! register themselves in it.

use std::sync::LazyLock;

use tracing::debug;

use crate::{RootTimeRepository, SharedRepository};

/// Name of the process-wide root repository.
pub const GLOBAL_ROOT_NAME: &str = "root";

static ROOT: LazyLock<SharedRepository> = LazyLock::new(|| {
    debug!(repository = GLOBAL_ROOT_NAME, "created process-wide root repository");
    SharedRepository::from(RootTimeRepository::new(GLOBAL_ROOT_NAME))
});

/// The process-wide root repository, created on first access.
///
/// # Examples
///
/// ```
/// use chronologger::{Tick, global};
///
/// global::root().register("startup", "root")?;
/// global::root().add(Tick::new("config loaded"), "startup")?;
///
/// println!("{}", global::root().render());
/// # Ok::<(), chronologger::Error>(())
/// ```
#[must_use]
pub fn root() -> &'static SharedRepository {
    &ROOT
}

/// Prints the rendered process-wide root repository to stdout.
#[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
pub fn show_time() {
    root().print_to_stdout();
}
