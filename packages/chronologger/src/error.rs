//! Errors reported by repositories and timers.

use thiserror::Error;

/// Errors that can occur when registering timers or recording time events.
///
/// All of these indicate incorrect use of the API. They are detected before anything is
/// mutated, so an operation that returns an error has had no effect.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A timer was registered under a name that is already used somewhere in the repository.
    #[error("timer name '{name}' already exists in the repository; use a unique name for each timer")]
    DuplicateName {
        /// The name that was already taken.
        name: String,
    },

    /// A registration or recording referenced a parent timer that does not exist.
    #[error("no timer named '{name}' exists in the repository")]
    UnknownParent {
        /// The name that could not be resolved.
        name: String,
    },

    /// The root of a repository was registered when the repository already had its root.
    #[error("repository '{repository}' already has its root registered as '{existing}'")]
    DuplicateRegistration {
        /// Name of the repository whose root was registered twice.
        repository: String,

        /// Name of the time event the root is already registered with.
        existing: String,
    },

    /// The root of a repository was registered after events had already been recorded
    /// against its root timer.
    #[error(
        "root timer of repository '{repository}' already holds events, starting with '{first}'; the root tick must be registered first"
    )]
    RootNotEmpty {
        /// Name of the repository.
        repository: String,

        /// Name of the earliest event recorded against the root timer.
        first: String,
    },

    /// A timer was started while it was already running.
    #[error("timer '{timer}' is already running; reset it before starting it again")]
    AlreadyRunning {
        /// Name of the timer.
        timer: String,
    },

    /// A timer was marked or stopped before being started.
    #[error("timer '{timer}' has not been started")]
    NotStarted {
        /// Name of the timer.
        timer: String,
    },
}

/// A specialized `Result` type for chronologger operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
