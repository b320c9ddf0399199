//! Thread-safe shared access to a repository.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::{ERR_POISONED_LOCK, Period, Result, RootTimeRepository, TimeEvent, TimeRepository};

/// A thread-safe handle to a [`TimeRepository`] that can be shared between timers and threads.
///
/// Cloning the handle is cheap and every clone refers to the same repository. Each operation
/// holds the lock only for its own duration, so structural changes and recording of events are
/// never interleaved with each other.
///
/// # Examples
///
/// ```
/// use chronologger::{RootTimeRepository, SharedRepository, Tick};
///
/// let repository = SharedRepository::from(RootTimeRepository::new("my_app"));
///
/// let worker_repository = repository.clone();
/// std::thread::spawn(move || {
///     worker_repository.register("worker", "my_app").unwrap();
///     worker_repository.add(Tick::new("worker started"), "worker").unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert!(repository.with(|repository| repository.contains("worker")));
/// ```
#[derive(Clone)]
pub struct SharedRepository {
    // The name never changes, so it is kept outside the lock.
    name: Arc<str>,

    inner: Arc<Mutex<TimeRepository>>,
}

impl SharedRepository {
    /// Wraps a repository so it can be shared.
    #[must_use]
    pub fn new(repository: TimeRepository) -> Self {
        Self {
            name: Arc::from(repository.name()),
            inner: Arc::new(Mutex::new(repository)),
        }
    }

    /// Registers a new timer as a child of the timer named `parent`.
    ///
    /// # Errors
    ///
    /// See [`TimeRepository::register()`].
    pub fn register(&self, name: impl Into<String>, parent: &str) -> Result<()> {
        self.with_mut(|repository| repository.register(name, parent))
    }

    /// Records an event against the timer named `timer`.
    ///
    /// # Errors
    ///
    /// See [`TimeRepository::add()`].
    pub fn add(&self, event: impl Into<TimeEvent>, timer: &str) -> Result<Option<Period>> {
        self.with_mut(|repository| repository.add(event, timer))
    }

    /// Records an event against the root timer.
    pub fn add_to_root(&self, event: impl Into<TimeEvent>) -> Option<Period> {
        self.with_mut(|repository| repository.add_to_root(event))
    }

    /// Renders the whole tree as text, as [`TimeRepository::render()`] does.
    #[must_use]
    pub fn render(&self) -> String {
        self.with(TimeRepository::render)
    }

    /// Calls `f` with shared access to the repository.
    ///
    /// The repository is locked while `f` runs, so `f` must not use this handle itself.
    pub fn with<R>(&self, f: impl FnOnce(&TimeRepository) -> R) -> R {
        let repository = self.inner.lock().expect(ERR_POISONED_LOCK);
        f(&repository)
    }

    /// Calls `f` with exclusive access to the repository.
    ///
    /// The repository is locked while `f` runs, so `f` must not use this handle itself.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut TimeRepository) -> R) -> R {
        let mut repository = self.inner.lock().expect(ERR_POISONED_LOCK);
        f(&mut repository)
    }

    /// The name of the repository, which is also the name of its root timer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prints the rendered tree to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        print!("{}", self.render());
    }
}

impl From<TimeRepository> for SharedRepository {
    fn from(repository: TimeRepository) -> Self {
        Self::new(repository)
    }
}

impl From<RootTimeRepository> for SharedRepository {
    fn from(repository: RootTimeRepository) -> Self {
        Self::new(repository.into_inner())
    }
}

impl fmt::Debug for SharedRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRepository")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SharedRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|repository| fmt::Display::fmt(repository, f))
    }
}
