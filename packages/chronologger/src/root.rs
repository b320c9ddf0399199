//! Repositories that start from a synthetic root tick.

use std::ops::{Deref, DerefMut};

use crate::{Clock, TimeRepository};

/// Name of the synthetic tick that every [`RootTimeRepository`] starts with.
pub const ROOT_TICK_NAME: &str = "root";

/// A [`TimeRepository`] that is created with its root tick already registered.
///
/// The root tick is named [`ROOT_TICK_NAME`] and captures the moment the repository was
/// created, so a fresh root repository holds exactly one event. In every other respect it
/// behaves like the [`TimeRepository`] it dereferences to.
///
/// # Examples
///
/// ```
/// use chronologger::{EventFilter, RootTimeRepository};
///
/// let repository = RootTimeRepository::new("my_app");
///
/// let events = repository.get_all(EventFilter::Regular, true);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].name(), "root");
/// ```
#[derive(Clone, Debug)]
pub struct RootTimeRepository {
    inner: TimeRepository,
}

impl RootTimeRepository {
    /// Creates a repository whose root tick is captured from the real clock.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, &Clock::new())
    }

    /// Creates a repository whose root tick is captured from the given clock.
    #[must_use]
    pub fn with_clock(name: impl Into<String>, clock: &Clock) -> Self {
        let mut inner = TimeRepository::new(name);

        inner
            .register_root(clock.tick(ROOT_TICK_NAME))
            .expect("a repository without events or timers always accepts its root tick");

        Self { inner }
    }

    /// Unwraps the plain repository.
    #[must_use]
    pub fn into_inner(self) -> TimeRepository {
        self.inner
    }
}

impl Deref for RootTimeRepository {
    type Target = TimeRepository;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RootTimeRepository {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<RootTimeRepository> for TimeRepository {
    fn from(value: RootTimeRepository) -> Self {
        value.into_inner()
    }
}
