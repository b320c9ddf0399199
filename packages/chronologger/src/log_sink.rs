//! Where timers send their log messages.

use std::fmt;
use std::sync::Arc;

use tracing::info;

/// Destination for the messages that timers log when they stop.
///
/// By default, messages are emitted as `tracing` events at the `INFO` level under the
/// `chronologger` target. Any callback that accepts a string can be used instead.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use chronologger::LogSink;
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = LogSink::new({
///     let lines = Arc::clone(&lines);
///     move |message: &str| lines.lock().unwrap().push(message.to_string())
/// });
///
/// sink.log("hello");
/// assert_eq!(*lines.lock().unwrap(), ["hello"]);
/// ```
#[derive(Clone, Default)]
pub struct LogSink {
    callback: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl LogSink {
    /// Creates a sink that passes every message to `callback`.
    #[must_use]
    pub fn new(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    /// Creates a sink that emits messages as `tracing` events.
    #[must_use]
    pub fn tracing() -> Self {
        Self::default()
    }

    /// Writes one message to the sink.
    pub fn log(&self, message: &str) {
        match &self.callback {
            Some(callback) => callback(message),
            None => info!(target: "chronologger", "{message}"),
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.callback.is_some() {
            "callback"
        } else {
            "tracing"
        };

        f.debug_tuple("LogSink").field(&kind).finish()
    }
}
