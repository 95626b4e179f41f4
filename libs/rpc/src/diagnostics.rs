//! Deduplicated diagnostics
//!
//! RPC failures tend to repeat every tick once they start (an unregistered
//! method is retried by the same game loop that called it the first time).
//! Each distinct message is emitted once per session lifetime and then
//! suppressed; the set grows monotonically and is never pruned, which is
//! acceptable because cardinality is bounded by distinct failure messages,
//! not call volume.

use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::{error, warn};

/// Process-wide (per session) set of already-emitted diagnostics.
///
/// Warnings and errors share one set, so the same message never appears
/// twice regardless of severity. Reporting can originate from both the
/// sender and receiver paths within one tick, hence the mutex; under the
/// cooperative single-threaded model it is uncontended.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    seen: Mutex<HashSet<String>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `message` at error level, unless it was already reported.
    pub fn error_once(&self, message: impl Into<String>) {
        let message = message.into();
        if self.seen.lock().insert(message.clone()) {
            error!("{message}");
        }
    }

    /// Emit `message` at warn level, unless it was already reported.
    pub fn warn_once(&self, message: impl Into<String>) {
        let message = message.into();
        if self.seen.lock().insert(message.clone()) {
            warn!("{message}");
        }
    }

    /// Whether `message` has been reported at either severity.
    pub fn contains(&self, message: &str) -> bool {
        self.seen.lock().contains(message)
    }

    /// Number of distinct diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}
