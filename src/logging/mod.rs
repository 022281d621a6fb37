//! Console logging built on [`tracing`].
//!
//! Components never talk to `tracing` directly; they receive a `&dyn Log`
//! so tests can capture output with an in-memory implementation.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::Log;
pub use utils::rule_width;

/// In-memory [`Log`] that records every message with its level tag.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    entries: std::sync::Mutex<Vec<(&'static str, String)>>,
}

#[cfg(test)]
impl RecordingLog {
    fn push(&self, level: &'static str, msg: &str) {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((level, msg.to_string()));
    }

    /// Messages recorded at `level`, in emission order.
    pub(crate) fn messages(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message at `level` contains `needle`.
    pub(crate) fn contains(&self, level: &str, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }
}

#[cfg(test)]
impl Log for RecordingLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn success(&self, msg: &str) {
        self.push("success", msg);
    }
    fn skip(&self, msg: &str) {
        self.push("skip", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
}
