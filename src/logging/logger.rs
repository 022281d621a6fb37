//! Production logger that forwards to `tracing`.
use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Log;

/// `tracing` target for stage headers.
pub(super) const STAGE_TARGET: &str = "speckit::stage";
/// `tracing` target for completed actions.
pub(super) const SUCCESS_TARGET: &str = "speckit::success";
/// `tracing` target for skipped items.
pub(super) const SKIP_TARGET: &str = "speckit::skip";

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Console logger.
///
/// Every message becomes a `tracing` event; the subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) decides how it is
/// rendered. The logger also counts warnings and errors so `main` can report
/// them when the run ends.
#[derive(Debug, Default)]
pub struct Logger {
    warnings: AtomicUsize,
    errors: AtomicUsize,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        tracing::error!("{msg}");
    }

    /// Number of warnings logged so far.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    /// Number of errors logged so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn success(&self, msg: &str) {
        tracing::info!(target: SUCCESS_TARGET, "{msg}");
    }

    fn skip(&self, msg: &str) {
        tracing::info!(target: SKIP_TARGET, "{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    forward_log_methods!(warn, error);
}
