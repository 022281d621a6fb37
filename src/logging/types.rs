//! The [`Log`] capability handed to every installer component.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`; tests substitute
/// an in-memory recorder so they can assert on what was reported.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a completed action (file copied, script made executable).
    fn success(&self, msg: &str);
    /// Log an item that was deliberately left alone.
    fn skip(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}
