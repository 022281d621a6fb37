//! Top-level command orchestration.
pub mod install;

use crate::error::InstallError;

/// Exit status for a run that ended with `err`.
///
/// A user cancellation before anything was installed exits cleanly;
/// every other error exits with 1.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<InstallError>() {
        Some(e) if e.is_clean_exit() => 0,
        _ => 1,
    }
}
