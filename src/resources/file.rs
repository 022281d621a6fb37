//! Single-file copy with the overwrite decision.
use std::io;
use std::path::Path;

use super::CopyStatus;
use super::helpers::fs::display_path;
use super::policy::{OverwriteMode, OverwritePolicy};
use crate::error::InstallError;
use crate::logging::Log;
use crate::prompt::{Prompter, normalize};

/// Result of [`copy_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCopy {
    /// What happened to the file.
    pub status: CopyStatus,
    /// `true` when this call's answer switched the run to force-all.
    pub force_all_now: bool,
}

impl FileCopy {
    const fn new(status: CopyStatus, force_all_now: bool) -> Self {
        Self {
            status,
            force_all_now,
        }
    }
}

/// The user's reply to an overwrite question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverwriteAnswer {
    Yes,
    All,
    No,
}

impl OverwriteAnswer {
    fn parse(answer: &str) -> Self {
        match normalize(answer).as_str() {
            "y" | "yes" => Self::Yes,
            "a" | "all" => Self::All,
            _ => Self::No,
        }
    }
}

/// Copy `source` to `target`, consulting `policy` when `target` exists.
///
/// | mode | answer | effect |
/// |---|---|---|
/// | `Interactive` | `y` / `yes` | overwrite |
/// | `Interactive` | `a` / `all` | overwrite and escalate the policy to force-all |
/// | `Interactive` | anything else | skip |
/// | `SkipExisting` | n/a | skip without asking |
/// | `ForceAll` | n/a | overwrite without asking |
///
/// The source is read whole and written byte for byte. A read or
/// write failure is logged and reported as [`CopyStatus::Failed`]; it is not
/// an `Err`.
///
/// # Errors
///
/// Returns [`InstallError::Prompt`] only if the overwrite question could not
/// be answered.
pub fn copy_file(
    source: &Path,
    target: &Path,
    policy: &mut OverwritePolicy,
    prompter: &dyn Prompter,
    log: &dyn Log,
) -> Result<FileCopy, InstallError> {
    let mut force_all_now = false;

    if target.exists() {
        match policy.mode() {
            OverwriteMode::ForceAll => {}
            OverwriteMode::SkipExisting => {
                log.skip(&format!(
                    "Skipped (already exists): {}",
                    display_path(target)
                ));
                return Ok(FileCopy::new(CopyStatus::Skipped, false));
            }
            OverwriteMode::Interactive => {
                let question = format!(
                    "File exists: {}\n  Overwrite? (y/n/a=all):",
                    target.display()
                );
                match OverwriteAnswer::parse(&prompter.ask_text(&question)?) {
                    OverwriteAnswer::Yes => {}
                    OverwriteAnswer::All => {
                        force_all_now = policy.escalate();
                        log.debug("overwriting all remaining files");
                    }
                    OverwriteAnswer::No => {
                        log.skip(&format!("Skipped: {}", display_path(target)));
                        return Ok(FileCopy::new(CopyStatus::Skipped, false));
                    }
                }
            }
        }
    }

    let status = match write_bytes(source, target) {
        Ok(()) => {
            log.success(&format!("Copied: {}", display_path(target)));
            CopyStatus::Copied
        }
        Err(e) => {
            log.error(&e.to_string());
            CopyStatus::Failed
        }
    };
    Ok(FileCopy::new(status, force_all_now))
}

/// Read `source` fully and write its bytes to `target`.
fn write_bytes(source: &Path, target: &Path) -> Result<(), InstallError> {
    let content = std::fs::read(source).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            InstallError::SourceNotFound(source.to_path_buf())
        } else {
            InstallError::Write {
                path: source.to_path_buf(),
                source: e,
            }
        }
    })?;
    std::fs::write(target, content).map_err(|e| InstallError::Write {
        path: target.to_path_buf(),
        source: e,
    })
}
