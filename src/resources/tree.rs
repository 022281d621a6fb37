//! Recursive directory copy.
use std::path::Path;

use super::file::copy_file;
use super::policy::OverwritePolicy;
use super::{CopyOutcome, CopyStatus};
use crate::error::InstallError;
use crate::logging::Log;
use crate::prompt::Prompter;

/// Replicate `source_dir` under `target_dir`, file by file.
///
/// Children are visited in directory-listing order, depth first. The same
/// `policy` is threaded through every nested call, so a "force all" answer
/// given deep in the tree applies to every entry visited afterwards,
/// including the caller's later mappings.
///
/// Symlinks are followed: a link to a directory is recursed into and a link
/// to a file has its content copied. Other entry kinds are ignored.
///
/// A missing source directory is logged and counted as one failure; nothing
/// is created in that case.
///
/// # Errors
///
/// Returns [`InstallError::Prompt`] only if an overwrite question could not
/// be answered. Filesystem failures are logged and counted instead.
pub fn copy_tree(
    source_dir: &Path,
    target_dir: &Path,
    policy: &mut OverwritePolicy,
    prompter: &dyn Prompter,
    log: &dyn Log,
) -> Result<CopyOutcome, InstallError> {
    if !source_dir.is_dir() {
        log.error(&InstallError::SourceNotFound(source_dir.to_path_buf()).to_string());
        return Ok(finish(CopyOutcome::single_failure(), policy));
    }

    if let Err(e) = std::fs::create_dir_all(target_dir) {
        log.error(
            &InstallError::CreateDir {
                path: target_dir.to_path_buf(),
                source: e,
            }
            .to_string(),
        );
        return Ok(finish(CopyOutcome::single_failure(), policy));
    }

    let entries = match std::fs::read_dir(source_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log.error(&format!(
                "Error processing directory: {} - {e}",
                source_dir.display()
            ));
            return Ok(finish(CopyOutcome::single_failure(), policy));
        }
    };

    let mut outcome = CopyOutcome::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log.error(&format!(
                    "Error reading entry in {}: {e}",
                    source_dir.display()
                ));
                outcome.record(CopyStatus::Failed);
                continue;
            }
        };
        let src_path = entry.path();
        let dst_path = target_dir.join(entry.file_name());

        if src_path.is_dir() {
            let nested = copy_tree(&src_path, &dst_path, policy, prompter, log)?;
            outcome.merge(&nested);
        } else if src_path.is_file() {
            let result = copy_file(&src_path, &dst_path, policy, prompter, log)?;
            outcome.record(result.status);
        } else {
            log.debug(&format!("ignoring {}", src_path.display()));
        }
    }

    Ok(finish(outcome, policy))
}

/// Stamp the policy's final force-all state onto `outcome`.
const fn finish(mut outcome: CopyOutcome, policy: &OverwritePolicy) -> CopyOutcome {
    outcome.force_all_triggered = policy.is_force_all();
    outcome
}
