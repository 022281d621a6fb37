//! Mark installed shell scripts executable (Unix only).
use std::path::Path;

use crate::logging::Log;

/// File-name suffixes treated as shell scripts.
pub const SCRIPT_SUFFIXES: [&str; 2] = [".sh", ".bash"];

/// Mode applied to every script: `rwxr-xr-x`.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Counters returned by [`make_executable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChmodOutcome {
    /// Scripts whose mode was set.
    pub succeeded: usize,
    /// Scripts or directories that could not be processed.
    pub failed: usize,
}

/// Whether `path`'s file name ends in one of [`SCRIPT_SUFFIXES`].
#[must_use]
pub fn is_script(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| SCRIPT_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// Walk `root` and set [`EXECUTABLE_MODE`] on every script file.
///
/// A missing `root` is not an error and yields zero counts. Individual
/// failures are logged and counted; the walk continues. On platforms
/// without Unix permission bits this step is not applicable: it logs that
/// and returns zero counts.
#[cfg_attr(not(unix), allow(unused_mut))]
pub fn make_executable(root: &Path, log: &dyn Log) -> ChmodOutcome {
    let mut outcome = ChmodOutcome::default();
    if !root.exists() {
        log.debug(&format!("no scripts directory at {}", root.display()));
        return outcome;
    }

    #[cfg(unix)]
    {
        let base = root.parent().unwrap_or(root);
        apply_recursive(root, base, log, &mut outcome);
    }

    #[cfg(not(unix))]
    log.info("chmod is not applicable on this platform; scripts keep their default permissions");

    outcome
}

#[cfg(unix)]
fn apply_recursive(dir: &Path, base: &Path, log: &dyn Log, outcome: &mut ChmodOutcome) {
    use super::helpers::fs::relative_to;
    use crate::error::InstallError;
    use std::os::unix::fs::PermissionsExt;

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log.error(&format!(
                "Error processing directory: {} - {e}",
                dir.display()
            ));
            outcome.failed += 1;
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log.error(&format!("Error reading entry in {}: {e}", dir.display()));
                outcome.failed += 1;
                continue;
            }
        };

        if path.is_dir() {
            apply_recursive(&path, base, log, outcome);
        } else if path.is_file() && is_script(&path) {
            let display = relative_to(&path, base);
            match std::fs::set_permissions(&path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
            {
                Ok(()) => {
                    log.success(&format!("Made executable: {}", display.display()));
                    outcome.succeeded += 1;
                }
                Err(e) => {
                    log.error(
                        &InstallError::Permission {
                            path: display,
                            source: e,
                        }
                        .to_string(),
                    );
                    outcome.failed += 1;
                }
            }
        }
    }
}
