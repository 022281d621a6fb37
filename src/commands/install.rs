//! The install command: resolve paths, copy the templates, fix script
//! permissions, and report.
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::InstallOptions;
use crate::config::mappings::{COMMANDS, DIRECTORIES, FILES, FileMapping, SCRIPTS_DIR};
use crate::error::InstallError;
use crate::logging::{Log, rule_width};
use crate::prompt::Prompter;
use crate::resources::chmod::{ChmodOutcome, make_executable};
use crate::resources::file::copy_file;
use crate::resources::helpers::fs::{ensure_parent_dir, expand_tilde, home_dir};
use crate::resources::policy::OverwritePolicy;
use crate::resources::tree::copy_tree;
use crate::resources::{CopyOutcome, CopyStatus};

/// Totals for one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    /// Template source that was copied from.
    pub source: PathBuf,
    /// Project directory that was installed into.
    pub target: PathBuf,
    /// Merged copy counters; chmod failures are included in `failed`.
    pub outcome: CopyOutcome,
    /// Permission fixer counters.
    pub chmod: ChmodOutcome,
}

/// Run the install command.
///
/// Per-file failures are logged and counted in the returned summary; they
/// do not make the run fail.
///
/// # Errors
///
/// Returns an [`InstallError`] (wrapped in [`anyhow::Error`]) when the run
/// stops before or during copying: no target given, the user declined to
/// create it, it could not be created, it is the source directory itself,
/// the source cannot be located, or a question could not be answered.
pub fn run(
    opts: &InstallOptions,
    prompter: &dyn Prompter,
    log: &dyn Log,
) -> Result<InstallSummary> {
    log.stage("n8n Cursor Speckit installation");
    log.debug(&format!("speckit-install {}", crate::VERSION));

    let source = resolve_source(opts.source.as_deref())?;
    log.info(&format!("Source: {}", source.display()));

    let target = resolve_target(opts, prompter, log)?;
    if source == target {
        return Err(InstallError::SameDirectory(target).into());
    }
    log.info(&format!("Target: {}", target.display()));

    if opts.force {
        log.warn("Force mode: will overwrite all existing files");
    }

    let mut policy = opts.policy();
    let mut outcome = CopyOutcome::default();

    for mapping in DIRECTORIES {
        log.stage(&format!("{} ({})", mapping.description, mapping.source));
        let result = copy_tree(
            &source.join(mapping.source),
            &target.join(mapping.target),
            &mut policy,
            prompter,
            log,
        )?;
        outcome.merge(&result);
    }

    log.stage("Optional files");
    for file in FILES {
        let status = install_file(file, &source, &target, opts, &mut policy, prompter, log)?;
        outcome.record(status);
    }

    log.stage("Making scripts executable");
    let chmod = make_executable(&target.join(SCRIPTS_DIR), log);
    if chmod.succeeded > 0 {
        log.success(&format!("Made {} script(s) executable", chmod.succeeded));
    }
    if chmod.failed > 0 {
        log.error(&format!("Failed to chmod {} script(s)", chmod.failed));
    }
    outcome.failed += chmod.failed;
    outcome.force_all_triggered = policy.is_force_all();

    let summary = InstallSummary {
        source,
        target,
        outcome,
        chmod,
    };
    print_summary(&summary, log);
    Ok(summary)
}

/// Copy one configured file, asking first when it is optional.
fn install_file(
    file: &FileMapping,
    source: &Path,
    target: &Path,
    opts: &InstallOptions,
    policy: &mut OverwritePolicy,
    prompter: &dyn Prompter,
    log: &dyn Log,
) -> Result<CopyStatus, InstallError> {
    if file.optional
        && opts.prompts_enabled()
        && !prompter.ask_yes_no(&format!("Install {}? (y/n):", file.description))?
    {
        log.skip(&format!("Skipped: {}", file.target));
        return Ok(CopyStatus::Skipped);
    }

    let src = source.join(file.source);
    let dst = target.join(file.target);

    if !src.is_file() {
        log.error(&InstallError::SourceNotFound(PathBuf::from(file.source)).to_string());
        return Ok(CopyStatus::Failed);
    }

    if let Err(e) = ensure_parent_dir(&dst) {
        log.error(
            &InstallError::Write {
                path: dst,
                source: e,
            }
            .to_string(),
        );
        return Ok(CopyStatus::Failed);
    }

    Ok(copy_file(&src, &dst, policy, prompter, log)?.status)
}

/// Resolve the template source directory.
///
/// An explicit path must exist. Otherwise only the directories around the
/// running binary are searched, so a project that was installed into earlier
/// is never mistaken for the bundle.
///
/// # Errors
///
/// Returns [`InstallError::SourceNotFound`] for a missing explicit path and
/// [`InstallError::SourceUnresolved`] when auto-detection finds nothing.
pub fn resolve_source(explicit: Option<&Path>) -> Result<PathBuf, InstallError> {
    if let Some(path) = explicit {
        return dunce::canonicalize(path)
            .map_err(|_| InstallError::SourceNotFound(path.to_path_buf()));
    }

    let exe = std::env::current_exe().map_err(|_| InstallError::SourceUnresolved)?;
    exe.parent()
        .and_then(find_bundle_near)
        .ok_or(InstallError::SourceUnresolved)
}

/// First directory around `exe_dir` that holds a complete template bundle.
fn find_bundle_near(exe_dir: &Path) -> Option<PathBuf> {
    [
        exe_dir.join("../.."), // target/<profile>/ → crate root
        exe_dir.join(".."),    // bin/ → package root
        exe_dir.to_path_buf(),
    ]
    .iter()
    .find(|candidate| is_bundle(candidate))
    .and_then(|candidate| dunce::canonicalize(candidate).ok())
}

/// Whether `dir` contains every mapped directory and file of the templates.
fn is_bundle(dir: &Path) -> bool {
    DIRECTORIES.iter().all(|d| dir.join(d.source).is_dir())
        && FILES.iter().all(|f| dir.join(f.source).is_file())
}

/// Resolve, and if necessary create, the target project directory.
///
/// Returns the canonical path.
fn resolve_target(
    opts: &InstallOptions,
    prompter: &dyn Prompter,
    log: &dyn Log,
) -> Result<PathBuf, InstallError> {
    let raw = match &opts.target {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter.ask_text("Enter target project directory path:")?),
    };
    if raw.as_os_str().is_empty() {
        return Err(InstallError::NoTarget);
    }

    let target = absolute_target(&raw)?;

    if !target.exists() {
        log.warn(&format!(
            "Target directory does not exist: {}",
            target.display()
        ));
        let create = !opts.prompts_enabled() || prompter.ask_yes_no("Create it? (y/n):")?;
        if !create {
            return Err(InstallError::Cancelled);
        }
        std::fs::create_dir_all(&target).map_err(|e| InstallError::CreateDir {
            path: target.clone(),
            source: e,
        })?;
        log.success(&format!("Created directory: {}", target.display()));
    }

    Ok(dunce::canonicalize(&target).unwrap_or(target))
}

/// Expand `~` in `raw` and make it absolute against the current directory.
fn absolute_target(raw: &Path) -> Result<PathBuf, InstallError> {
    let invalid = |source| InstallError::InvalidTarget {
        path: raw.to_path_buf(),
        source,
    };
    let expanded = match raw.to_str() {
        Some(s) => expand_tilde(s, home_dir().as_deref()).map_err(invalid)?,
        None => raw.to_path_buf(),
    };
    std::path::absolute(&expanded).map_err(invalid)
}

/// Print the totals and, when something was installed, the next steps.
fn print_summary(summary: &InstallSummary, log: &dyn Log) {
    let outcome = &summary.outcome;
    let rule = "═".repeat(rule_width());

    log.info(&rule);
    log.stage("Installation Summary");
    log.success(&format!("Copied:  {} file(s)", outcome.copied));
    if outcome.skipped > 0 {
        log.skip(&format!("Skipped: {} file(s)", outcome.skipped));
    }
    if outcome.failed > 0 {
        log.error(&format!("Failed:  {} file(s)", outcome.failed));
    }
    log.info(&rule);

    if outcome.copied == 0 {
        log.warn("No files were copied.");
        return;
    }

    let target = summary.target.display();
    log.stage("Installation complete!");
    log.info("What was installed:");
    log.info(&format!("  • Cursor commands in: {target}/.cursor/commands/"));
    log.info(&format!("  • Speckit framework in: {target}/.specify/"));
    log.info("Next steps:");
    log.info(&format!("  1. cd {target}"));
    log.info("  2. Open directory in Cursor: cursor .");
    log.info("  3. Type /n8n.specify to start building workflows");
    log.info("Available commands:");
    for (command, description) in COMMANDS {
        log.info(&format!("  {command:<15} - {description}"));
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::logging::RecordingLog;
    use crate::prompt::{LinePrompter, MockPrompter};

    /// A template source with one command, one script, and the README.
    fn template_source() -> tempfile::TempDir {
        let src = tempfile::tempdir().unwrap();
        let root = src.path();
        std::fs::create_dir_all(root.join(".cursor/commands")).unwrap();
        std::fs::create_dir_all(root.join(".specify/scripts/bash")).unwrap();
        std::fs::write(root.join(".cursor/commands/n8n.specify.md"), "specify").unwrap();
        std::fs::write(root.join(".specify/scripts/bash/common.sh"), "#!/bin/bash").unwrap();
        std::fs::write(root.join("README.md"), "# Speckit").unwrap();
        src
    }

    fn opts(source: &Path, target: &Path) -> InstallOptions {
        InstallOptions {
            target: Some(target.to_path_buf()),
            source: Some(source.to_path_buf()),
            ..InstallOptions::default()
        }
    }

    #[test]
    fn resolve_source_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve_source(Some(&missing)).unwrap_err();
        assert!(matches!(err, InstallError::SourceNotFound(_)));
    }

    #[test]
    fn resolve_source_explicit_is_canonical() {
        let src = template_source();
        let resolved = resolve_source(Some(&src.path().join("."))).unwrap();
        assert_eq!(resolved, dunce::canonicalize(src.path()).unwrap());
    }

    #[test]
    fn partial_template_tree_is_not_a_bundle() {
        let project = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(project.path().join(".specify/memory")).unwrap();
        std::fs::write(
            project.path().join(".specify/memory/constitution.md"),
            "customised",
        )
        .unwrap();
        assert!(!is_bundle(project.path()));
        assert_eq!(find_bundle_near(project.path()), None);
    }

    #[test]
    fn bundle_is_found_above_bin_dir() {
        let pkg = template_source();
        let bin = pkg.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        assert!(is_bundle(pkg.path()));
        assert_eq!(
            find_bundle_near(&bin),
            Some(dunce::canonicalize(pkg.path()).unwrap())
        );
    }

    #[test]
    fn absolute_target_rejects_user_tilde() {
        let err = absolute_target(Path::new("~bob/proj")).unwrap_err();
        assert!(matches!(err, InstallError::InvalidTarget { .. }));
        assert!(err.to_string().contains("~user"));
    }

    #[test]
    fn absolute_target_failure_is_not_a_create_error() {
        let err = absolute_target(Path::new("")).unwrap_err();
        assert!(matches!(err, InstallError::InvalidTarget { .. }));
    }

    #[test]
    fn absolute_target_resolves_relative_paths() {
        let resolved = absolute_target(Path::new("proj")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("proj"));
    }

    #[test]
    fn user_tilde_target_stops_before_copying() {
        let src = template_source();
        let mut mock = MockPrompter::new();
        mock.expect_ask_text().never();
        let log = RecordingLog::default();

        let err = run(&opts(src.path(), Path::new("~bob/proj")), &mock, &log).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InstallError>(),
            Some(InstallError::InvalidTarget { .. })
        ));
        assert!(!Path::new("~bob").exists());
    }

    #[test]
    fn skip_prompts_installs_everything_without_asking() {
        let src = template_source();
        let dst = tempfile::tempdir().unwrap();
        let mut mock = MockPrompter::new();
        mock.expect_ask_text().never();
        mock.expect_ask_yes_no().never();
        let log = RecordingLog::default();
        let options = InstallOptions {
            skip_prompts: true,
            ..opts(src.path(), dst.path())
        };

        let summary = run(&options, &mock, &log).unwrap();

        assert_eq!(summary.outcome.copied, 3);
        assert_eq!(summary.outcome.failed, 0);
        assert!(dst.path().join("n8n-speckit-README.md").is_file());
        assert!(log.contains("stage", "Installation complete!"));
    }

    #[test]
    fn declining_optional_file_counts_skip() {
        let src = template_source();
        let dst = tempfile::tempdir().unwrap();
        let prompter = LinePrompter::scripted(&["n"]);
        let log = RecordingLog::default();

        let summary = run(&opts(src.path(), dst.path()), &prompter, &log).unwrap();

        assert_eq!(summary.outcome.copied, 2);
        assert_eq!(summary.outcome.skipped, 1);
        assert!(!dst.path().join("n8n-speckit-README.md").exists());
        assert!(prompter.transcript().contains("Install Documentation? (y/n):"));
    }

    #[test]
    fn same_directory_is_rejected_before_copying() {
        let src = template_source();
        let log = RecordingLog::default();
        let mut mock = MockPrompter::new();
        mock.expect_ask_text().never();

        let err = run(&opts(src.path(), src.path()), &mock, &log).unwrap_err();

        let inner = err.downcast_ref::<InstallError>().unwrap();
        assert!(matches!(inner, InstallError::SameDirectory(_)));
        assert!(!src.path().join("n8n-speckit-README.md").exists());
    }

    #[test]
    fn empty_prompted_target_is_no_target() {
        let src = template_source();
        let prompter = LinePrompter::scripted(&[""]);
        let log = RecordingLog::default();
        let options = InstallOptions {
            source: Some(src.path().to_path_buf()),
            ..InstallOptions::default()
        };

        let err = run(&options, &prompter, &log).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InstallError>(),
            Some(InstallError::NoTarget)
        ));
    }

    #[test]
    fn declining_creation_cancels_cleanly() {
        let src = template_source();
        let dst = tempfile::tempdir().unwrap();
        let missing = dst.path().join("new-project");
        let prompter = LinePrompter::scripted(&["n"]);
        let log = RecordingLog::default();

        let err = run(&opts(src.path(), &missing), &prompter, &log).unwrap_err();

        let inner = err.downcast_ref::<InstallError>().unwrap();
        assert!(inner.is_clean_exit());
        assert!(!missing.exists());
        assert!(log.contains("warn", "does not exist"));
    }

    #[test]
    fn accepting_creation_creates_target() {
        let src = template_source();
        let dst = tempfile::tempdir().unwrap();
        let missing = dst.path().join("nested/new-project");
        // create dir, then install optional README
        let prompter = LinePrompter::scripted(&["y", "y"]);
        let log = RecordingLog::default();

        let summary = run(&opts(src.path(), &missing), &prompter, &log).unwrap();

        assert!(missing.is_dir());
        assert_eq!(summary.outcome.copied, 3);
        assert!(log.contains("success", "Created directory"));
    }

    #[test]
    fn nothing_copied_warns() {
        let src = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(src.path().join(".specify")).unwrap();
        let dst = tempfile::tempdir().unwrap();
        let log = RecordingLog::default();
        let options = InstallOptions {
            skip_prompts: true,
            ..opts(src.path(), dst.path())
        };

        let summary = run(&options, &LinePrompter::scripted(&[]), &log).unwrap();

        assert_eq!(summary.outcome.copied, 0);
        // .cursor/commands and README.md are missing from this source
        assert_eq!(summary.outcome.failed, 2);
        assert!(log.contains("warn", "No files were copied."));
    }

    #[cfg(unix)]
    #[test]
    fn installed_scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;
        let src = template_source();
        let dst = tempfile::tempdir().unwrap();
        let options = InstallOptions {
            skip_prompts: true,
            ..opts(src.path(), dst.path())
        };

        let summary =
            run(&options, &LinePrompter::scripted(&[]), &RecordingLog::default()).unwrap();

        assert_eq!(summary.chmod.succeeded, 1);
        let mode = std::fs::metadata(dst.path().join(".specify/scripts/bash/common.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
