//! Installer configuration: static mappings and per-run options.
pub mod mappings;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::resources::policy::OverwritePolicy;

/// Options for one installer run, built from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Target project directory; prompted for when `None`.
    pub target: Option<PathBuf>,
    /// Template source directory; auto-detected when `None`.
    pub source: Option<PathBuf>,
    /// Overwrite every existing file without asking.
    pub force: bool,
    /// Never ask: skip existing files and optional-file questions.
    pub skip_prompts: bool,
}

impl InstallOptions {
    /// Whether questions may be asked during the copy phase.
    #[must_use]
    pub const fn prompts_enabled(&self) -> bool {
        !self.skip_prompts
    }

    /// The starting overwrite policy for this run.
    #[must_use]
    pub const fn policy(&self) -> OverwritePolicy {
        OverwritePolicy::from_flags(self.force, self.skip_prompts)
    }
}

impl From<&Cli> for InstallOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            target: cli.target.clone(),
            source: cli.source.clone(),
            force: cli.force,
            skip_prompts: cli.skip_prompts,
        }
    }
}
