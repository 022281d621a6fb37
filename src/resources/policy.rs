//! Run-wide overwrite policy.

/// How existing target files are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteMode {
    /// Overwrite every existing file without asking.
    ForceAll,
    /// Ask the user before overwriting each existing file.
    Interactive,
    /// Leave every existing file alone without asking.
    SkipExisting,
}

/// The effective overwrite policy for one run.
///
/// Created once from the command-line flags and passed by `&mut` through
/// every copy call. The only transition is [`escalate`](Self::escalate) to
/// [`OverwriteMode::ForceAll`]; it never goes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwritePolicy {
    mode: OverwriteMode,
}

impl OverwritePolicy {
    /// Policy with an explicit starting mode.
    #[must_use]
    pub const fn new(mode: OverwriteMode) -> Self {
        Self { mode }
    }

    /// Derive the policy from `--force` and `--skip-prompts`.
    ///
    /// `--force` wins over `--skip-prompts`.
    ///
    /// ```
    /// use speckit_installer::resources::policy::{OverwriteMode, OverwritePolicy};
    ///
    /// assert_eq!(OverwritePolicy::from_flags(true, true).mode(), OverwriteMode::ForceAll);
    /// assert_eq!(OverwritePolicy::from_flags(false, true).mode(), OverwriteMode::SkipExisting);
    /// assert_eq!(OverwritePolicy::from_flags(false, false).mode(), OverwriteMode::Interactive);
    /// ```
    #[must_use]
    pub const fn from_flags(force: bool, skip_prompts: bool) -> Self {
        let mode = if force {
            OverwriteMode::ForceAll
        } else if skip_prompts {
            OverwriteMode::SkipExisting
        } else {
            OverwriteMode::Interactive
        };
        Self { mode }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> OverwriteMode {
        self.mode
    }

    /// Whether existing files are overwritten without asking.
    #[must_use]
    pub const fn is_force_all(&self) -> bool {
        matches!(self.mode, OverwriteMode::ForceAll)
    }

    /// Switch to [`OverwriteMode::ForceAll`] for the rest of the run.
    ///
    /// Returns `true` if the mode changed.
    pub const fn escalate(&mut self) -> bool {
        let changed = !self.is_force_all();
        self.mode = OverwriteMode::ForceAll;
        changed
    }
}
