//! Filesystem primitives: overwrite policy, single-file copy, tree copy,
//! and the executable-bit fixer.
pub mod chmod;
pub mod file;
pub mod helpers;
pub mod policy;
pub mod tree;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    /// Content was written to the target.
    Copied,
    /// The target already existed and was left untouched.
    Skipped,
    /// Reading the source or writing the target failed.
    Failed,
}

/// Aggregate counters for one copy operation.
///
/// Outcomes from nested directories and separate mappings are folded into
/// the caller's totals with [`merge`](Self::merge).
///
/// # Examples
///
/// ```
/// use speckit_installer::resources::{CopyOutcome, CopyStatus};
///
/// let mut total = CopyOutcome::default();
/// total.record(CopyStatus::Copied);
/// total.record(CopyStatus::Skipped);
///
/// let mut nested = CopyOutcome::default();
/// nested.record(CopyStatus::Copied);
/// nested.force_all_triggered = true;
///
/// total.merge(&nested);
/// assert_eq!(total.copied, 2);
/// assert_eq!(total.skipped, 1);
/// assert!(total.force_all_triggered);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Files written to the target.
    pub copied: usize,
    /// Files left alone because the target already existed.
    pub skipped: usize,
    /// Files or directories that could not be copied.
    pub failed: usize,
    /// Whether the run-wide policy was "overwrite everything" when this
    /// operation finished.
    pub force_all_triggered: bool,
}

impl CopyOutcome {
    /// Outcome for an operation that failed before touching anything.
    #[must_use]
    pub const fn single_failure() -> Self {
        Self {
            copied: 0,
            skipped: 0,
            failed: 1,
            force_all_triggered: false,
        }
    }

    /// Count one file result.
    pub const fn record(&mut self, status: CopyStatus) {
        match status {
            CopyStatus::Copied => self.copied += 1,
            CopyStatus::Skipped => self.skipped += 1,
            CopyStatus::Failed => self.failed += 1,
        }
    }

    /// Add `other`'s counters to `self`; the force-all flag is sticky.
    pub const fn merge(&mut self, other: &Self) {
        self.copied += other.copied;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.force_all_triggered |= other.force_all_triggered;
    }
}
