//! Domain-specific error types for the installer.
//!
//! Component functions return [`InstallError`]; the command layer wraps it in
//! [`anyhow::Error`] and `main` downcasts to pick the exit code.
//!
//! # Error kinds
//!
//! ```text
//! InstallError
//! ├── SourceNotFound / Write / Permission  : per-file, logged and counted
//! ├── Cancelled / NoTarget                 : user declined or gave no input
//! ├── SameDirectory / InvalidTarget        : fatal configuration error
//! └── CreateDir / SourceUnresolved / Prompt : fatal top-level failures
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while installing the templates.
#[derive(Error, Debug)]
pub enum InstallError {
    /// A source file or directory was missing at copy time.
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Reading the source or writing the target failed.
    #[error("Failed to copy {}: {source}", path.display())]
    Write {
        /// Path that could not be read or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Changing the permission bits of an installed file failed.
    #[error("Failed to chmod {}: {source}", path.display())]
    Permission {
        /// File whose mode could not be changed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The user declined to continue before anything was installed.
    #[error("Installation cancelled")]
    Cancelled,

    /// No target directory was given on the command line or at the prompt.
    #[error("No target directory provided. Installation cancelled.")]
    NoTarget,

    /// The target resolves to the installer's own source directory.
    #[error("Cannot install to the same directory as source: {}", .0.display())]
    SameDirectory(PathBuf),

    /// The target directory did not exist and could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The target path could not be turned into an absolute path.
    #[error("Invalid target path {}: {source}", path.display())]
    InvalidTarget {
        /// Path as given by the user.
        path: PathBuf,
        /// Why it was rejected.
        source: io::Error,
    },

    /// No candidate location contained the bundled templates.
    #[error("cannot determine template source directory. Use --source")]
    SourceUnresolved,

    /// Reading an answer from the terminal failed.
    #[error("Failed to read user input: {0}")]
    Prompt(#[source] io::Error),
}

impl InstallError {
    /// Whether this error should end the process with a zero exit code.
    #[must_use]
    pub const fn is_clean_exit(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
