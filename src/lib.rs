//! Interactive installer for the n8n Cursor Speckit templates.
//!
//! Copies the bundled `.cursor/commands` and `.specify` trees (plus an
//! optional README) into a project directory, asking before overwriting
//! existing files, and marks the installed shell scripts executable.
//!
//! The crate is organised into four layers:
//!
//! - **[`config`]**: static mappings and per-run options
//! - **[`prompt`]**: yes/no and free-text questions behind a trait
//! - **[`resources`]**: overwrite policy, file copy, tree copy, chmod
//! - **[`commands`]**: the install sequence and exit-code mapping
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod resources;

/// Version string: `SPECKIT_VERSION` from the build, else the package version.
pub const VERSION: &str = match option_env!("SPECKIT_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
