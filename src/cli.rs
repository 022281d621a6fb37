//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI entry point for the Speckit installer.
#[derive(Parser, Debug)]
#[command(
    name = "speckit-install",
    about = "Install the n8n Cursor Speckit templates into a project",
    version = crate::VERSION
)]
pub struct Cli {
    /// Target project directory (prompted for when omitted)
    pub target: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Do not ask questions: skip existing files and install optional files
    #[arg(short = 'y', long)]
    pub skip_prompts: bool,

    /// Override the template source directory
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
