//! Static source-to-target mappings for the bundled templates.

/// A directory copied recursively into the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryMapping {
    /// Path relative to the template source.
    pub source: &'static str,
    /// Path relative to the target project.
    pub target: &'static str,
    /// Human-readable label shown while installing.
    pub description: &'static str,
}

/// A single file copied into the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMapping {
    /// Path relative to the template source.
    pub source: &'static str,
    /// Path relative to the target project.
    pub target: &'static str,
    /// Human-readable label shown while installing.
    pub description: &'static str,
    /// Ask before installing unless prompts are disabled.
    pub optional: bool,
}

/// Directories installed on every run, in order.
pub const DIRECTORIES: &[DirectoryMapping] = &[
    DirectoryMapping {
        source: ".cursor/commands",
        target: ".cursor/commands",
        description: "Cursor command templates",
    },
    DirectoryMapping {
        source: ".specify",
        target: ".specify",
        description: "Speckit framework files",
    },
];

/// Individual files installed after the directories.
pub const FILES: &[FileMapping] = &[FileMapping {
    source: "README.md",
    target: "n8n-speckit-README.md",
    description: "Documentation",
    optional: true,
}];

/// Subtree of the target whose shell scripts are made executable.
pub const SCRIPTS_DIR: &str = ".specify";

/// Slash commands advertised after a successful install.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/n8n.specify", "Create workflow specification"),
    ("/n8n.clarify", "Resolve ambiguities"),
    ("/n8n.plan", "Design technical architecture"),
    ("/n8n.implement", "Build the workflow"),
    ("/n8n.analyze", "Validate quality"),
    ("/n8n.align", "Sync specs with changes"),
    ("/n8n.checklist", "Generate quality checklists"),
];
