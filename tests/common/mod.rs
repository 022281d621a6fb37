// Shared helpers for integration tests.
//
// Provides a temporary template source, a recording logger, and a tree
// listing helper so each integration test can set up an isolated install
// without repeating filesystem boilerplate.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use speckit_installer::config::InstallOptions;
use speckit_installer::logging::Log;

/// Files written into every template source by [`TemplateSource::new`].
pub const TEMPLATE_FILES: &[(&str, &str)] = &[
    (".cursor/commands/n8n.specify.md", "# /n8n.specify\n"),
    (".cursor/commands/n8n.plan.md", "# /n8n.plan\n"),
    (".specify/memory/constitution.md", "# Constitution\n"),
    (".specify/templates/spec-template.md", "# Spec template\n"),
    (".specify/scripts/bash/common.sh", "#!/usr/bin/env bash\n"),
    (
        ".specify/scripts/bash/check-prerequisites.sh",
        "#!/usr/bin/env bash\nsource common.sh\n",
    ),
    ("README.md", "# n8n Cursor Speckit\n"),
];

/// A template source package backed by a [`tempfile::TempDir`].
pub struct TemplateSource {
    pub dir: tempfile::TempDir,
}

impl TemplateSource {
    /// Create a source containing every entry of [`TEMPLATE_FILES`].
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create source dir");
        for (rel, content) in TEMPLATE_FILES {
            write_file(dir.path(), rel, content);
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(&path, content).expect("write file");
}

/// Options installing from `source` into `target` with the given flags.
pub fn options(source: &Path, target: &Path, force: bool, skip_prompts: bool) -> InstallOptions {
    InstallOptions {
        target: Some(target.to_path_buf()),
        source: Some(source.to_path_buf()),
        force,
        skip_prompts,
    }
}

/// Every file under `root` as `relative/path` → content, sorted.
pub fn tree(root: &Path) -> BTreeMap<String, String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<String, String>) {
        for entry in std::fs::read_dir(dir).expect("read dir") {
            let path: PathBuf = entry.expect("dir entry").path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path
                    .strip_prefix(root)
                    .expect("under root")
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                out.insert(rel, std::fs::read_to_string(&path).expect("read file"));
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

/// [`Log`] implementation that keeps every message in memory.
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingLog {
    fn push(&self, level: &'static str, msg: &str) {
        self.entries
            .lock()
            .expect("log mutex")
            .push((level, msg.to_string()));
    }

    /// Messages recorded at `level`.
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("log mutex")
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn success(&self, msg: &str) {
        self.push("success", msg);
    }
    fn skip(&self, msg: &str) {
        self.push("skip", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
}
