//! # codetidy Integration Test Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests. Each test runs the binary
//! inside a `Workspace`: a temporary directory marked as a git root, with
//! `HOME` and `XDG_CONFIG_HOME` pointed into it so no real user or project
//! configuration leaks into the run.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

pub fn codetidy_cmd() -> Command {
    Command::cargo_bin("codetidy").expect("Failed to find codetidy binary for testing")
}

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp workspace");
        std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        Workspace { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `codetidy` command running inside the workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = codetidy_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write workspace file");
        path
    }

    pub fn write_zip(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        self.write(name, &zip_bytes(files))
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("Failed to read workspace file")
    }
}

/// In-memory ZIP archive holding `files` in the given order.
pub fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// The three-file project used across README tests.
pub const DEMO_PROJECT: &[(&str, &str)] = &[
    ("src/a.py", "def a():\n    return 1\n"),
    ("src/b.py", "import a\n"),
    ("README.md", "# Old readme\n"),
];
