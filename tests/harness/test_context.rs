//! Shared testing harness for `stubsmith` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stubsmith` binary in the project.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stubsmith").expect("Failed to locate stubsmith binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `stubsmith.toml` into the project.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("stubsmith.toml"), content).expect("write stubsmith.toml");
    }

    /// Write a file relative to the project, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create parents");
        fs::write(path, content).expect("write file");
    }

    /// Read a file relative to the project.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("read {}", path.display()))
    }

    /// Assert that a file exists relative to the project.
    pub(crate) fn assert_file_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(path.is_file(), "File should exist at {}", path.display());
    }

    /// Assert that a file does not exist relative to the project.
    pub(crate) fn assert_file_not_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(!path.exists(), "File should not exist at {}", path.display());
    }
}
