//! Shared testing harness for `autonav` integration tests.

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
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `autonav` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("autonav").expect("Failed to locate autonav binary");
        cmd.current_dir(&self.work_dir).env_remove("AUTONAV_LOG");
        cmd
    }

    /// Create an empty file relative to the work directory.
    pub(crate) fn touch(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "").expect("Failed to write test file");
    }

    /// Write `autonav.toml` in the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("autonav.toml"), content).expect("Failed to write config");
    }
}
