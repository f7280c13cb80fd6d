//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const ISOLATED_VARS: &[&str] = &[
    "EXPATH_STYLE",
    "EXPATH_CONFIG",
    "EXPATH_DIR_MODE",
    "EXPATH_AUTO_RESOLVE",
    "EXPATH_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with HOME pointed at the temp directory and
    /// every EXPATH_* variable cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("expath").expect("Failed to find expath binary");
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder fixed to POSIX style.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--style").arg("posix");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string, for commands that take string paths.
    pub fn path_str(&self) -> &str {
        self.temp_path.to_str().expect("temp path is not UTF-8")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file in the test environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `~/.expath/config.yaml` inside the isolated home.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.create_dir(".expath");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run expath");

        assert!(
            output.status.success(),
            "expath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
