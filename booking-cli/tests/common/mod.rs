//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Session script fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the host configuration into tests.
const BOOKING_ENV_VARS: [&str; 6] = [
    "BOOKING_CONFIG_DIR",
    "BOOKING_DARK_MODE",
    "BOOKING_ID_STRATEGY",
    "BOOKING_OUTPUT_FORMAT",
    "BOOKING_SERVICES",
    "BOOKING_LOG_MODE",
];

/// A complete draft for Ana, ready to submit.
#[allow(dead_code)]
pub const ANA_SCRIPT: &str = "\
set name Ana
set email a@x.com
set date 2024-05-01
set time 10:00
set service Haircut
";

/// Test environment with an isolated working and configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the working directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("booking-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command builder with only the binary and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("booking").expect("Failed to find booking binary");
        cmd.current_dir(&self.temp_path).env("NO_COLOR", "1");
        for var in BOOKING_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get a `shell` command fed with `script` on stdin.
    pub fn shell(&self, script: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("shell").write_stdin(script.to_string());
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }

    /// Write a file relative to the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
