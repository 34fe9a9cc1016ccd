//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Path of one fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Isolated config and log location for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Environment whose config file does not exist yet.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Environment with `content` as the config file. The log file is
    /// always redirected into the temp dir.
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        let file_key = format!("file = {:?}\n", env.log_path().to_string_lossy());
        let content = if content.contains("[logging]\n") {
            content.replacen("[logging]\n", &format!("[logging]\n{}", file_key), 1)
        } else {
            format!("{}\n[logging]\n{}", content, file_key)
        };
        fs::write(env.config_path(), content).expect("Failed to write config");
        env
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("demo.log")
    }

    /// The binary, pointed at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("arbiter-demo").expect("binary not built");
        cmd.env("ARBITER_DEMO_CONFIG", self.config_path())
            .env("XDG_DATA_HOME", self.dir.path())
            .env_remove("RUST_LOG");
        cmd
    }
}
