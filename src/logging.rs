//! Log file setup.
//!
//! The TUI owns the terminal, so logs go to a file. `RUST_LOG` wins over the
//! configured level, e.g. `RUST_LOG=arbiter_demo=debug`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter from `RUST_LOG`, falling back to `level`, then to `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the log path, or `None` when no location could be resolved or a
/// subscriber was already installed. An existing subscriber is left in place.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    if let Err(e) = installed {
        debug!(error = %e, path = %path.display(), "log subscriber already installed");
        return Ok(None);
    }

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn invalid_level_falls_back() {
        // Must not panic on a malformed directive
        let _ = build_filter("not a [valid directive");
    }

    // Single test: the global subscriber can only be installed once per process
    #[test]
    fn init_installs_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("demo.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: path.to_string_lossy().into_owned(),
        };

        let resolved = init(&config).unwrap();
        assert_eq!(resolved, Some(path.clone()));
        assert!(path.exists());

        let second = LoggingConfig {
            level: "info".to_string(),
            file: dir.path().join("other.log").to_string_lossy().into_owned(),
        };
        assert_eq!(init(&second).unwrap(), None);
    }
}
