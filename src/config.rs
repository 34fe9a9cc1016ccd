//! Configuration file handling
//!
//! The config lives at `<config dir>/arbiter-demo/config.toml` unless
//! `ARBITER_DEMO_CONFIG` points elsewhere. Every section is optional; missing
//! fields fall back to their defaults. `migrate_config` fills in fields added
//! by newer versions without disturbing the user's formatting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};
use tracing::debug;

use crate::reveal::{RevealTiming, DEFAULT_CHAR_DELAY_MS, DEFAULT_LINE_DELAY_MS};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ARBITER_DEMO_CONFIG";

/// Errors raised while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config is not valid TOML: {0}")]
    Document(#[from] toml_edit::TomlError),
}

/// Terminal playback timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Milliseconds between lines
    pub line_delay_ms: u64,
    /// Milliseconds per typed character
    pub char_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            line_delay_ms: DEFAULT_LINE_DELAY_MS,
            char_delay_ms: DEFAULT_CHAR_DELAY_MS,
        }
    }
}

/// Walkthrough behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Pause between "verify" and the score bars filling
    pub score_reveal_delay_ms: u64,
    /// Function selected when the walkthrough opens
    pub default_function: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            score_reveal_delay_ms: 300,
            default_function: 0,
        }
    }
}

/// Named colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Arbiter,
    Classic,
    Ocean,
}

impl ThemeName {
    /// Name as written in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arbiter => "arbiter",
            Self::Classic => "classic",
            Self::Ocean => "ocean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeName,
    /// Upper bound on how long the event loop sleeps between redraws
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            tick_rate_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Log file path; empty means the default location
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: String::new(),
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn log_path(&self) -> Option<PathBuf> {
        if !self.file.is_empty() {
            return Some(PathBuf::from(&self.file));
        }
        dirs::data_local_dir().map(|d| d.join("arbiter-demo").join("arbiter-demo.log"))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub demo: DemoConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|d| d.join("arbiter-demo").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Timing for the line revealer.
    pub fn playback_timing(&self) -> RevealTiming {
        RevealTiming::from_millis(self.playback.line_delay_ms, self.playback.char_delay_ms)
    }

    /// Values that parse but will not be used as written.
    ///
    /// `function_count` is the number of walkthrough functions available.
    pub fn problems(&self, function_count: usize) -> Vec<String> {
        let mut problems = Vec::new();
        if self.demo.default_function >= function_count {
            problems.push(format!(
                "demo.default_function = {} but only {} functions exist",
                self.demo.default_function, function_count
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            problems.push("ui.tick_rate_ms = 0 is raised to 1".to_string());
        }
        if tracing_subscriber::EnvFilter::try_new(&self.logging.level).is_err() {
            problems.push(format!(
                "logging.level = {:?} is not a valid filter, using \"info\"",
                self.logging.level
            ));
        }
        problems
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateResult {
    /// Full migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field of the default config that `content` lacks.
///
/// Existing values, comments and ordering are preserved.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut result = MigrateResult::default();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            let mut table = Table::new();
            for (key, value) in default_table.iter() {
                table.insert(key, value.clone());
                result.added_fields.push(format!("{}.{}", section, key));
            }
            doc.insert(section, Item::Table(table));
            result.sections_added.push(section.to_string());
            continue;
        }

        let Some(table) = doc[section].as_table_mut() else {
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                result.added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    result.content = doc.to_string();
    Ok(result)
}
