//! Terminal line types for the revealer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Display category of a terminal line.
///
/// Controls both how a line is coloured and whether it is typed out
/// character by character (`Command` always is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCategory {
    /// Shell command, rendered with a `$ ` prompt and typed out
    Command,
    /// Plain program output
    #[default]
    Output,
    /// Positive result
    Success,
    /// Failure/rejection
    Error,
    /// Bold banner such as `===` borders
    Header,
    /// Empty spacer
    Blank,
}

impl LineCategory {
    /// Short name used in logs and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Output => "output",
            Self::Success => "success",
            Self::Error => "error",
            Self::Header => "header",
            Self::Blank => "blank",
        }
    }
}

/// One line of simulated terminal output.
///
/// The serialized form matches the fixture shape: `text`, `type`,
/// optional `delay` (milliseconds) and optional `typeEffect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    #[serde(rename = "type", default)]
    pub category: LineCategory,
    /// Per-line override of the default line delay, in milliseconds
    #[serde(rename = "delay", default, skip_serializing_if = "Option::is_none")]
    pub reveal_delay_ms: Option<u64>,
    #[serde(rename = "typeEffect", default, skip_serializing_if = "Option::is_none")]
    pub type_effect: Option<bool>,
}

impl Line {
    /// Create a line with no timing overrides.
    pub fn new(text: impl Into<String>, category: LineCategory) -> Self {
        Self {
            text: text.into(),
            category,
            reveal_delay_ms: None,
            type_effect: None,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Command)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Output)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Error)
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Header)
    }

    pub fn blank() -> Self {
        Self::new("", LineCategory::Blank)
    }

    /// Override the delay that follows this line.
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.reveal_delay_ms = Some(ms);
        self
    }

    /// Force (or suppress) the character-by-character effect.
    pub fn with_type_effect(mut self, on: bool) -> Self {
        self.type_effect = Some(on);
        self
    }

    /// Whether this line is typed out one character at a time.
    pub fn is_typed(&self) -> bool {
        self.category == LineCategory::Command || self.type_effect.unwrap_or(false)
    }

    /// Delay for this line, falling back to `default`.
    pub fn delay_or(&self, default: Duration) -> Duration {
        self.reveal_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(default)
    }
}

/// Parse a JSON array of lines.
pub fn parse_lines(json: &str) -> serde_json::Result<Vec<Line>> {
    serde_json::from_str(json)
}
