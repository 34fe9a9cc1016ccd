//! Verification score model.
//!
//! A miner submission is judged on three dimensions. The weights are the
//! ones the demo has always shown; they deliberately do not sum to one.

use serde::{Deserialize, Serialize};

/// Weight of "does the code example run?"
pub const EXAMPLE_EXECUTION_WEIGHT: f64 = 0.4;
/// Weight of "do the annotated types match?"
pub const TYPE_ACCURACY_WEIGHT: f64 = 0.3;
/// Weight of "are all parameters documented?"
pub const PARAMETER_COVERAGE_WEIGHT: f64 = 0.2;

/// Per-dimension scores for one submission, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub example_execution: f64,
    pub type_accuracy: f64,
    pub parameter_coverage: f64,
}

impl ScoreBreakdown {
    pub fn new(example_execution: f64, type_accuracy: f64, parameter_coverage: f64) -> Self {
        Self {
            example_execution,
            type_accuracy,
            parameter_coverage,
        }
    }

    /// Weighted total, rounded to two decimals.
    pub fn total(&self) -> f64 {
        let raw = self.example_execution * EXAMPLE_EXECUTION_WEIGHT
            + self.type_accuracy * TYPE_ACCURACY_WEIGHT
            + self.parameter_coverage * PARAMETER_COVERAGE_WEIGHT;
        (raw * 100.0).round() / 100.0
    }

    /// Dimensions in display order with their weight labels.
    pub fn dimensions(&self) -> [ScoreDimension; 3] {
        [
            ScoreDimension {
                label: "Example Execution",
                weight: weight_label(EXAMPLE_EXECUTION_WEIGHT),
                score: self.example_execution,
            },
            ScoreDimension {
                label: "Type Accuracy",
                weight: weight_label(TYPE_ACCURACY_WEIGHT),
                score: self.type_accuracy,
            },
            ScoreDimension {
                label: "Parameter Coverage",
                weight: weight_label(PARAMETER_COVERAGE_WEIGHT),
                score: self.parameter_coverage,
            },
        ]
    }
}

/// One labelled row of a breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDimension {
    pub label: &'static str,
    pub weight: String,
    pub score: f64,
}

/// Colour band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score >= 0.7 {
            Self::Good
        } else if score >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Two-decimal display form, e.g. `0.90`.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Score as a bar fill percentage, clamped to `0..=100`.
pub fn percentage(score: f64) -> u16 {
    (score * 100.0).round().clamp(0.0, 100.0) as u16
}

/// Weight as a label such as `40%`.
pub fn weight_label(weight: f64) -> String {
    format!("{}%", (weight * 100.0).round() as u32)
}
