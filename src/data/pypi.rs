//! Pre-generated PyPI scan dataset.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyPIStats {
    pub total_functions_scanned: u64,
    pub total_packages: u64,
    pub eligible_functions: u64,
    pub eligibility_rate: f64,
    pub rejection_breakdown: BTreeMap<String, u64>,
}

/// Task as handed to a miner. Field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PyPITask {
    pub task_id: String,
    pub function_name: String,
    pub package_name: String,
    pub signature: String,
    pub context_hint: String,
    pub deadline_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMetadata {
    pub line_count: u32,
    pub param_count: u32,
    pub complexity: u32,
    pub has_type_hints: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PyPIFunction {
    pub task: PyPITask,
    pub source: String,
    pub metadata: FunctionMetadata,
}

/// Raw text captured from the task generator run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalOutput {
    pub loading_sequence: Vec<String>,
    pub filter_summary: String,
    pub sample_task_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyPIDataset {
    pub stats: PyPIStats,
    pub functions: Vec<PyPIFunction>,
    pub terminal_output: TerminalOutput,
}

impl PyPIStats {
    /// Eligibility rate as a percentage string, e.g. `24.6%`.
    pub fn eligibility_percent(&self) -> String {
        format!("{:.1}%", self.eligibility_rate * 100.0)
    }

    /// Rejection reasons sorted by count, largest first.
    pub fn rejections_by_count(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .rejection_breakdown
            .iter()
            .map(|(reason, count)| (reason.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        rows
    }
}

pub(super) fn parse(json: &str) -> serde_json::Result<PyPIDataset> {
    serde_json::from_str(json)
}
