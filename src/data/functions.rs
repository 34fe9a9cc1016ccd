//! Curated undocumented functions and the miner submissions for each.

use serde::Deserialize;

use crate::scoring::ScoreBreakdown;

/// An undocumented function pulled from PyPI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFunction {
    pub package_name: String,
    pub module_path: String,
    pub function_name: String,
    pub source_code: String,
    pub param_count: u32,
    pub has_type_hints: bool,
    pub complexity: u32,
}

impl RawFunction {
    /// First line of the source, i.e. the `def` line.
    pub fn signature(&self) -> &str {
        self.source_code.lines().next().unwrap_or_default()
    }

    /// Dotted path used in task output.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module_path, self.function_name)
    }
}

/// Documentation a miner submitted for a function.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinerSubmission {
    pub miner_id: String,
    pub label: String,
    pub docstring: String,
    pub type_annotations: String,
    pub code_example: String,
}

/// A function with one good and one bad submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoFunction {
    pub raw: RawFunction,
    pub good_submission: MinerSubmission,
    pub bad_submission: MinerSubmission,
    pub good_score: ScoreBreakdown,
    pub bad_score: ScoreBreakdown,
}

impl DemoFunction {
    pub fn submission(&self, good: bool) -> &MinerSubmission {
        if good {
            &self.good_submission
        } else {
            &self.bad_submission
        }
    }

    pub fn score(&self, good: bool) -> &ScoreBreakdown {
        if good {
            &self.good_score
        } else {
            &self.bad_score
        }
    }
}

pub(super) fn parse(json: &str) -> serde_json::Result<Vec<DemoFunction>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> RawFunction {
        RawFunction {
            package_name: "pkg".to_string(),
            module_path: "pkg.mod".to_string(),
            function_name: "f".to_string(),
            source_code: source.to_string(),
            param_count: 1,
            has_type_hints: false,
            complexity: 1,
        }
    }

    #[test]
    fn signature_is_first_source_line() {
        assert_eq!(raw("def f(x):\n    return x").signature(), "def f(x):");
        assert_eq!(raw("").signature(), "");
    }

    #[test]
    fn qualified_name_joins_module_and_function() {
        assert_eq!(raw("").qualified_name(), "pkg.mod.f");
    }

    #[test]
    fn missing_score_field_fails_to_parse() {
        let json = r#"[{"raw": {}, "goodSubmission": {}, "badSubmission": {}}]"#;
        assert!(parse(json).is_err());
    }
}
