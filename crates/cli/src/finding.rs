//! Finding and report types.

use serde::Serialize;

use crate::rule::Severity;

/// One recorded violation of one rule by one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path of the violating file.
    pub file_path: String,

    /// Rule id, or a synthetic id for non-rule findings
    /// ("malformed-file-model", "internal-rule-error").
    pub rule_id: String,

    /// Severity the finding was recorded with.
    pub severity: Severity,

    /// Message with measured values substituted in.
    pub message: String,
}

impl Finding {
    pub fn new(
        file_path: impl Into<String>,
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
        }
    }
}

/// Aggregated, deterministically ordered outcome of one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Findings grouped by file path ascending, then rule id ascending.
    pub findings: Vec<Finding>,

    /// Count of error-severity findings.
    pub error_count: usize,

    /// Count of warning-severity findings.
    pub warning_count: usize,

    /// Derived: 1 if any error-severity finding, else 0.
    pub exit_status: i32,
}

impl Report {
    /// Build a report from unordered findings.
    ///
    /// Sorts by (file path, rule id); the sort is stable so findings that
    /// tie on both keys keep their registry insertion order.
    pub fn from_findings(mut findings: Vec<Finding>) -> Self {
        findings.sort_by(|a, b| {
            a.file_path
                .cmp(&b.file_path)
                .then_with(|| a.rule_id.cmp(&b.rule_id))
        });

        let error_count = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warning_count = findings.len() - error_count;
        let exit_status = if error_count > 0 { 1 } else { 0 };

        Self {
            findings,
            error_count,
            warning_count,
            exit_status,
        }
    }

    /// True when the run produced no error-severity findings.
    pub fn passed(&self) -> bool {
        self.error_count == 0
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
