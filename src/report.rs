//! Validation report structures and assembly
//!
//! A [`Report`] is built once per scan from the accumulated findings. Field
//! order matters: serialization follows declaration order, which is the
//! published schema order.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::Severity;

/// A single reported instance of a matched anti-pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding type, the label of the rule that matched.
    #[serde(rename = "type")]
    pub finding_type: String,

    /// Severity, intrinsic to the rule's category.
    pub severity: Severity,

    /// File path relative to the scanned root.
    pub file: String,

    /// 1-based line number.
    pub line: usize,

    /// SDL requirement id this finding traces to.
    pub requirement: String,
}

/// Finding counts per severity bucket.
///
/// All three buckets are always present; absent severities report zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    fn tally(findings: &[Finding]) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }
}

/// Overall verdict derived from whether any findings exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    ReviewRequired,
}

/// Complete validation report for one scan invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// RFC 3339 UTC timestamp of report assembly.
    pub timestamp: String,

    /// Scanned root path, as given.
    pub target: String,

    pub total_findings: usize,

    pub by_severity: SeverityCounts,

    pub requirements_validated: bool,

    /// Findings in scan order (per file, per line, per category).
    pub findings: Vec<Finding>,

    pub status: Status,
}

impl Report {
    /// Assemble a report from accumulated findings.
    ///
    /// Pure function of its inputs apart from the timestamp.
    pub fn build(findings: Vec<Finding>, target: &str) -> Self {
        let status = if findings.is_empty() {
            Status::Pass
        } else {
            Status::ReviewRequired
        };

        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            target: target.to_string(),
            total_findings: findings.len(),
            by_severity: SeverityCounts::tally(&findings),
            requirements_validated: true,
            findings,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finding(severity: Severity) -> Finding {
        Finding {
            finding_type: "Hardcoded password".to_string(),
            severity,
            file: "config.py".to_string(),
            line: 3,
            requirement: "CRED-001: No hardcoded secrets".to_string(),
        }
    }

    #[test]
    fn test_empty_report_passes() {
        let report = Report::build(Vec::new(), ".");
        assert_eq!(report.status, Status::Pass);
        assert_eq!(report.total_findings, 0);
        assert_eq!(report.by_severity, SeverityCounts::default());
        assert!(report.requirements_validated);
    }

    #[test]
    fn test_severity_rollup() {
        let findings = vec![
            finding(Severity::High),
            finding(Severity::High),
            finding(Severity::Medium),
        ];
        let report = Report::build(findings, "/tmp/project");

        assert_eq!(report.status, Status::ReviewRequired);
        assert_eq!(report.total_findings, 3);
        assert_eq!(
            report.by_severity,
            SeverityCounts { high: 2, medium: 1, low: 0 }
        );
    }

    #[test]
    fn test_json_schema_fields() {
        let report = Report::build(vec![finding(Severity::High)], "proj");
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();

        assert_eq!(json["target"], "proj");
        assert_eq!(json["total_findings"], 1);
        assert_eq!(json["by_severity"]["high"], 1);
        assert_eq!(json["by_severity"]["low"], 0);
        assert_eq!(json["requirements_validated"], true);
        assert_eq!(json["status"], "REVIEW_REQUIRED");
        assert_eq!(json["findings"][0]["type"], "Hardcoded password");
        assert_eq!(json["findings"][0]["severity"], "high");
        assert_eq!(json["findings"][0]["line"], 3);
        assert_eq!(json["findings"][0]["requirement"], "CRED-001: No hardcoded secrets");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Pass).unwrap(), "\"PASS\"");
        assert_eq!(
            serde_json::to_string(&Status::ReviewRequired).unwrap(),
            "\"REVIEW_REQUIRED\""
        );
    }
}
