//! STRIDE threat checklist
//!
//! Fixed per-category threat checklists and a threat model document built
//! from them for a named component.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// STRIDE threat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrideCategory {
    Spoofing,
    Tampering,
    Repudiation,
    #[serde(rename = "Information Disclosure")]
    InformationDisclosure,
    #[serde(rename = "Denial of Service")]
    DenialOfService,
    #[serde(rename = "Elevation of Privilege")]
    ElevationOfPrivilege,
}

impl StrideCategory {
    pub const ALL: [StrideCategory; 6] = [
        StrideCategory::Spoofing,
        StrideCategory::Tampering,
        StrideCategory::Repudiation,
        StrideCategory::InformationDisclosure,
        StrideCategory::DenialOfService,
        StrideCategory::ElevationOfPrivilege,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrideCategory::Spoofing => "Spoofing",
            StrideCategory::Tampering => "Tampering",
            StrideCategory::Repudiation => "Repudiation",
            StrideCategory::InformationDisclosure => "Information Disclosure",
            StrideCategory::DenialOfService => "Denial of Service",
            StrideCategory::ElevationOfPrivilege => "Elevation of Privilege",
        }
    }

    /// Checklist of threats reviewed for this category.
    pub fn checklist(self) -> &'static [&'static str] {
        match self {
            StrideCategory::Spoofing => &[
                "Authentication mechanism bypass",
                "Credential theft or replay",
                "Session hijacking",
                "Identity impersonation",
            ],
            StrideCategory::Tampering => &[
                "Data modification in transit",
                "Data modification at rest",
                "Configuration tampering",
                "Code or binary modification",
            ],
            StrideCategory::Repudiation => &[
                "Lack of audit logging",
                "Log tampering or deletion",
                "Non-repudiation controls missing",
            ],
            StrideCategory::InformationDisclosure => &[
                "Sensitive data in logs",
                "Inadequate access controls",
                "Information leakage in errors",
                "Insecure data transmission",
            ],
            StrideCategory::DenialOfService => &[
                "Resource exhaustion",
                "Lack of rate limiting",
                "Single points of failure",
                "No graceful degradation",
            ],
            StrideCategory::ElevationOfPrivilege => &[
                "Privilege escalation paths",
                "Insufficient authorization checks",
                "Default credentials",
                "Overly permissive defaults",
            ],
        }
    }
}

/// Initial risk assigned to an enumerated threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
}

/// Substring heuristic carried over from the checklist definitions.
fn assess_risk(description: &str) -> RiskLevel {
    const HIGH_RISK: &[&str] = &[
        "Credential theft",
        "Privilege escalation",
        "Data modification at rest",
    ];
    if HIGH_RISK.iter().any(|h| description.contains(h)) {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatStatus {
    Open,
    Mitigated,
}

/// One enumerated threat against a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub id: String,
    pub category: StrideCategory,
    pub description: String,
    pub component: String,
    pub data_flow: String,
    pub risk_level: RiskLevel,
    pub status: ThreatStatus,
}

/// STRIDE threat model for a single component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatModel {
    pub component: String,
    pub timestamp: String,
    pub methodology: String,
    pub total_threats: usize,
    pub threats: Vec<Threat>,
    pub mitigations: BTreeMap<String, Vec<String>>,
    pub summary: ThreatSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatSummary {
    pub by_category: BTreeMap<String, usize>,
    pub by_risk: BTreeMap<String, usize>,
}

/// Enumerate the full checklist as threats against `component`.
///
/// Ids are assigned in category order (`T-0001`, `T-0002`, ...).
pub fn identify_threats(component: &str, data_flow: Option<&str>) -> Vec<Threat> {
    let mut threats = Vec::new();
    for category in StrideCategory::ALL {
        for &description in category.checklist() {
            threats.push(Threat {
                id: format!("T-{:04}", threats.len() + 1),
                category,
                description: description.to_string(),
                component: component.to_string(),
                data_flow: data_flow.unwrap_or("N/A").to_string(),
                risk_level: assess_risk(description),
                status: ThreatStatus::Open,
            });
        }
    }
    threats
}

/// Build the complete threat model document for `component`.
pub fn build_model(
    component: &str,
    threats: Vec<Threat>,
    mitigations: BTreeMap<String, Vec<String>>,
) -> ThreatModel {
    let mut by_category = BTreeMap::new();
    let mut by_risk = BTreeMap::new();
    for threat in &threats {
        *by_category
            .entry(threat.category.label().to_string())
            .or_insert(0) += 1;
        let risk = match threat.risk_level {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
        };
        *by_risk.entry(risk.to_string()).or_insert(0) += 1;
    }

    ThreatModel {
        component: component.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        methodology: "STRIDE".to_string(),
        total_threats: threats.len(),
        threats,
        mitigations,
        summary: ThreatSummary { by_category, by_risk },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_checklist_enumerated() {
        let threats = identify_threats("Web Application", None);
        assert_eq!(threats.len(), 23);
        assert_eq!(threats[0].id, "T-0001");
        assert_eq!(threats[22].id, "T-0023");
        assert!(threats.iter().all(|t| t.component == "Web Application"));
        assert!(threats.iter().all(|t| t.data_flow == "N/A"));
    }

    #[test]
    fn test_risk_heuristic() {
        let threats = identify_threats("System", None);
        let credential = threats
            .iter()
            .find(|t| t.description == "Credential theft or replay")
            .unwrap();
        let logging = threats
            .iter()
            .find(|t| t.description == "Lack of audit logging")
            .unwrap();
        assert_eq!(credential.risk_level, RiskLevel::High);
        assert_eq!(logging.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_model_summaries() {
        let threats = identify_threats("API", Some("client -> gateway"));
        let model = build_model("API", threats, BTreeMap::new());

        assert_eq!(model.total_threats, 23);
        assert_eq!(model.methodology, "STRIDE");
        assert_eq!(model.summary.by_category["Spoofing"], 4);
        assert_eq!(model.summary.by_category["Repudiation"], 3);
        assert_eq!(
            model.summary.by_risk["High"] + model.summary.by_risk["Medium"],
            23
        );
    }

    #[test]
    fn test_category_serialization_labels() {
        let json = serde_json::to_string(&StrideCategory::InformationDisclosure).unwrap();
        assert_eq!(json, "\"Information Disclosure\"");
    }
}
