//! SDL gap-control registry
//!
//! Static catalog of Security Development Lifecycle phases and their
//! required controls, plus gap analysis against a recorded current state.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One SDL phase with its required controls.
pub struct SdlPhase {
    /// Stable phase key used in state files.
    pub key: &'static str,
    pub requirement_id: &'static str,
    pub name: &'static str,
    pub controls: &'static [&'static str],
}

/// SDL phases in lifecycle order.
pub const SDL_PHASES: &[SdlPhase] = &[
    SdlPhase {
        key: "training",
        requirement_id: "SDL-001",
        name: "Security Training",
        controls: &[
            "Developer security awareness training completed",
            "Secure coding practices documented",
            "Annual training refresh",
        ],
    },
    SdlPhase {
        key: "requirements",
        requirement_id: "SDL-002",
        name: "Security Requirements",
        controls: &[
            "Security requirements defined in design phase",
            "Privacy requirements documented",
            "Compliance requirements mapped",
        ],
    },
    SdlPhase {
        key: "design",
        requirement_id: "SDL-003",
        name: "Secure Design",
        controls: &[
            "Threat model completed",
            "Security architecture reviewed",
            "Attack surface minimized",
        ],
    },
    SdlPhase {
        key: "implementation",
        requirement_id: "SDL-004",
        name: "Secure Implementation",
        controls: &[
            "Static analysis integrated",
            "No known vulnerable dependencies",
            "Secrets managed securely",
        ],
    },
    SdlPhase {
        key: "verification",
        requirement_id: "SDL-005",
        name: "Security Verification",
        controls: &[
            "Dynamic testing performed",
            "Penetration testing for critical components",
            "Security sign-off documented",
        ],
    },
    SdlPhase {
        key: "release",
        requirement_id: "SDL-006",
        name: "Secure Release",
        controls: &[
            "Incident response plan in place",
            "Security update process defined",
            "Vulnerability disclosure process",
        ],
    },
];

/// Remediation priority, derived from the phase a gap belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

fn phase_priority(key: &str) -> GapPriority {
    match key {
        "design" | "implementation" | "verification" => GapPriority::High,
        "requirements" | "release" | "training" => GapPriority::Medium,
        _ => GapPriority::Low,
    }
}

/// A single missing control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub phase: String,
    pub requirement_id: String,
    pub phase_name: String,
    pub gap: String,
    pub priority: GapPriority,
}

/// Gap analysis document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub timestamp: String,
    pub total_requirements: usize,
    pub identified_gaps: usize,
    pub gaps: Vec<Gap>,
    pub phases_analyzed: Vec<String>,
}

/// Diff the required controls against the implemented ones.
///
/// `current_state` maps phase key to the controls already in place; a phase
/// absent from the map has no implemented controls. Gaps come out in phase
/// order, then control order.
pub fn analyze(current_state: &HashMap<String, Vec<String>>) -> GapAnalysis {
    let mut gaps = Vec::new();
    for phase in SDL_PHASES {
        let implemented = current_state.get(phase.key);
        for &control in phase.controls {
            let done = implemented
                .map(|c| c.iter().any(|i| i == control))
                .unwrap_or(false);
            if !done {
                gaps.push(Gap {
                    phase: phase.key.to_string(),
                    requirement_id: phase.requirement_id.to_string(),
                    phase_name: phase.name.to_string(),
                    gap: control.to_string(),
                    priority: phase_priority(phase.key),
                });
            }
        }
    }

    GapAnalysis {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        total_requirements: SDL_PHASES.iter().map(|p| p.controls.len()).sum(),
        identified_gaps: gaps.len(),
        gaps,
        phases_analyzed: SDL_PHASES.iter().map(|p| p.key.to_string()).collect(),
    }
}
