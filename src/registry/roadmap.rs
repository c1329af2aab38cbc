//! Security roadmap tracker
//!
//! Initiative and milestone tracking for continuous security improvement.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitiativeStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Deferred,
}

impl InitiativeStatus {
    fn label(self) -> &'static str {
        match self {
            InitiativeStatus::Planned => "Planned",
            InitiativeStatus::InProgress => "In Progress",
            InitiativeStatus::Completed => "Completed",
            InitiativeStatus::Deferred => "Deferred",
        }
    }
}

/// A tracked security improvement initiative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Initiative {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub status: InitiativeStatus,
    pub target_quarter: Option<String>,
    pub dependencies: Vec<String>,
    pub created: String,
    pub completed_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub initiative_id: String,
    pub milestone: String,
    pub due_date: Option<String>,
    pub completed: bool,
}

/// Security improvement roadmap with prioritization and tracking.
#[derive(Debug, Clone, Default)]
pub struct SecurityRoadmap {
    initiatives: Vec<Initiative>,
    milestones: Vec<Milestone>,
}

impl SecurityRoadmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an initiative; ids are sequential (`I-001`, `I-002`, ...).
    pub fn add_initiative(
        &mut self,
        name: &str,
        description: &str,
        priority: Priority,
        target_quarter: Option<&str>,
    ) -> String {
        let id = format!("I-{:03}", self.initiatives.len() + 1);
        self.initiatives.push(Initiative {
            id: id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            priority,
            status: InitiativeStatus::Planned,
            target_quarter: target_quarter.map(str::to_string),
            dependencies: Vec::new(),
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            completed_date: None,
        });
        id
    }

    pub fn add_milestone(&mut self, initiative_id: &str, milestone: &str, due_date: Option<&str>) {
        self.milestones.push(Milestone {
            initiative_id: initiative_id.to_string(),
            milestone: milestone.to_string(),
            due_date: due_date.map(str::to_string),
            completed: false,
        });
    }

    /// Update an initiative's status; returns false for unknown ids.
    /// Completion stamps `completed_date`.
    pub fn update_status(&mut self, initiative_id: &str, status: InitiativeStatus) -> bool {
        for initiative in &mut self.initiatives {
            if initiative.id == initiative_id {
                initiative.status = status;
                if status == InitiativeStatus::Completed {
                    initiative.completed_date =
                        Some(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true));
                }
                return true;
            }
        }
        false
    }

    pub fn initiatives(&self) -> &[Initiative] {
        &self.initiatives
    }

    /// Standard SDL improvement roadmap.
    pub fn default_roadmap() -> Self {
        let mut roadmap = Self::new();
        roadmap.add_initiative(
            "Automated Security Scanning",
            "Implement automated scanning for secrets, vulnerable dependencies, and config validation",
            Priority::High,
            Some("Q1"),
        );
        roadmap.add_initiative(
            "Threat Modeling Integration",
            "Integrate threat modeling into design phase for all new features",
            Priority::High,
            Some("Q1"),
        );
        roadmap.add_initiative(
            "Security Training Program",
            "Establish mandatory security awareness and secure coding training",
            Priority::Medium,
            Some("Q2"),
        );
        roadmap.add_initiative(
            "Incident Response Readiness",
            "Document and test incident response procedures",
            Priority::High,
            Some("Q2"),
        );
        roadmap.add_initiative(
            "Continuous Compliance Monitoring",
            "Automate compliance checks and reporting",
            Priority::Medium,
            Some("Q3"),
        );
        roadmap
    }

    /// Exportable roadmap document with summary rollups.
    pub fn export(&self) -> RoadmapExport {
        let mut by_priority = BTreeMap::new();
        let mut by_status = BTreeMap::new();
        for initiative in &self.initiatives {
            *by_priority
                .entry(initiative.priority.label().to_string())
                .or_insert(0) += 1;
            *by_status
                .entry(initiative.status.label().to_string())
                .or_insert(0) += 1;
        }

        RoadmapExport {
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            initiatives: self.initiatives.clone(),
            milestones: self.milestones.clone(),
            summary: RoadmapSummary {
                total_initiatives: self.initiatives.len(),
                by_priority,
                by_status,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapExport {
    pub last_updated: String,
    pub initiatives: Vec<Initiative>,
    pub milestones: Vec<Milestone>,
    pub summary: RoadmapSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapSummary {
    pub total_initiatives: usize,
    pub by_priority: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}
