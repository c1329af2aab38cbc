//! Security rule catalog
//!
//! The catalog is pure data: per category, an ordered table of regex rules.
//! Insertion order is significant — it defines match precedence within a
//! line (see [`crate::rules::matcher`]). Severity and requirement id are
//! intrinsic to the category, not to individual rules.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Severity levels for findings.
///
/// `Low` is currently unreachable — no rule in the catalog emits it. The
/// variant is an intentionally open slot so the report schema keeps a
/// stable three-bucket severity rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Findings that warrant immediate review (hardcoded credentials).
    High,
    /// Insecure-but-not-leaking configuration issues.
    Medium,
    /// Reserved; no current rule produces this.
    Low,
}

/// A toggleable grouping of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Hardcoded secrets and credentials.
    Secrets,
    /// Insecure configuration flags.
    InsecureConfig,
}

impl Category {
    /// All categories, in scan order.
    pub const ALL: [Category; 2] = [Category::Secrets, Category::InsecureConfig];

    /// Stable name used in configuration and CLI toggles.
    pub fn name(self) -> &'static str {
        match self {
            Category::Secrets => "secrets_detection",
            Category::InsecureConfig => "insecure_config",
        }
    }

    /// Severity carried by every finding of this category.
    pub fn severity(self) -> Severity {
        match self {
            Category::Secrets => Severity::High,
            Category::InsecureConfig => Severity::Medium,
        }
    }

    /// SDL requirement id carried by every finding of this category.
    pub fn requirement(self) -> &'static str {
        match self {
            Category::Secrets => "CRED-001: No hardcoded secrets",
            Category::InsecureConfig => "CONFIG-001: Secure default configuration",
        }
    }

    /// Ordered rule table for this category.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Category::Secrets => &SECRET_RULES,
            Category::InsecureConfig => &CONFIG_RULES,
        }
    }
}

/// A single detection rule.
pub struct Rule {
    /// Finding type reported when this rule matches.
    pub label: &'static str,
    pub regex: Regex,
}

lazy_static! {
    /// Hardcoded-credential patterns, in precedence order.
    static ref SECRET_RULES: Vec<Rule> = vec![
        Rule {
            label: "Hardcoded API key",
            regex: Regex::new(r#"(?i)(api_key|apikey)\s*[=:]\s*["'][^"']+["']"#).unwrap(),
        },
        Rule {
            label: "Hardcoded password",
            regex: Regex::new(r#"(?i)(password|passwd|pwd)\s*[=:]\s*["'][^"']+["']"#).unwrap(),
        },
        Rule {
            label: "Hardcoded secret",
            regex: Regex::new(r#"(?i)(secret|token)\s*[=:]\s*["'][^"']+["']"#).unwrap(),
        },
        // Context-free heuristic: any long base64 run, keyword or not.
        Rule {
            label: "Potential base64 encoded secret",
            regex: Regex::new(r"[A-Za-z0-9+/]{40,}={0,2}").unwrap(),
        },
    ];

    /// Insecure-configuration patterns. Textual matches only, no semantics.
    /// The `ssl` rule also matches `verify_ssl = false` lines, so it takes
    /// precedence over the dedicated `verify_ssl` rule.
    static ref CONFIG_RULES: Vec<Rule> = vec![
        Rule {
            label: "Debug mode enabled in production",
            regex: Regex::new(r"(?i)debug\s*=\s*true").unwrap(),
        },
        Rule {
            label: "SSL/TLS disabled",
            regex: Regex::new(r"(?i)ssl\s*=\s*false").unwrap(),
        },
        Rule {
            label: "SSL verification disabled",
            regex: Regex::new(r"(?i)verify_ssl\s*=\s*false").unwrap(),
        },
    ];
}
