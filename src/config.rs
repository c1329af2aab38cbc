//! Scan configuration
//!
//! A [`ScanConfig`] is built once per invocation and passed down to the
//! scanner. It is never mutated after construction, so repeated scans with
//! the same configuration are free of cross-invocation interference when the
//! engine is embedded in a long-running process.

use std::collections::HashSet;

use crate::rules::Category;

/// File suffixes scanned by default.
pub const DEFAULT_EXTENSIONS: &[&str] =
    &[".py", ".js", ".ts", ".json", ".yaml", ".yml", ".env"];

/// Path segments excluded from traversal by default.
pub const DEFAULT_EXCLUDE_SEGMENTS: &[&str] =
    &[".git", "node_modules", "__pycache__", ".venv", "venv"];

/// Immutable per-invocation scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Categories to run, in catalog order. The order is significant: it
    /// fixes the order of findings within a single line.
    pub enabled_categories: Vec<Category>,
    /// File suffixes to scan (matched as literal suffixes, e.g. `.py`).
    pub extensions: Vec<String>,
    /// Path segment names dropped during traversal.
    pub exclude_segments: HashSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            enabled_categories: Category::ALL.to_vec(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_segments: DEFAULT_EXCLUDE_SEGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    /// Disable every category whose name appears in `names`.
    ///
    /// Unknown names are ignored; relative order of the remaining
    /// categories is preserved.
    pub fn skip_categories(mut self, names: &[String]) -> Self {
        self.enabled_categories
            .retain(|c| !names.iter().any(|n| n == c.name()));
        self
    }

    /// Replace the default extension set.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Add extra excluded path segments on top of the defaults.
    pub fn with_extra_excludes(mut self, segments: Vec<String>) -> Self {
        self.exclude_segments.extend(segments);
        self
    }
}
