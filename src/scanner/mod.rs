//! Scanner module - file selection and scan orchestration

pub mod files;

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::report::{Finding, Report};
use crate::rules::matcher;

/// Callback invoked when a file is skipped because it could not be read.
///
/// Skipping is best-effort by design: one unreadable file must never
/// prevent reporting on the rest of the tree. The hook exists so embedders
/// can surface skips instead of losing them; the default is a debug log.
pub type SkipObserver = Box<dyn Fn(&Path, &io::Error)>;

/// Drives file selection and per-line matching, accumulating findings into
/// a [`Report`].
pub struct Validator {
    config: ScanConfig,
    on_skip: Option<SkipObserver>,
}

impl Validator {
    pub fn new(config: ScanConfig) -> Self {
        Self { config, on_skip: None }
    }

    /// Install an observer for skipped files.
    pub fn on_skip(mut self, observer: SkipObserver) -> Self {
        self.on_skip = Some(observer);
        self
    }

    /// Run a full validation scan of `root`.
    ///
    /// Never fails: unreadable files are skipped, undecodable bytes are
    /// replaced, and an absent root produces an empty passing report.
    pub fn validate(&self, root: &Path) -> Report {
        let target = root.display().to_string();
        info!(target_path = %target, "Starting security requirements validation");

        let mut findings = Vec::new();
        for path in files::select_files(root, &self.config) {
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    debug!(file = %path.display(), error = %err, "Skipping unreadable file");
                    if let Some(observer) = &self.on_skip {
                        observer(&path, &err);
                    }
                    continue;
                }
            };
            // Lossy decoding: partial findings on a mixed-encoding file
            // beat aborting the scan.
            let text = String::from_utf8_lossy(&bytes);
            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();

            self.scan_text(&text, &relative, &mut findings);
        }

        info!(findings = findings.len(), "Validation complete");
        Report::build(findings, &target)
    }

    fn scan_text(&self, text: &str, file: &str, findings: &mut Vec<Finding>) {
        for (index, line) in text.lines().enumerate() {
            for &category in &self.config.enabled_categories {
                if let Some(rule) = matcher::match_line(line, category) {
                    findings.push(Finding {
                        finding_type: rule.label.to_string(),
                        severity: category.severity(),
                        file: file.to_string(),
                        line: index + 1,
                        requirement: category.requirement().to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;
    use crate::rules::{Category, Severity};
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[test]
    fn test_api_key_yields_one_high_finding_with_line_number() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("settings.py"),
            "import os\napi_key = \"abcd1234\"\n",
        )
        .unwrap();

        let report = Validator::new(ScanConfig::default()).validate(dir.path());

        assert_eq!(report.total_findings, 1);
        let finding = &report.findings[0];
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.line, 2);
        assert_eq!(finding.file, "settings.py");
        assert!(finding.requirement.starts_with("CRED-001"));
        assert_eq!(report.status, Status::ReviewRequired);
    }

    #[test]
    fn test_comment_suppression_is_category_scoped() {
        let dir = tempdir().unwrap();
        // One commented line that would match both categories: the secrets
        // match is suppressed, the insecure-config match is not.
        fs::write(
            dir.path().join("app.env"),
            "# api_key = \"abcd1234\" and debug = true\n",
        )
        .unwrap();

        let report = Validator::new(ScanConfig::default()).validate(dir.path());

        assert_eq!(report.total_findings, 1);
        assert_eq!(report.findings[0].severity, Severity::Medium);
        assert!(report.findings[0].requirement.starts_with("CONFIG-001"));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("conf.yaml"),
            "password: \"hunter2\"\nssl = false\n",
        )
        .unwrap();
        fs::write(dir.path().join("main.js"), "const t = 'x';\n").unwrap();

        let validator = Validator::new(ScanConfig::default());
        let first = validator.validate(dir.path());
        let second = validator.validate(dir.path());

        assert_eq!(first.findings, second.findings);
        assert_eq!(first.by_severity, second.by_severity);
    }

    #[test]
    fn test_excluded_segment_produces_no_findings() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        fs::write(
            dir.path().join("node_modules/vendored.js"),
            "token = \"deadbeef\"\n",
        )
        .unwrap();

        let report = Validator::new(ScanConfig::default()).validate(dir.path());
        assert_eq!(report.total_findings, 0);
        assert_eq!(report.status, Status::Pass);
    }

    #[test]
    fn test_same_content_outside_exclusion_is_found() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("vendored.js"), "token = \"deadbeef\"\n").unwrap();

        let report = Validator::new(ScanConfig::default()).validate(dir.path());
        assert_eq!(report.total_findings, 1);
    }

    #[test]
    fn test_absent_root_passes() {
        let report = Validator::new(ScanConfig::default())
            .validate(Path::new("/nonexistent/secaudit-root"));

        assert_eq!(report.total_findings, 0);
        assert_eq!(report.status, Status::Pass);
    }

    #[test]
    fn test_disabled_category_contributes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("conf.env"),
            "debug = true\npassword = \"hunter2\"\n",
        )
        .unwrap();

        let config = ScanConfig::default()
            .skip_categories(&[Category::InsecureConfig.name().to_string()]);
        let report = Validator::new(config).validate(dir.path());

        assert_eq!(report.total_findings, 1);
        assert_eq!(report.findings[0].severity, Severity::High);
    }

    #[test]
    fn test_lossy_decode_still_yields_findings() {
        let dir = tempdir().unwrap();
        let mut content = b"\xff\xfe garbage\n".to_vec();
        content.extend_from_slice(b"secret = \"value\"\n");
        fs::write(dir.path().join("mixed.json"), content).unwrap();

        let report = Validator::new(ScanConfig::default()).validate(dir.path());
        assert_eq!(report.total_findings, 1);
        assert_eq!(report.findings[0].line, 2);
    }

    #[test]
    fn test_skip_observer_quiet_on_clean_tree() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.py"), "x = 1\n").unwrap();

        let skipped = Rc::new(Cell::new(0));
        let counter = Rc::clone(&skipped);
        let validator = Validator::new(ScanConfig::default())
            .on_skip(Box::new(move |_, _| counter.set(counter.get() + 1)));

        let report = validator.validate(dir.path());
        assert_eq!(report.total_findings, 0);
        assert_eq!(skipped.get(), 0);
    }
}
