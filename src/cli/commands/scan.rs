//! Scan command - validate a tree and write the findings report

use colored::Colorize;

use super::ScanArgs;
use crate::config::ScanConfig;
use crate::error::SecAuditError;
use crate::scanner::Validator;

pub fn execute(args: ScanArgs) -> Result<(), SecAuditError> {
    let mut config = ScanConfig::default();
    if let Some(skip) = &args.skip {
        config = config.skip_categories(skip);
    }
    if let Some(extensions) = args.extensions {
        config = config.with_extensions(extensions);
    }
    if let Some(exclude) = args.exclude {
        config = config.with_extra_excludes(exclude);
    }

    let validator = Validator::new(config);
    let report = validator.validate(&args.path);

    // Relative output lands inside the scanned root; absolute paths win.
    let report_path = args.path.join(&args.output);
    super::write_json(&report_path, &report)?;

    println!(
        "{} Report saved to: {}",
        "Validation complete.".green().bold(),
        report_path.display().to_string().cyan()
    );
    println!("Total findings: {}", report.total_findings);

    Ok(())
}
