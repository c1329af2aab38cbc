//! Roadmap command - export the default security roadmap

use colored::Colorize;

use super::RoadmapArgs;
use crate::error::SecAuditError;
use crate::registry::roadmap::SecurityRoadmap;

pub fn execute(args: RoadmapArgs) -> Result<(), SecAuditError> {
    let roadmap = SecurityRoadmap::default_roadmap();
    let export = roadmap.export();

    super::write_json(&args.output, &export)?;

    println!(
        "{} {}",
        "Security roadmap exported:".green().bold(),
        args.output.display().to_string().cyan()
    );
    println!("Initiatives: {}", export.summary.total_initiatives);

    Ok(())
}
