//! Gaps command - SDL gap analysis

use std::collections::HashMap;
use std::fs;

use colored::Colorize;

use super::GapsArgs;
use crate::error::SecAuditError;
use crate::registry::sdl;

pub fn execute(args: GapsArgs) -> Result<(), SecAuditError> {
    let current_state: HashMap<String, Vec<String>> = match &args.state {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SecAuditError::StateRead {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_str(&text)?
        }
        None => HashMap::new(),
    };

    let analysis = sdl::analyze(&current_state);
    super::write_json(&args.output, &analysis)?;

    println!(
        "{} Report: {}",
        "SDL gap analysis complete.".green().bold(),
        args.output.display().to_string().cyan()
    );
    println!("Identified gaps: {}", analysis.identified_gaps);

    Ok(())
}
