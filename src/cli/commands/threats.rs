//! Threats command - STRIDE threat model generation

use std::collections::BTreeMap;

use colored::Colorize;

use super::ThreatsArgs;
use crate::error::SecAuditError;
use crate::registry::stride;

pub fn execute(args: ThreatsArgs) -> Result<(), SecAuditError> {
    let threats = stride::identify_threats(&args.component, args.data_flow.as_deref());
    let model = stride::build_model(&args.component, threats, BTreeMap::new());

    super::write_json(&args.output, &model)?;

    println!(
        "{} {}",
        "Threat model generated:".green().bold(),
        args.output.display().to_string().cyan()
    );
    println!("Total threats identified: {}", model.total_threats);

    Ok(())
}
