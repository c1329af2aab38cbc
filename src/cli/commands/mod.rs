//! CLI commands module

pub mod gaps;
pub mod roadmap;
pub mod scan;
pub mod threats;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::error::SecAuditError;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output report path, relative to the scanned root unless absolute
    #[arg(short, long, value_name = "FILE", default_value = "security_validation_report.json")]
    pub output: PathBuf,

    /// Skip rule categories (secrets_detection, insecure_config)
    #[arg(long, value_delimiter = ',', value_name = "CATEGORY")]
    pub skip: Option<Vec<String>>,

    /// Override the scanned file suffixes (e.g. .py,.env)
    #[arg(long, value_delimiter = ',', value_name = "SUFFIX")]
    pub extensions: Option<Vec<String>>,

    /// Extra path segments to exclude on top of the defaults
    #[arg(long, value_delimiter = ',', value_name = "SEGMENT")]
    pub exclude: Option<Vec<String>>,
}

/// Arguments for the gaps command
#[derive(Args, Debug)]
pub struct GapsArgs {
    /// JSON state file mapping SDL phase to implemented controls
    #[arg(short, long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Output report path
    #[arg(short, long, value_name = "FILE", default_value = "sdl_gap_analysis.json")]
    pub output: PathBuf,
}

/// Arguments for the threats command
#[derive(Args, Debug)]
pub struct ThreatsArgs {
    /// Component to model
    #[arg(value_name = "COMPONENT", default_value = "System")]
    pub component: String,

    /// Data flow under analysis
    #[arg(long, value_name = "DESC")]
    pub data_flow: Option<String>,

    /// Output report path
    #[arg(short, long, value_name = "FILE", default_value = "threat_model.json")]
    pub output: PathBuf,
}

/// Arguments for the roadmap command
#[derive(Args, Debug)]
pub struct RoadmapArgs {
    /// Output path
    #[arg(short, long, value_name = "FILE", default_value = "security_roadmap.json")]
    pub output: PathBuf,
}

/// Serialize `value` as pretty JSON and write it to `path`.
///
/// Write failure is the one fatal error in the system.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SecAuditError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| SecAuditError::ReportWrite {
        path: path.display().to_string(),
        source,
    })
}
