//! # CLI Module
//!
//! Command-line interface for secaudit using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` (default) | Validate a source tree against the security rule catalog |
//! | `gaps` | Analyze SDL implementation gaps |
//! | `threats` | Generate a STRIDE threat model for a component |
//! | `roadmap` | Export the security improvement roadmap |
//!
//! Running `secaudit [PATH]` with no subcommand is equivalent to
//! `secaudit scan [PATH]`.
//!
//! ## Examples
//!
//! ```bash
//! # Scan the current directory
//! secaudit
//!
//! # Scan a project, custom report location
//! secaudit scan ./service -o audit.json
//!
//! # Skip the insecure-config category
//! secaudit scan --skip insecure_config
//!
//! # SDL gap analysis against a recorded state
//! secaudit gaps --state sdl_state.json
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{GapsArgs, RoadmapArgs, ScanArgs, ThreatsArgs};

/// secaudit - Validate source trees against SDL security requirements
#[derive(Parser, Debug)]
#[command(name = "secaudit")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Scan arguments when no subcommand is given
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a source tree against the security rule catalog
    Scan(ScanArgs),

    /// Analyze SDL implementation gaps against the control registry
    Gaps(GapsArgs),

    /// Generate a STRIDE threat model for a component
    Threats(ThreatsArgs),

    /// Export the security improvement roadmap
    Roadmap(RoadmapArgs),
}
