//! secaudit - A CLI tool to validate source trees against SDL security requirements
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secaudit::cli::{commands, Cli, Commands};
use secaudit::SecAuditError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Execute the appropriate command; bare `secaudit [PATH]` scans.
    let result: Result<(), SecAuditError> = match cli.command {
        Some(Commands::Scan(args)) => commands::scan::execute(args),
        Some(Commands::Gaps(args)) => commands::gaps::execute(args),
        Some(Commands::Threats(args)) => commands::threats::execute(args),
        Some(Commands::Roadmap(args)) => commands::roadmap::execute(args),
        None => commands::scan::execute(cli.scan),
    };

    // Findings do not fail the process; only output errors do.
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
