//! Redline CLI
//!
//! Command-line interface for browsing version history and redlining
//! requirement and test case snapshots.

use clap::{Parser, Subcommand};
use redline_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "redline")]
#[command(about = "Redline - field-level diffs between entity versions", long_about = None)]
struct Cli {
    /// Logging profile (dev, prod)
    #[arg(long, global = true, default_value = "dev")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all versions of one entity
    Versions(commands::versions::VersionsArgs),
    /// Show a single snapshot
    Show(commands::show::ShowArgs),
    /// Redline two snapshots
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Versions(args) => commands::versions::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
