//! Subcommand implementations and the arguments they share.

pub mod diff;
pub mod show;
pub mod versions;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use redline_core::ops::{load_history, VersionRepository};
use serde::Serialize;

/// Entity kind selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKindArg {
    Requirement,
    TestCase,
}

/// Redline output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
}

/// History source and entity kind, common to every subcommand
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// JSON history file
    #[arg(long)]
    pub history: PathBuf,

    #[arg(long, value_enum)]
    pub kind: EntityKindArg,
}

impl HistoryArgs {
    pub fn load(&self) -> Result<VersionRepository, Box<dyn std::error::Error>> {
        let bytes = std::fs::read(&self.history)
            .map_err(|e| format!("cannot read {}: {}", self.history.display(), e))?;
        let repo = load_history(&bytes)?;
        tracing::debug!(
            path = %self.history.display(),
            requirement_snapshots = repo.requirements().len(),
            test_case_snapshots = repo.test_cases().len(),
            "history file loaded"
        );
        Ok(repo)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
