use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rainfall statistics over year-per-line monthly records.
#[derive(Parser)]
#[command(
    name = "rainstat",
    version,
    about = "Monthly rainfall extremes, seasonal totals and drought detection"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute all statistics for an input file.
    Analyze(AnalyzeArgs),
    /// Convert comma-separated records to the whitespace input format.
    Reformat(ReformatArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file. `rainstat.toml` is used if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output path from config. Stdout when unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override output format from config ("text" or "json").
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for the `reformat` subcommand.
#[derive(clap::Args)]
pub struct ReformatArgs {
    /// Path to comma-separated input file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the whitespace-separated output file.
    #[arg(short, long)]
    pub output: PathBuf,
}
