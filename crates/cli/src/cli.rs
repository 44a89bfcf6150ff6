//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A structural compliance checker for extracted source-file facts
#[derive(Parser)]
#[command(name = "gauge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GAUGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a FileModel manifest against the rule catalog
    Check(CheckArgs),
    /// List the rule catalog
    Rules(RulesArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// FileModel manifest (JSON array) produced by the extractor
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum findings to display (default: 50)
    #[arg(long, default_value_t = 50, value_name = "N")]
    pub limit: usize,

    /// Show all findings (no limit)
    #[arg(long)]
    pub no_limit: bool,
}

#[derive(clap::Args, Default)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
