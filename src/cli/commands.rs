//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catfact.ninja command-line client
#[derive(Parser, Debug)]
#[command(name = "catfacts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Items requested per page (overrides the config file)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub page_size: Option<i64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print one random fact
    Fact,

    /// Print every breed
    Breeds,

    /// Print every fact
    Facts,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON document
    Json,
    /// Human-readable output
    Pretty,
}
