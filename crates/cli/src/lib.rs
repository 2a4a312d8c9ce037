//! qreport CLI library — exposed for integration tests

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qreport")]
#[command(about = "Summarise CI test, coverage and static-analysis reports", long_about = None)]
#[command(version = qreport_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root holding the build output (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// File to write (default: quality-report.md under the root)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// "Full report" link; falls back to STATIC_ANALYSIS_ARTIFACT_URL
    #[arg(long, global = true)]
    pub artifact_url: Option<String>,

    /// Print why each missing section was skipped
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the quality report (default command)
    Generate,

    /// Initialize .qreport.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}
