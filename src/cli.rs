use clap::{Parser, Subcommand};
use pattern_hygiene::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pattern-hygiene",
    version,
    about = "MECE hygiene auditing for regex lint-rule registries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a pattern directory for overlap with standard linters
    Check {
        /// Path to the directory of rule files
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check which external linters are available
    CheckTools,

    /// List every pattern the registry loader parses from a directory
    #[command(name = "list-patterns")]
    ListPatterns {
        /// Path to the directory of rule files
        path: PathBuf,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
