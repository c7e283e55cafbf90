use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use statement_tables::DEFAULT_MARKER;

/// Extract tables from PDF financial statements into Parquet files.
#[derive(Debug, Parser)]
#[command(name = "statement-tables", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert every PDF under a directory into a Parquet file next to it
    Extract {
        /// Root of the directory tree to scan
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        #[command(flatten)]
        marker: MarkerArgs,

        /// Continue with the next document when one fails
        #[arg(long)]
        keep_going: bool,
    },

    /// Show which tables would be extracted from one PDF, without writing output
    Inspect {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        marker: MarkerArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Options for the marker-anchored fallback tier.
#[derive(Debug, Clone, Args)]
pub struct MarkerArgs {
    /// Text printed directly above the table
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Match the marker text case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Output format for the inspect subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
}
