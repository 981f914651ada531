//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use listwright::LogFormat;
use std::path::PathBuf;

/// Listwright - product listings for many marketplaces from one set of facts
#[derive(Parser, Debug)]
#[command(name = "listwright")]
#[command(about = "Generate marketplace product listings from form, photo and voice-note facts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported marketplaces with their limits
    Marketplaces,

    /// Merge the product facts and generate listings
    Generate {
        /// Product facts file (.toml or .json)
        #[arg(long)]
        facts: PathBuf,

        /// Marketplace key; repeat for several (defaults from configuration)
        #[arg(short, long = "marketplace")]
        marketplaces: Vec<String>,

        /// Product photo
        #[arg(long)]
        image: Option<PathBuf>,

        /// Spoken product notes
        #[arg(long)]
        audio: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Use the form facts as-is, without any backend call
        #[arg(long)]
        skip_merge: bool,
    },

    /// Render listings from the form facts alone
    Render {
        /// Product facts file (.toml or .json)
        #[arg(long)]
        facts: PathBuf,

        /// Marketplace key; repeat for several (defaults from configuration)
        #[arg(short, long = "marketplace")]
        marketplaces: Vec<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format (every outcome)
    Json,
    /// Markdown documents (successful listings only)
    Markdown,
}
