//! Listwright CLI binary.
//!
//! This binary provides command-line access to Listwright's functionality:
//! - List the supported marketplaces
//! - Merge product facts and generate listings
//! - Render listings from form facts alone

use clap::Parser;
use listwright::{ListwrightConfig, init_tracing};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateOptions, generate_listings, list_marketplaces, render_listings};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_format)?;

    let config = match &cli.config {
        Some(path) => ListwrightConfig::from_file(path)?,
        None => ListwrightConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::Marketplaces => {
            list_marketplaces();
            Ok(ExitCode::SUCCESS)
        }

        Commands::Generate {
            facts,
            marketplaces,
            image,
            audio,
            format,
            skip_merge,
        } => {
            let options = GenerateOptions {
                facts,
                marketplaces,
                image,
                audio,
                format,
                skip_merge,
            };
            generate_listings(&config, options).await
        }

        Commands::Render {
            facts,
            marketplaces,
            format,
        } => render_listings(&config, &facts, marketplaces, format).await,
    }
}
