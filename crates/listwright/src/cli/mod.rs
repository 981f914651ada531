//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the listwright binary.

mod commands;
mod generate;
mod marketplaces;
mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use generate::{GenerateOptions, generate_listings, render_listings};
pub use marketplaces::list_marketplaces;
