//! Printing batch outcomes.

use super::OutputFormat;
use listwright::{BatchResult, ListingContent, ListingFailure, MarketplaceOutcome, export_markdown};
use std::process::ExitCode;

/// Print every outcome in `format` and pick the exit code.
///
/// Exit status is failure only when no marketplace succeeded.
pub fn emit(batch: &BatchResult, format: OutputFormat) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            for (key, outcome) in batch.outcomes() {
                match outcome {
                    MarketplaceOutcome::Success(content) => print_listing(content),
                    MarketplaceOutcome::Failure(failure) => print_failure(key, failure),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(batch)?),
        OutputFormat::Markdown => {
            let documents: Vec<String> = batch
                .successes()
                .map(|(key, content)| format!("<!-- {} -->\n{}", key, export_markdown(content)))
                .collect();
            print!("{}", documents.join("---\n\n"));
        }
    }

    if let Some(summary) = batch.summary() {
        eprintln!("{}", summary);
    }
    if batch.successes().next().is_none() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_listing(content: &ListingContent) {
    println!("== {} ({}) ==", content.marketplace_name(), content.marketplace());
    println!("Title: {}", content.title());
    println!("Description:\n{}", content.description());
    if !content.bullet_points().is_empty() {
        println!("Bullet points:");
        for bullet in content.bullet_points() {
            println!("  • {}", bullet);
        }
    }
    if !content.specifications().is_empty() {
        println!("Specifications:");
        for (key, value) in content.specifications() {
            println!("  {}: {}", key, value);
        }
    }
    if !content.keywords().is_empty() {
        println!("Keywords: {}", content.keywords().join(", "));
    }
    println!();
}

fn print_failure(key: &str, failure: &ListingFailure) {
    println!("!! {}: {}", key, failure.reason());
    println!();
}

