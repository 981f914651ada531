//! `listwright generate` and `listwright render`.

use super::{OutputFormat, output};
use listwright::{
    BatchOrchestrator, FactSource, ListingPipeline, ListwrightConfig, NormalizedFactSet,
    OpenAiClient, PipelineInput, load_audio, load_form, load_image,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Options for a `generate` run.
#[derive(Debug)]
pub struct GenerateOptions {
    /// Product facts file
    pub facts: PathBuf,
    /// Requested marketplace keys
    pub marketplaces: Vec<String>,
    /// Optional product photo
    pub image: Option<PathBuf>,
    /// Optional voice note
    pub audio: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Skip every backend call
    pub skip_merge: bool,
}

/// Run the full pipeline and print the outcomes.
#[instrument(skip_all, fields(facts = %options.facts.display()))]
pub async fn generate_listings(
    config: &ListwrightConfig,
    options: GenerateOptions,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let marketplaces = requested(config, options.marketplaces);
    let input = PipelineInput {
        form: load_form(&options.facts)?,
        image: options.image.as_deref().map(load_image).transpose()?,
        audio: options.audio.as_deref().map(load_audio).transpose()?,
        marketplaces,
    };

    if options.skip_merge {
        if input.image.is_some() || input.audio.is_some() {
            warn!("--skip-merge ignores the photo and voice note");
        }
        return render_facts(config, &options.facts, &input, options.format).await;
    }

    let settings = config.backend().client_settings()?;
    let client = OpenAiClient::from_env_var(config.backend().api_key_env(), settings)?;
    let pipeline = ListingPipeline::new(client)
        .with_merge_settings(config.backend().merge_settings())
        .with_concurrency(*config.generation().concurrent());

    let report = pipeline.run(&input).await?;
    match report.source() {
        FactSource::Merged => info!("Generated from merged facts"),
        FactSource::FormFallback => warn!("Merge failed; listings use the form facts only"),
        FactSource::FormOnly => {}
    }
    output::emit(report.batch(), options.format)
}

/// Render listings from the form facts with no backend involved.
#[instrument(skip_all, fields(facts = %facts.display()))]
pub async fn render_listings(
    config: &ListwrightConfig,
    facts: &Path,
    marketplaces: Vec<String>,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let input = PipelineInput {
        form: load_form(facts)?,
        marketplaces: requested(config, marketplaces),
        ..Default::default()
    };
    render_facts(config, facts, &input, format).await
}

async fn render_facts(
    config: &ListwrightConfig,
    path: &Path,
    input: &PipelineInput,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let facts = NormalizedFactSet::from_form(&input.form);
    info!(path = %path.display(), product = %facts.product_name(), "Rendering form facts");

    let orchestrator = BatchOrchestrator::default();
    let batch = if *config.generation().concurrent() {
        orchestrator
            .generate_all_concurrent(Arc::new(facts), input.marketplaces.as_slice())
            .await
    } else {
        orchestrator.generate_all(&facts, input.marketplaces.as_slice())
    };
    output::emit(&batch, format)
}

fn requested(config: &ListwrightConfig, marketplaces: Vec<String>) -> Vec<String> {
    if marketplaces.is_empty() {
        config.generation().default_marketplaces().clone()
    } else {
        marketplaces
    }
}
