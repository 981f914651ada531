//! End-to-end listing pipeline: analyze media, merge sources, generate listings.

use derive_getters::Getters;
use listwright_core::{
    AudioInput, BatchResult, FormFacts, ImageInput, NormalizedFactSet, Transcript,
};
use listwright_error::{ListwrightError, ListwrightResult};
use listwright_interface::{AudioTranscriber, ImageAnalyzer, TextGeneration};
use listwright_listing::{BatchOrchestrator, MergeSettings, SourceMerger, VisionFacts};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Everything one generation request carries.
#[derive(Debug, Clone, Default)]
pub struct PipelineInput {
    /// Form facts as entered
    pub form: FormFacts,
    /// Optional product photo
    pub image: Option<ImageInput>,
    /// Optional voice note
    pub audio: Option<AudioInput>,
    /// Marketplace keys, in output order
    pub marketplaces: Vec<String>,
}

/// How the facts used for generation were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactSource {
    /// The merge call succeeded
    Merged,
    /// Merge was skipped on request
    FormOnly,
    /// Merge failed and the form facts were used instead
    FormFallback,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Getters)]
pub struct PipelineReport {
    /// Vision facts handed to the merge
    vision: VisionFacts,
    /// Transcribed voice note, when one was supplied and transcription worked
    transcript: Option<Transcript>,
    /// Where the fact set came from
    source: FactSource,
    /// Facts every marketplace was generated from
    facts: Arc<NormalizedFactSet>,
    /// Per-marketplace outcomes
    batch: BatchResult,
}

/// Drives the capabilities and the listing stages in order.
///
/// Image analysis and transcription failures degrade to "no input". A
/// failed merge falls back to form-only facts. Credential failures abort the
/// run at any stage.
#[derive(Debug, Clone)]
pub struct ListingPipeline<C> {
    merger: SourceMerger<C>,
    orchestrator: BatchOrchestrator,
    concurrent: bool,
    skip_merge: bool,
}

impl<C> ListingPipeline<C>
where
    C: TextGeneration + ImageAnalyzer + AudioTranscriber,
{
    /// Pipeline over one client providing all three capabilities.
    pub fn new(capabilities: C) -> Self {
        Self {
            merger: SourceMerger::new(capabilities),
            orchestrator: BatchOrchestrator::default(),
            concurrent: false,
            skip_merge: false,
        }
    }

    /// Sampling settings for the merge call.
    pub fn with_merge_settings(mut self, settings: MergeSettings) -> Self {
        self.merger = self.merger.with_settings(settings);
        self
    }

    /// Replace the batch orchestrator.
    pub fn with_orchestrator(mut self, orchestrator: BatchOrchestrator) -> Self {
        self.orchestrator = orchestrator;
        self
    }

    /// Fan marketplaces out over worker tasks.
    pub fn with_concurrency(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Generate from form facts alone, without any backend call.
    pub fn with_skip_merge(mut self, skip_merge: bool) -> Self {
        self.skip_merge = skip_merge;
        self
    }

    /// Run the whole pipeline.
    ///
    /// # Errors
    ///
    /// Fails only when a backend rejects the credential; every other upstream
    /// failure degrades and the batch is still generated.
    #[instrument(
        skip_all,
        fields(
            product = %input.form.product_name,
            marketplaces = input.marketplaces.len(),
            has_image = input.image.is_some(),
            has_audio = input.audio.is_some()
        )
    )]
    pub async fn run(&self, input: &PipelineInput) -> ListwrightResult<PipelineReport> {
        let (vision, transcript, source, facts) = if self.skip_merge {
            (
                VisionFacts::Absent,
                None,
                FactSource::FormOnly,
                NormalizedFactSet::from_form(&input.form),
            )
        } else {
            let vision = self.analyze(input.image.as_ref()).await?;
            let transcript = self.transcribe(input.audio.as_ref()).await?;
            let text = transcript.as_ref().map(|t| t.text.as_str());

            match self.merger.merge(&input.form, &vision, text).await {
                Ok(facts) => (vision, transcript, FactSource::Merged, facts),
                Err(e) if e.is_auth() => return Err(e.into()),
                Err(e) => {
                    warn!(error = %e.kind, "Merge failed, continuing with form facts");
                    (
                        vision,
                        transcript,
                        FactSource::FormFallback,
                        NormalizedFactSet::from_form(&input.form),
                    )
                }
            }
        };

        let facts = Arc::new(facts);
        let batch = if self.concurrent {
            self.orchestrator
                .generate_all_concurrent(Arc::clone(&facts), input.marketplaces.as_slice())
                .await
        } else {
            self.orchestrator.generate_all(&facts, input.marketplaces.as_slice())
        };

        info!(source = ?source, succeeded = batch.successes().count(), "Pipeline finished");
        Ok(PipelineReport {
            vision,
            transcript,
            source,
            facts,
            batch,
        })
    }

    async fn analyze(&self, image: Option<&ImageInput>) -> ListwrightResult<VisionFacts> {
        let Some(image) = image else {
            return Ok(VisionFacts::Absent);
        };
        match self.merger.backend().analyze_image(image).await {
            Ok(analysis) => Ok(VisionFacts::from_analysis(&analysis.analysis)),
            Err(e) => degrade(e, "Image analysis").map(VisionFacts::Failed),
        }
    }

    async fn transcribe(&self, audio: Option<&AudioInput>) -> ListwrightResult<Option<Transcript>> {
        let Some(audio) = audio else {
            return Ok(None);
        };
        match self.merger.backend().transcribe(audio).await {
            Ok(transcript) => Ok(Some(transcript)),
            Err(e) => degrade(e, "Transcription").map(|_| None),
        }
    }
}

/// Credential failures propagate; anything else is logged and reported as text.
fn degrade(err: ListwrightError, stage: &str) -> ListwrightResult<String> {
    if err.is_auth() {
        return Err(err);
    }
    warn!(stage, error = %err, "Capability call failed, continuing without it");
    Ok(err.to_string())
}
