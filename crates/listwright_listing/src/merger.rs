//! Source merger: combines form, vision and transcript facts through one
//! text-generation call.

use crate::extraction::parse_json_reply;
use crate::precedence::{FieldPrecedence, InferredFacts};
use crate::renderer::format_specifications;
use crate::vision::VisionFacts;
use derive_getters::Getters;
use derive_setters::Setters;
use listwright_core::{FormFacts, GenerateRequest, NormalizedFactSet};
use listwright_error::{
    ListwrightError, ListwrightErrorKind, MergeError, MergeErrorKind, MergeResult, ParseError,
};
use listwright_interface::TextGeneration;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, info, instrument};

const REPLY_SCHEMA: &str = r#"{
    "product_name": "...",
    "brand_name": "...",
    "category": "...",
    "description": "...",
    "features": ["...", "..."],
    "target_audience": "...",
    "usps": ["...", "..."],
    "specifications": {
        "dimensions": "...",
        "weight": "...",
        "materials": ["..."],
        "colors": ["..."]
    },
    "additional_notes": "..."
}"#;

/// Sampling settings for the merge call.
#[derive(Debug, Clone, PartialEq, Getters, Setters)]
#[setters(prefix = "with_", into)]
pub struct MergeSettings {
    /// Model hint; the backend default applies when `None`
    model: Option<String>,
    /// Sampling temperature
    temperature: f32,
    /// Completion budget
    max_tokens: u32,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

/// The natural-language brief sent to the backend.
#[derive(Debug, Clone)]
pub struct MergeBrief<'a> {
    form: &'a FormFacts,
    vision: &'a VisionFacts,
    transcript: Option<&'a str>,
}

impl<'a> MergeBrief<'a> {
    /// Brief over a sanitized form, vision facts and an optional transcript.
    pub fn new(form: &'a FormFacts, vision: &'a VisionFacts, transcript: Option<&'a str>) -> Self {
        Self {
            form,
            vision,
            transcript,
        }
    }
}

impl fmt::Display for MergeBrief<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.form;
        writeln!(
            f,
            "You are an expert at merging and normalizing product information from multiple sources."
        )?;
        writeln!(f, "Combine the following information into a single, coherent product brief.")?;
        writeln!(
            f,
            "Values under Product Information were entered by the seller; keep them as given.\n"
        )?;

        writeln!(f, "Product Information:")?;
        writeln!(f, "Basic Information:")?;
        writeln!(f, "- Brand: {}", or_placeholder(&form.brand_name, "Not provided"))?;
        writeln!(f, "- Product Name: {}", or_placeholder(&form.product_name, "Not provided"))?;
        writeln!(f, "- Category: {}", or_placeholder(&form.category, "Not provided"))?;
        writeln!(f, "- Description: {}", or_placeholder(&form.description, "Not provided"))?;
        writeln!(
            f,
            "- Target Audience: {}",
            or_placeholder(&form.target_audience, "Not specified")
        )?;
        writeln!(
            f,
            "- Unique Selling Proposition: {}",
            or_placeholder(&form.usp, "Not specified")
        )?;
        match &form.price {
            Some(price) => writeln!(f, "- Price: {} {}", price, form.currency)?,
            None => writeln!(f, "- Price: Not specified")?,
        }

        writeln!(f, "\nFeatures:")?;
        if form.features.is_empty() {
            writeln!(f, "- None provided")?;
        }
        for feature in &form.features {
            writeln!(f, "- {}", feature)?;
        }
        if !form.specifications.is_empty() {
            writeln!(f, "\nSpecifications:")?;
            writeln!(f, "{}", format_specifications(&form.specifications))?;
        }

        writeln!(f, "\nVision Analysis (from product image):")?;
        writeln!(f, "{}", self.vision.brief_section())?;

        writeln!(f, "\nAudio Transcription (from voice note):")?;
        writeln!(f, "{}", self.transcript.unwrap_or("No audio notes provided."))?;

        writeln!(f, "\nCreate a comprehensive product brief that includes:")?;
        writeln!(f, "1. Product name (most descriptive from available sources)")?;
        writeln!(f, "2. Brand name (from form or image)")?;
        writeln!(f, "3. Category (most specific from available sources)")?;
        writeln!(f, "4. Key features (consolidated list, removing duplicates)")?;
        writeln!(f, "5. Target audience (from form or inferred)")?;
        writeln!(f, "6. Unique selling points (from form, image, or audio)")?;
        writeln!(f, "7. Any additional notes or specifications")?;
        writeln!(f, "\nFormat your response as a JSON object with these fields:")?;
        write!(f, "{}", REPLY_SCHEMA)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Merges heterogeneous product facts through a text-generation backend.
///
/// # Examples
///
/// ```no_run
/// use listwright_core::FormFacts;
/// use listwright_listing::{SourceMerger, VisionFacts};
/// # use listwright_interface::TextGeneration;
/// # async fn demo(backend: impl TextGeneration) -> Result<(), Box<dyn std::error::Error>> {
/// let merger = SourceMerger::new(backend);
/// let form = FormFacts { product_name: "Kettle".into(), ..Default::default() };
/// let facts = merger.merge(&form, &VisionFacts::Absent, None).await?;
/// println!("{}", facts.product_name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SourceMerger<G> {
    backend: G,
    settings: MergeSettings,
}

impl<G: TextGeneration> SourceMerger<G> {
    /// Merger with default sampling settings.
    pub fn new(backend: G) -> Self {
        Self {
            backend,
            settings: MergeSettings::default(),
        }
    }

    /// Replace the sampling settings.
    pub fn with_settings(mut self, settings: MergeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &G {
        &self.backend
    }

    /// Merge the three sources into one fact set.
    ///
    /// # Errors
    ///
    /// Any backend failure becomes a `MergeError` (`Auth` for credential
    /// problems), as does a reply that is not a JSON object. No partial fact
    /// set is returned.
    #[instrument(
        skip_all,
        fields(
            product = %form.product_name,
            vision = vision.label(),
            has_transcript = transcript.is_some()
        )
    )]
    pub async fn merge(
        &self,
        form: &FormFacts,
        vision: &VisionFacts,
        transcript: Option<&str>,
    ) -> MergeResult<NormalizedFactSet> {
        let form = form.sanitized();
        let transcript = transcript.map(str::trim).filter(|t| !t.is_empty());

        let request = GenerateRequest {
            prompt: MergeBrief::new(&form, vision, transcript).to_string(),
            model: self.settings.model().clone(),
            temperature: Some(*self.settings.temperature()),
            max_tokens: Some(*self.settings.max_tokens()),
        };
        debug!(prompt_len = request.prompt.len(), "Requesting merged brief");

        let response = self.backend.generate(&request).await.map_err(|e| {
            let err = merge_error(e);
            error!(error = %err.kind, "Merge call failed");
            err
        })?;

        let inferred = parse_inferred(&response.text).map_err(|e| {
            error!(reason = %e.reason, reply_len = e.raw.len(), "Merge reply could not be parsed");
            MergeError::from(e)
        })?;

        let facts = FieldPrecedence.resolve(&form, inferred, transcript);
        info!(
            product = %facts.product_name(),
            features = facts.features().len(),
            specifications = facts.specifications().len(),
            "Merged product facts"
        );
        Ok(facts)
    }
}

fn parse_inferred(reply: &str) -> Result<InferredFacts, ParseError> {
    let value: Value = parse_json_reply(reply)?;
    if !value.is_object() {
        return Err(ParseError::new("parse failed: reply is not a JSON object", reply));
    }
    serde_json::from_value(value).map_err(|e| ParseError::new(format!("parse failed: {}", e), reply))
}

/// Map a capability error onto the merge taxonomy.
#[track_caller]
fn merge_error(err: ListwrightError) -> MergeError {
    match err.kind() {
        ListwrightErrorKind::Auth(e) => MergeError::from(e.clone()),
        ListwrightErrorKind::Backend(e) => MergeError::from(e.clone()),
        ListwrightErrorKind::Parse(e) => MergeError::from(e.clone()),
        ListwrightErrorKind::Http(e) => MergeError::new(MergeErrorKind::Backend(e.message.clone())),
        other => MergeError::new(MergeErrorKind::Backend(other.to_string())),
    }
}
