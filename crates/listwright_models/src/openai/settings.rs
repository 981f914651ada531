//! Connection and sampling settings for the OpenAI client.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Settings for [`OpenAiClient`](crate::OpenAiClient).
///
/// Defaults match the public OpenAI endpoints and the models the listing
/// pipeline was tuned against.
///
/// # Examples
///
/// ```
/// use listwright_models::OpenAiSettings;
///
/// let settings = OpenAiSettings::builder()
///     .text_model("gpt-4o-mini")
///     .build()
///     .unwrap();
/// assert_eq!(settings.text_model(), "gpt-4o-mini");
/// assert_eq!(*settings.max_tokens(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
pub struct OpenAiSettings {
    /// API root, e.g. `https://api.openai.com/v1`
    base_url: String,
    /// Model for chat completions
    text_model: String,
    /// Model for image analysis
    vision_model: String,
    /// Model for speech-to-text
    transcription_model: String,
    /// Default sampling temperature for text generation
    temperature: f32,
    /// Default completion budget for text generation
    max_tokens: u32,
    /// Sampling temperature for image analysis
    vision_temperature: f32,
    /// Completion budget for image analysis
    vision_max_tokens: u32,
    /// Request timeout in seconds
    timeout_secs: u64,
    /// Optional organisation header value
    organization: Option<String>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            text_model: "gpt-4-1106-preview".to_string(),
            vision_model: "gpt-4-vision-preview".to_string(),
            transcription_model: "whisper-1".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            vision_temperature: 0.1,
            vision_max_tokens: 1000,
            timeout_secs: 60,
            organization: None,
        }
    }
}

impl OpenAiSettings {
    /// Creates a new settings builder seeded with the defaults.
    pub fn builder() -> OpenAiSettingsBuilder {
        OpenAiSettingsBuilder::default()
    }

    /// Replace the organisation header value.
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }
}
