//! Request and response types for text generation.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A single text generation call.
///
/// # Examples
///
/// ```
/// use listwright_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("Summarize this product")
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.temperature, Some(0.7));
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The full prompt text
    pub prompt: String,
    /// Model identifier hint; the backend default applies when `None`
    #[builder(default)]
    pub model: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The text returned by a successful generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    pub text: String,
    /// Model that produced the text
    pub model: String,
}
