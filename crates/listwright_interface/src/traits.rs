//! Capability traits for text generation, image analysis and transcription.

use async_trait::async_trait;
use listwright_core::{
    AudioInput, GenerateRequest, GenerateResponse, ImageAnalysis, ImageInput, Transcript,
};
use listwright_error::ListwrightResult;

/// Core text generation capability.
///
/// Errors are surfaced as `AuthError` for credential problems and
/// `BackendError` / `HttpError` for everything else.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, req: &GenerateRequest) -> ListwrightResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request carries no hint.
    fn model_name(&self) -> &str;
}

/// Image analysis capability: turns product photo bytes into attribute text.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Analyze one image.
    async fn analyze_image(&self, image: &ImageInput) -> ListwrightResult<ImageAnalysis>;

    /// Maximum image size in bytes.
    fn max_image_size_bytes(&self) -> usize {
        20 * 1024 * 1024
    }
}

/// Speech-to-text capability for spoken product notes.
#[async_trait]
pub trait AudioTranscriber: Send + Sync {
    /// Transcribe one audio clip.
    async fn transcribe(&self, audio: &AudioInput) -> ListwrightResult<Transcript>;

    /// Maximum audio file size in bytes.
    fn max_audio_size_bytes(&self) -> usize {
        25 * 1024 * 1024
    }
}
