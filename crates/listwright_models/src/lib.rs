//! Capability clients for Listwright.
//!
//! The only provider is an OpenAI-compatible HTTP client that implements
//! text generation, image analysis and audio transcription against the
//! chat-completions and transcription endpoints.
//!
//! # Example
//!
//! ```no_run
//! use listwright_models::{OpenAiClient, OpenAiSettings};
//! use listwright_interface::TextGeneration;
//! use listwright_core::GenerateRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::from_env(OpenAiSettings::default())?;
//! let request = GenerateRequest::builder().prompt("Describe a teapot").build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

mod openai;
mod redact;

pub use openai::{
    DEFAULT_API_KEY_ENV, FALLBACK_API_KEY_ENV, OpenAiClient, OpenAiSettings,
    OpenAiSettingsBuilder,
};
pub use redact::{classify_failure, is_auth_failure, redact_secrets};
