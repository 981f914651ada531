//! Listwright - multi-marketplace product listings
//!
//! Listwright turns one product description into ready-to-paste listings for
//! several e-commerce marketplaces. Facts come from a form, and optionally
//! from a product photo and a spoken note. A text-generation backend merges
//! them once, then every marketplace's rules render a title, description,
//! bullets and keywords from the merged facts.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use listwright::{
//!     FormFacts, ListingPipeline, OpenAiClient, OpenAiSettings, PipelineInput,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::from_env(OpenAiSettings::default())?;
//!     let pipeline = ListingPipeline::new(client);
//!
//!     let input = PipelineInput {
//!         form: FormFacts { product_name: "Kettle".into(), ..Default::default() },
//!         marketplaces: vec!["shopify".into(), "etsy".into()],
//!         ..Default::default()
//!     };
//!
//!     let report = pipeline.run(&input).await?;
//!     for (key, listing) in report.batch().successes() {
//!         println!("{key}: {}", listing.title());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `listwright_error` - Error types
//! - `listwright_core` - Data model
//! - `listwright_interface` - Capability traits
//! - `listwright_models` - OpenAI-compatible capability client
//! - `listwright_listing` - Merge, validation, rendering and batch generation
//!
//! This crate (`listwright`) re-exports everything for convenience and adds
//! configuration loading and the `listwright` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod input;
mod pipeline;
mod telemetry;

pub use config::{BackendConfig, GenerationConfig, ListwrightConfig};
pub use input::{load_audio, load_form, load_image};
pub use pipeline::{FactSource, ListingPipeline, PipelineInput, PipelineReport};
pub use telemetry::{LogFormat, init_tracing};

// Re-export error types
pub use listwright_error::{
    AuthError, BackendError, BuilderError, BuilderErrorKind, CatalogError, CatalogErrorKind,
    ConfigError, HttpError, JsonError, KeywordError, ListwrightError, ListwrightErrorKind,
    ListwrightResult, MergeError, MergeErrorKind, MergeResult, ParseError, RenderError,
    RenderErrorKind, RenderResult,
};

// Re-export core types
pub use listwright_core::*;

// Re-export capability traits
pub use listwright_interface::{AudioTranscriber, ImageAnalyzer, TextGeneration};

// Re-export the capability client
pub use listwright_models::{
    DEFAULT_API_KEY_ENV, FALLBACK_API_KEY_ENV, OpenAiClient, OpenAiSettings,
    OpenAiSettingsBuilder, classify_failure, is_auth_failure, redact_secrets,
};

// Re-export the listing pipeline
pub use listwright_listing::*;
