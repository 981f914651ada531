//! OpenAI-compatible client.

mod client;
mod dto;
mod settings;

pub use client::{DEFAULT_API_KEY_ENV, FALLBACK_API_KEY_ENV, OpenAiClient};
pub use settings::{OpenAiSettings, OpenAiSettingsBuilder};
