//! Media inputs and capability results for image analysis and transcription.

use serde::{Deserialize, Serialize};

/// A product photo handed to the image analysis capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type, defaults to `image/jpeg` when unknown
    pub mime: Option<String>,
}

impl ImageInput {
    /// Wrap raw image bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, mime: None }
    }

    /// MIME type to declare upstream.
    pub fn mime_or_default(&self) -> &str {
        self.mime.as_deref().unwrap_or("image/jpeg")
    }
}

/// A spoken note handed to the transcription capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInput {
    /// Raw audio bytes
    pub data: Vec<u8>,
    /// File extension hint such as `wav` or `mp3`
    pub extension_hint: Option<String>,
}

impl AudioInput {
    /// Wrap raw audio bytes with an optional extension hint.
    pub fn new(data: Vec<u8>, extension_hint: Option<String>) -> Self {
        Self {
            data,
            extension_hint,
        }
    }

    /// Extension to declare upstream; `mp3` when no hint was given.
    pub fn extension_or_default(&self) -> &str {
        self.extension_hint
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or("mp3")
    }
}

/// Result of a successful image analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Analysis text as returned by the backend (often JSON-shaped)
    pub analysis: String,
}

/// Result of a successful transcription call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Transcribed text
    pub text: String,
    /// Detected language code
    pub language: String,
}
