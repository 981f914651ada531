//! Mock client providing all three capabilities.

use async_trait::async_trait;
use listwright::{
    AudioInput, AudioTranscriber, AuthError, BackendError, GenerateRequest, GenerateResponse,
    ImageAnalysis, ImageAnalyzer, ImageInput, ListwrightError, ListwrightResult, TextGeneration,
    Transcript,
};
use std::sync::{Arc, Mutex};

/// Scripted answer for one capability.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Scripted {
    /// Succeed with this text
    Text(String),
    /// Reject the credential
    Auth,
    /// Fail for any other reason
    Backend(String),
}

impl Scripted {
    fn answer(&self) -> ListwrightResult<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Auth => Err(ListwrightError::from(AuthError::new("Invalid OpenAI API key"))),
            Self::Backend(msg) => Err(ListwrightError::from(BackendError::new(msg.clone()))),
        }
    }
}

/// Records which capabilities were called, in order.
#[derive(Debug, Clone)]
pub struct MockStudio {
    text: Scripted,
    vision: Scripted,
    transcript: Scripted,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockStudio {
    /// Merge replies with `text`; image and audio calls fail if made.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            text: Scripted::Text(text.into()),
            vision: Scripted::Backend("no image expected".into()),
            transcript: Scripted::Backend("no audio expected".into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the merge answer.
    pub fn with_text(mut self, text: Scripted) -> Self {
        self.text = text;
        self
    }

    /// Replace the image analysis answer.
    pub fn with_vision(mut self, vision: Scripted) -> Self {
        self.vision = vision;
        self
    }

    /// Replace the transcription answer.
    pub fn with_transcript(mut self, transcript: Scripted) -> Self {
        self.transcript = transcript;
        self
    }

    /// Capability calls so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Last merge prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| call.strip_prefix("generate:").map(str::to_string))
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TextGeneration for MockStudio {
    async fn generate(&self, req: &GenerateRequest) -> ListwrightResult<GenerateResponse> {
        self.record(format!("generate:{}", req.prompt));
        Ok(GenerateResponse {
            text: self.text.answer()?,
            model: "mock-text".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

#[async_trait]
impl ImageAnalyzer for MockStudio {
    async fn analyze_image(&self, _image: &ImageInput) -> ListwrightResult<ImageAnalysis> {
        self.record("analyze_image".to_string());
        Ok(ImageAnalysis {
            analysis: self.vision.answer()?,
        })
    }
}

#[async_trait]
impl AudioTranscriber for MockStudio {
    async fn transcribe(&self, _audio: &AudioInput) -> ListwrightResult<Transcript> {
        self.record("transcribe".to_string());
        Ok(Transcript {
            text: self.transcript.answer()?,
            language: "en".to_string(),
        })
    }
}
