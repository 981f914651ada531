//! OpenAI API client.

use super::dto::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl, MessageContent,
    TranscriptionResponse,
};
use super::settings::OpenAiSettings;
use crate::redact::{classify_failure, redact_secrets};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use listwright_core::{
    AudioInput, GenerateRequest, GenerateResponse, ImageAnalysis, ImageInput, Transcript,
};
use listwright_error::{AuthError, BackendError, HttpError, ListwrightError, ListwrightResult};
use listwright_interface::{AudioTranscriber, ImageAnalyzer, TextGeneration};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Legacy spelling accepted when the primary variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "OPENAI_APIKEY";
const ORGANIZATION_ENVS: [&str; 2] = ["OPENAI_ORG_ID", "OPENAI_ORGANIZATION"];

const VISION_SYSTEM_PROMPT: &str = r#"You are an expert product information extractor.
Analyze the product image and extract the following details:
- Product name
- Brand name (if visible)
- Key features (materials, colors, size, etc.)
- Any visible text or labels
- Product category (if identifiable)
- Any unique selling points visible in the image

Format your response as a JSON object with these fields:
{
    "product_name": "...",
    "brand_name": "...",
    "features": ["...", "..."],
    "visible_text": "...",
    "category": "...",
    "usps": ["...", "..."]
}"#;

const VISION_USER_PROMPT: &str = "Analyze this image in detail.";
const MISSING_KEY: &str = "Missing OpenAI API key";

/// Client for OpenAI-compatible chat completion and transcription endpoints.
///
/// One client serves all three capabilities. Upstream errors are classified
/// into `AuthError` or `BackendError`, transport failures into `HttpError`,
/// and every message is redacted before it leaves the client. Requests are
/// never retried.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    settings: OpenAiSettings,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"[REDACTED]")
            .field("settings", &self.settings)
            .finish()
    }
}

impl OpenAiClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` if the key is blank, or an `HttpError` if the
    /// HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn with_api_key(
        api_key: impl Into<String>,
        settings: OpenAiSettings,
    ) -> ListwrightResult<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(AuthError::new(MISSING_KEY).into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    /// Creates a client reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError("Missing OpenAI API key")` when no key is set.
    pub fn from_env(settings: OpenAiSettings) -> ListwrightResult<Self> {
        Self::from_env_var(DEFAULT_API_KEY_ENV, settings)
    }

    /// Creates a client reading the key from the named variable.
    ///
    /// Falls back to `OPENAI_APIKEY` when the named variable is unset, and
    /// picks up an organisation id from `OPENAI_ORG_ID` or
    /// `OPENAI_ORGANIZATION` unless the settings already carry one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError("Missing OpenAI API key")` when no key is set.
    pub fn from_env_var(var: &str, settings: OpenAiSettings) -> ListwrightResult<Self> {
        let api_key = [var, FALLBACK_API_KEY_ENV]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| AuthError::new(MISSING_KEY))?;

        let settings = if settings.organization().is_none() {
            let organization = ORGANIZATION_ENVS
                .iter()
                .filter_map(|name| std::env::var(name).ok())
                .find(|value| !value.trim().is_empty());
            settings.with_organization(organization)
        } else {
            settings
        };

        Self::with_api_key(api_key, settings)
    }

    /// Active settings.
    pub fn settings(&self) -> &OpenAiSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url().trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.bearer_auth(&self.api_key);
        match self.settings.organization() {
            Some(org) => request.header("OpenAI-Organization", org),
            None => request,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ListwrightError {
        let message = redact_secrets(&err.to_string(), Some(&self.api_key));
        error!(error = %message, "OpenAI request could not be sent");
        HttpError::new(format!("Request failed: {}", message)).into()
    }

    /// Map a non-2xx response to a classified, redacted error.
    async fn check_status(&self, response: Response) -> ListwrightResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = classify_failure(Some(status.as_u16()), &body, Some(&self.api_key));
        error!(status = status.as_u16(), error = %err, "OpenAI returned an error");
        Err(err)
    }

    /// Completion text and the model the server reports, if any.
    async fn chat(&self, body: &ChatRequest) -> ListwrightResult<(String, Option<String>)> {
        let url = self.endpoint("chat/completions");
        debug!(url = %url, model = %body.model, "Sending chat completion request");

        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response).await?;

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            BackendError::new(format!(
                "Failed to parse response: {}",
                redact_secrets(&e.to_string(), Some(&self.api_key))
            ))
        })?;

        parsed
            .into_reply()
            .ok_or_else(|| BackendError::new("OpenAI returned no completion text").into())
    }
}

#[async_trait]
impl TextGeneration for OpenAiClient {
    #[instrument(skip(self, req), fields(prompt_len = req.prompt.len()))]
    async fn generate(&self, req: &GenerateRequest) -> ListwrightResult<GenerateResponse> {
        let model = req
            .model
            .clone()
            .unwrap_or_else(|| self.settings.text_model().clone());
        let body = ChatRequest {
            model: model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Text(req.prompt.clone()),
            }],
            temperature: req.temperature.unwrap_or(*self.settings.temperature()),
            max_tokens: req.max_tokens.unwrap_or(*self.settings.max_tokens()),
        };

        let (text, served) = self.chat(&body).await?;
        let model = served.unwrap_or(model);
        debug!(chars = text.len(), model = %model, "Received completion");
        Ok(GenerateResponse { text, model })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.settings.text_model()
    }
}

#[async_trait]
impl ImageAnalyzer for OpenAiClient {
    #[instrument(skip(self, image), fields(bytes = image.data.len(), mime = image.mime_or_default()))]
    async fn analyze_image(&self, image: &ImageInput) -> ListwrightResult<ImageAnalysis> {
        if image.data.is_empty() {
            return Err(BackendError::new("Image is empty").into());
        }
        if image.data.len() > self.max_image_size_bytes() {
            return Err(BackendError::new(format!(
                "Image exceeds maximum size of {} bytes",
                self.max_image_size_bytes()
            ))
            .into());
        }

        let data_url = format!(
            "data:{};base64,{}",
            image.mime_or_default(),
            STANDARD.encode(&image.data)
        );
        let body = ChatRequest {
            model: self.settings.vision_model().clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(VISION_SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: VISION_USER_PROMPT.to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl { url: data_url },
                        },
                    ]),
                },
            ],
            temperature: *self.settings.vision_temperature(),
            max_tokens: *self.settings.vision_max_tokens(),
        };

        let (analysis, _) = self.chat(&body).await?;
        Ok(ImageAnalysis { analysis })
    }
}

#[async_trait]
impl AudioTranscriber for OpenAiClient {
    #[instrument(skip(self, audio), fields(bytes = audio.data.len(), ext = audio.extension_or_default()))]
    async fn transcribe(&self, audio: &AudioInput) -> ListwrightResult<Transcript> {
        if audio.data.is_empty() {
            return Err(BackendError::new("Audio clip is empty").into());
        }
        if audio.data.len() > self.max_audio_size_bytes() {
            return Err(BackendError::new(format!(
                "Audio exceeds maximum size of {} bytes",
                self.max_audio_size_bytes()
            ))
            .into());
        }

        let file_name = format!("audio.{}", audio.extension_or_default());
        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio.data.clone()).file_name(file_name),
            )
            .text("model", self.settings.transcription_model().clone())
            .text("response_format", "json")
            .text("language", "en");

        let url = self.endpoint("audio/transcriptions");
        debug!(url = %url, "Sending transcription request");
        let response = self
            .authorize(self.client.post(&url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response).await?;

        let parsed: TranscriptionResponse = response.json().await.map_err(|e| {
            BackendError::new(format!("Failed to parse transcription: {}", e))
        })?;

        Ok(Transcript {
            text: parsed.text,
            language: parsed.language.unwrap_or_else(|| "en".to_string()),
        })
    }
}
