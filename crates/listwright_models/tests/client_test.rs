//! Offline tests for the OpenAI client: construction, validation and
//! transport failure classification. No request reaches a real endpoint.

use listwright_core::{AudioInput, GenerateRequest, ImageInput};
use listwright_error::ListwrightErrorKind;
use listwright_interface::{AudioTranscriber, ImageAnalyzer, TextGeneration};
use listwright_models::{OpenAiClient, OpenAiSettings};

fn unreachable_settings() -> OpenAiSettings {
    OpenAiSettings::builder()
        .base_url("http://127.0.0.1:9")
        .timeout_secs(2u64)
        .build()
        .expect("settings")
}

#[test]
fn blank_key_is_auth_error() {
    let err = OpenAiClient::with_api_key("   ", OpenAiSettings::default()).unwrap_err();
    assert!(err.is_auth());
    assert!(err.to_string().contains("Missing OpenAI API key"));
}

#[test]
fn missing_env_var_is_auth_error() {
    let err = OpenAiClient::from_env_var(
        "LISTWRIGHT_TEST_KEY_THAT_IS_NEVER_SET",
        OpenAiSettings::default(),
    );
    // The fallback variable may be set on a developer machine.
    if std::env::var("OPENAI_APIKEY").is_err() {
        assert!(err.unwrap_err().is_auth());
    }
}

#[test]
fn debug_output_hides_key() {
    let client = OpenAiClient::with_api_key("sk-test-supersecret", OpenAiSettings::default())
        .expect("client");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("supersecret"));
}

#[test]
fn provider_and_default_model() {
    let client = OpenAiClient::with_api_key("sk-test-key", OpenAiSettings::default())
        .expect("client");
    assert_eq!(client.provider_name(), "openai");
    assert_eq!(client.model_name(), "gpt-4-1106-preview");
}

#[tokio::test]
async fn empty_image_is_rejected_before_upload() {
    let client = OpenAiClient::with_api_key("sk-test-key", unreachable_settings()).expect("client");
    let err = client.analyze_image(&ImageInput::new(Vec::new())).await.unwrap_err();
    assert!(matches!(err.kind(), ListwrightErrorKind::Backend(_)));
}

#[tokio::test]
async fn empty_audio_is_rejected_before_upload() {
    let client = OpenAiClient::with_api_key("sk-test-key", unreachable_settings()).expect("client");
    let err = client
        .transcribe(&AudioInput::new(Vec::new(), None))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ListwrightErrorKind::Backend(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_http_error_without_secret() {
    let client = OpenAiClient::with_api_key("sk-test-supersecret", unreachable_settings())
        .expect("client");
    let request = GenerateRequest::builder()
        .prompt("hello")
        .build()
        .expect("request");
    let err = client.generate(&request).await.unwrap_err();
    assert!(matches!(err.kind(), ListwrightErrorKind::Http(_)));
    assert!(!err.to_string().contains("supersecret"));
    assert!(!err.is_auth());
}
