//! Tests for configuration loading.

use listwright::{ListwrightConfig, ListwrightErrorKind};
use std::io::Write;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_bundled_defaults() {
    let config = ListwrightConfig::bundled().expect("Bundled config must parse");

    assert_eq!(config.backend().base_url(), "https://api.openai.com/v1");
    assert_eq!(config.backend().text_model(), "gpt-4-1106-preview");
    assert_eq!(config.backend().api_key_env(), "OPENAI_API_KEY");
    assert_eq!(*config.backend().max_tokens(), 1000);
    assert!(!*config.generation().concurrent());
    assert_eq!(
        config.generation().default_marketplaces(),
        &vec!["amazon_in".to_string(), "flipkart".to_string(), "meesho".to_string()]
    );
}

#[test]
fn test_file_overrides_only_named_keys() {
    let file = toml_file(
        r#"
        [backend]
        text_model = "gpt-4o-mini"
        temperature = 0.2

        [generation]
        default_marketplaces = ["etsy"]
        concurrent = true
        "#,
    );

    let config = ListwrightConfig::from_file(file.path()).expect("Failed to load config");

    assert_eq!(config.backend().text_model(), "gpt-4o-mini");
    assert!((*config.backend().temperature() - 0.2).abs() < f32::EPSILON);
    // Untouched keys keep the bundled values.
    assert_eq!(config.backend().vision_model(), "gpt-4-vision-preview");
    assert_eq!(config.generation().default_marketplaces(), &vec!["etsy".to_string()]);
    assert!(*config.generation().concurrent());
}

#[test]
fn test_backend_section_builds_client_and_merge_settings() {
    let file = toml_file(
        r#"
        [backend]
        base_url = "http://localhost:8080/v1"
        max_tokens = 512
        timeout_secs = 5
        "#,
    );
    let config = ListwrightConfig::from_file(file.path()).expect("Failed to load config");

    let settings = config.backend().client_settings().expect("Settings should build");
    assert_eq!(settings.base_url(), "http://localhost:8080/v1");
    assert_eq!(*settings.timeout_secs(), 5);
    assert_eq!(*settings.max_tokens(), 512);

    let merge = config.backend().merge_settings();
    assert_eq!(merge.model().as_deref(), Some("gpt-4-1106-preview"));
    assert_eq!(*merge.max_tokens(), 512);
}

#[test]
fn test_invalid_value_is_config_error() {
    let file = toml_file(
        r#"
        [generation]
        concurrent = "sometimes"
        "#,
    );

    let err = ListwrightConfig::from_file(file.path()).expect_err("Should reject bad value");
    assert!(matches!(err.kind(), ListwrightErrorKind::Config(_)));
    assert!(err.to_string().contains("Failed to parse configuration"));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.toml");

    let err = ListwrightConfig::from_file(&missing).expect_err("Missing file should fail");
    assert!(matches!(err.kind(), ListwrightErrorKind::Config(_)));
}
