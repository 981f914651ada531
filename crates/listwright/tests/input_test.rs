//! Tests for reading facts and media from disk.

use listwright::{ListwrightErrorKind, load_audio, load_form, load_image};
use std::io::Write;

fn file_with(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file
}

#[test]
fn test_toml_form_is_loaded() {
    let file = file_with(
        ".toml",
        br#"
        brand_name = "Acme"
        product_name = "Kettle"
        price = "24.50"
        features = ["1.7L", "Auto shut-off"]

        [specifications]
        Capacity = "1.7 L"
        "#,
    );

    let form = load_form(file.path()).expect("Failed to load form");
    assert_eq!(form.product_name, "Kettle");
    assert_eq!(form.features.len(), 2);
    assert!(form.price.is_some());
    assert!(form.specifications.contains_key("Capacity"));
}

#[test]
fn test_toml_specifications_keep_file_order() {
    let file = file_with(
        ".toml",
        br#"
        product_name = "Wireless Mouse"

        [specifications]
        Weight = "85 g"
        Connectivity = "2.4GHz USB receiver"
        Colors = ["Graphite", "White"]
        "#,
    );

    let form = load_form(file.path()).expect("Failed to load form");
    let keys: Vec<&str> = form.specifications.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Weight", "Connectivity", "Colors"]);
}

#[test]
fn test_json_form_is_loaded() {
    let file = file_with(
        ".json",
        br#"{"product_name": "Mug", "category": "Kitchen", "usps": ["Handmade"]}"#,
    );

    let form = load_form(file.path()).expect("Failed to load form");
    assert_eq!(form.product_name, "Mug");
    assert_eq!(form.usps, vec!["Handmade".to_string()]);
}

#[test]
fn test_malformed_form_is_parse_error() {
    let file = file_with(".json", b"{\"product_name\": ");

    let err = load_form(file.path()).expect_err("Should fail to parse");
    assert!(matches!(err.kind(), ListwrightErrorKind::Parse(_)));
}

#[test]
fn test_media_keep_format_hints() {
    let image = file_with(".png", &[0x89, 0x50, 0x4E, 0x47]);
    let audio = file_with(".WAV", &[0x52, 0x49, 0x46, 0x46]);

    let image = load_image(image.path()).expect("Failed to load image");
    assert_eq!(image.mime_or_default(), "image/png");
    assert_eq!(image.data.len(), 4);

    let audio = load_audio(audio.path()).expect("Failed to load audio");
    assert_eq!(audio.extension_or_default(), "wav");
}

#[test]
fn test_unreadable_file_is_config_error() {
    let err = load_form(std::path::Path::new("/definitely/not/here.toml"))
        .expect_err("Missing file should fail");
    assert!(matches!(err.kind(), ListwrightErrorKind::Config(_)));
}
