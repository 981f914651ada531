//! Reading product facts and media from disk.

use listwright_core::{AudioInput, FormFacts, ImageInput};
use listwright_error::{ConfigError, ListwrightResult, ParseError};
use std::path::Path;
use tracing::{debug, instrument};

/// Load form facts from a `.toml` or `.json` file.
///
/// The extension picks the format; anything other than `.json` is read as
/// TOML.
///
/// # Errors
///
/// Returns a `ConfigError` when the file cannot be read and a `ParseError`
/// when its contents do not describe a product.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_form(path: &Path) -> ListwrightResult<FormFacts> {
    let text = read_text(path)?;
    let form: FormFacts = if has_extension(path, "json") {
        serde_json::from_str(&text)
            .map_err(|e| ParseError::new(format!("parse failed: {}", e), text.as_str()))?
    } else {
        toml::from_str(&text)
            .map_err(|e| ParseError::new(format!("parse failed: {}", e), text.as_str()))?
    };
    debug!("Loaded form facts");
    Ok(form)
}

/// Read a product photo, guessing its MIME type from the extension.
///
/// # Errors
///
/// Returns a `ConfigError` when the file cannot be read.
pub fn load_image(path: &Path) -> ListwrightResult<ImageInput> {
    let mut image = ImageInput::new(read_bytes(path)?);
    image.mime = image_mime(path).map(str::to_string);
    Ok(image)
}

/// Read a voice note, keeping its extension as the format hint.
///
/// # Errors
///
/// Returns a `ConfigError` when the file cannot be read.
pub fn load_audio(path: &Path) -> ListwrightResult<AudioInput> {
    let hint = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    Ok(AudioInput::new(read_bytes(path)?, hint))
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}

fn read_text(path: &Path) -> ListwrightResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)).into())
}

fn read_bytes(path: &Path) -> ListwrightResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(image_mime(Path::new("a/b.PNG")), Some("image/png"));
        assert_eq!(image_mime(Path::new("photo.jpeg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("photo.heic")), None);
        assert_eq!(image_mime(Path::new("photo")), None);
    }

    #[test]
    fn json_extension_is_case_insensitive() {
        assert!(has_extension(Path::new("facts.JSON"), "json"));
        assert!(!has_extension(Path::new("facts.toml"), "json"));
    }
}
