//! Application configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from listwright.toml)
//! - User overrides (~/.config/listwright/listwright.toml, then ./listwright.toml)
//! - Environment overrides (`LISTWRIGHT_BACKEND__TEXT_MODEL=...`)
//!
//! API keys never live in these files; see [`BackendConfig::api_key_env`].

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use listwright_error::{BuilderError, BuilderErrorKind, ConfigError, ListwrightResult};
use listwright_listing::MergeSettings;
use listwright_models::OpenAiSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../listwright.toml");

/// Generation backend connection and sampling settings.
///
/// ```toml
/// [backend]
/// base_url = "https://api.openai.com/v1"
/// text_model = "gpt-4-1106-preview"
/// temperature = 0.7
/// max_tokens = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct BackendConfig {
    /// API root
    base_url: String,
    /// Model used for the merge call
    text_model: String,
    /// Model used for image analysis
    vision_model: String,
    /// Model used for transcription
    transcription_model: String,
    /// Merge sampling temperature
    temperature: f32,
    /// Merge completion budget
    max_tokens: u32,
    /// Image analysis completion budget
    vision_max_tokens: u32,
    /// Request timeout in seconds
    timeout_secs: u64,
    /// Name of the environment variable holding the API key
    api_key_env: String,
}

impl BackendConfig {
    /// Client settings for this backend section.
    ///
    /// # Errors
    ///
    /// Returns a `BuilderError` if the settings cannot be assembled.
    pub fn client_settings(&self) -> ListwrightResult<OpenAiSettings> {
        Ok(OpenAiSettings::builder()
            .base_url(self.base_url.clone())
            .text_model(self.text_model.clone())
            .vision_model(self.vision_model.clone())
            .transcription_model(self.transcription_model.clone())
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .vision_max_tokens(self.vision_max_tokens)
            .timeout_secs(self.timeout_secs)
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))?)
    }

    /// Sampling settings for the merge call.
    pub fn merge_settings(&self) -> MergeSettings {
        MergeSettings::default()
            .with_model(Some(self.text_model.clone()))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

/// Batch generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationConfig {
    /// Marketplaces used when none are named on the command line
    default_marketplaces: Vec<String>,
    /// Fan marketplaces out over worker tasks
    concurrent: bool,
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ListwrightConfig {
    /// Backend section
    backend: BackendConfig,
    /// Generation section
    generation: GenerationConfig,
}

impl ListwrightConfig {
    /// Load configuration from an explicit file layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ListwrightResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: environment > current dir > home
    /// dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> ListwrightResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/listwright/listwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("listwright").required(false))
            .add_source(
                Environment::with_prefix("LISTWRIGHT")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("generation.default_marketplaces")
                    .try_parsing(true),
            );

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the bundled file is invalid.
    pub fn bundled() -> ListwrightResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}
