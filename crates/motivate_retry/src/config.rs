//! Layered TOML configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from motivate.toml)
//! - User overrides (./motivate.toml or ~/.config/motivate/motivate.toml)
//! - Automatic merging with user values taking precedence

use crate::RetryPolicy;
use config::{Config, File, FileFormat};
use motivate_error::{ConfigError, MotivateResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where the Google generative APIs live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Base URL of the REST API, without trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

/// Quote generation settings.
///
/// ```toml
/// [quote]
/// model = "gemini-2.5-flash"
/// temperature = 1.0
///
/// [quote.retry]
/// max_attempts = 3
/// backoff_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuoteSettings {
    /// Text model name
    #[serde(default = "default_quote_model")]
    pub model: String,

    /// Sampling temperature, provider default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Retry policy for failed attempts
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_quote_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            model: default_quote_model(),
            temperature: None,
            retry: RetryPolicy::default(),
        }
    }
}

/// Image generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSettings {
    /// Image model name
    #[serde(default = "default_image_model")]
    pub model: String,

    /// Aspect ratio such as "1:1", provider default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

fn default_image_model() -> String {
    "imagen-4.0-fast-generate-001".to_string()
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            model: default_image_model(),
            aspect_ratio: None,
        }
    }
}

/// Top-level MotivateNow configuration.
///
/// Loads configuration from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from motivate.toml)
/// 2. User override (~/.config/motivate/motivate.toml, then ./motivate.toml)
///
/// # Example
///
/// ```no_run
/// use motivate_retry::MotivateConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MotivateConfig::load()?;
/// println!("Quote model: {}", config.quote.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct MotivateConfig {
    /// Provider endpoint settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Quote generation settings
    #[serde(default)]
    pub quote: QuoteSettings,

    /// Image generation settings
    #[serde(default)]
    pub image: ImageSettings,
}

impl MotivateConfig {
    /// Load configuration from a specific file path.
    ///
    /// Values missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MotivateResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (motivate.toml shipped with the library)
    /// 2. User config in home directory (~/.config/motivate/motivate.toml)
    /// 3. User config in current directory (./motivate.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// result fails validation.
    #[instrument]
    pub fn load() -> MotivateResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../motivate.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/motivate/motivate.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("motivate").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero retry budget or an empty model name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quote.retry.validate()?;
        if self.quote.model.trim().is_empty() {
            return Err(ConfigError::new("quote.model must not be empty"));
        }
        if self.image.model.trim().is_empty() {
            return Err(ConfigError::new("image.model must not be empty"));
        }
        Ok(())
    }
}
