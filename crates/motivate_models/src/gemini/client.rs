//! Google Gemini API implementation.
//!
//! This module provides a schema-constrained JSON client for the Gemini API with:
//! - Per-request model selection (a request may override the default model)
//! - Client pooling with lazy initialization (one client per model)
//! - Thread-safe concurrent access
//!
//! Retrying is left to the caller; a single call here is a single HTTP request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument, warn};

use gemini_rust::{Gemini, client::Model};

use motivate_error::{
    MalformedResponseError, ProviderError, ProviderErrorKind, ProviderFailure, ProviderResult,
};
use motivate_interface::{StructuredRequest, TextProvider};
use motivate_retry::MotivateConfig;

use crate::{LlmMetrics, api_key_from_env, classify_error};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const JSON_MIME_TYPE: &str = "application/json";

/// Client for the Google Gemini API with per-model client pooling.
///
/// # Example
///
/// ```no_run
/// use motivate_models::GeminiClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?.with_temperature(0.9);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    /// Cache of model-specific REST API clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
    /// Default model name when the request names none
    model_name: String,
    /// Default temperature when the request names none
    temperature: Option<f32>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().map(|c| c.len()).unwrap_or_default();
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash") (preserved)
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Create a client for the default model.
    ///
    /// Reads the API key from `GEMINI_API_KEY`, falling back to `GOOGLE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] when neither is set.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self::with_api_key(api_key_from_env()?, DEFAULT_MODEL))
    }

    /// Create a client with an explicit key and default model.
    pub fn with_api_key(api_key: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key: api_key.into(),
            model_name: model_name.into(),
            temperature: None,
        }
    }

    /// Create a client using the `[quote]` section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] when no key is set.
    #[instrument(name = "gemini_client_from_config", skip(config), fields(model = %config.quote.model))]
    pub fn from_config(config: &MotivateConfig) -> Result<Self, ProviderError> {
        let mut client = Self::with_api_key(api_key_from_env()?, config.quote.model.clone());
        client.temperature = config.quote.temperature;
        Ok(client)
    }

    /// Set the default sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Get or create the pooled client for `model_name`.
    fn client_for(&self, model_name: &str) -> Result<Gemini, ProviderError> {
        let mut clients = self.clients.lock().map_err(|e| {
            ProviderError::new(ProviderErrorKind::ClientCreation(format!(
                "Gemini client pool poisoned: {}",
                e
            )))
        })?;

        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        debug!(model = model_name, "Creating Gemini client");
        let client = Gemini::with_model(&self.api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| ProviderError::new(ProviderErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured ProviderError
    /// with HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> ProviderError {
        let err_msg = err.to_string();

        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            ProviderError::new(ProviderErrorKind::HttpStatus {
                status_code,
                message: err_msg,
            })
        } else {
            ProviderError::new(ProviderErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }

    /// Parse the model's text answer as JSON.
    ///
    /// Models occasionally wrap JSON in a markdown fence even in JSON mode.
    fn parse_json_text(text: &str) -> Result<serde_json::Value, MalformedResponseError> {
        let trimmed = text.trim();
        let unfenced = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|rest| rest.strip_suffix("```"))
            .map(str::trim)
            .unwrap_or(trimmed);

        if unfenced.is_empty() {
            return Err(MalformedResponseError::new("model returned an empty answer"));
        }

        serde_json::from_str(unfenced).map_err(|e| {
            MalformedResponseError::new(format!("model answer is not valid JSON: {}", e))
        })
    }
}

#[async_trait]
impl TextProvider for GeminiClient {
    #[instrument(
        skip(self, req),
        fields(provider = "gemini", model = req.model().as_deref().unwrap_or(&self.model_name))
    )]
    async fn generate_structured(
        &self,
        req: &StructuredRequest,
    ) -> ProviderResult<serde_json::Value> {
        let model_name = req.model().as_deref().unwrap_or(&self.model_name);
        let metrics = LlmMetrics::get();
        let client = self.client_for(model_name)?;

        let mut builder = client
            .generate_content()
            .with_user_message(req.prompt())
            .with_response_mime_type(JSON_MIME_TYPE)
            .with_response_schema(req.schema().clone());

        if let Some(temperature) = req.temperature().or(self.temperature) {
            builder = builder.with_temperature(temperature);
        }

        let started = Instant::now();
        let response = match builder.execute().await {
            Ok(response) => response,
            Err(e) => {
                let err: ProviderFailure = Self::parse_gemini_error(e).into();
                warn!(error = %err, "Gemini request failed");
                metrics.record_error("gemini", model_name, classify_error(&err));
                return Err(err);
            }
        };
        metrics.record_request("gemini", model_name, started.elapsed().as_secs_f64());

        let text = response.text();
        debug!(chars = text.len(), "Received Gemini response");

        Self::parse_json_text(&text).map_err(|err| {
            metrics.record_error("gemini", model_name, "malformed");
            err.into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when the request names none.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}
