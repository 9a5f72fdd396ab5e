//! Imagen REST client.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use motivate_error::{MalformedResponseError, ProviderError, ProviderErrorKind, ProviderResult};
use motivate_interface::{ImageGenerationRequest, ImageProvider, ImageResponse};
use motivate_retry::MotivateConfig;

use super::{PredictRequest, PredictResponse};
use crate::{LlmMetrics, api_key_from_env, classify_error};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "imagen-4.0-fast-generate-001";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Imagen client.
///
/// Each call renders exactly one image and returns it inline as a
/// `data:` URI.
#[derive(Clone)]
pub struct ImagenClient {
    client: Client,
    api_key: String,
    api_base: String,
    model_name: String,
    aspect_ratio: Option<String>,
}

impl std::fmt::Debug for ImagenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagenClient")
            .field("api_base", &self.api_base)
            .field("model_name", &self.model_name)
            .field("aspect_ratio", &self.aspect_ratio)
            .finish_non_exhaustive()
    }
}

impl ImagenClient {
    /// Creates a client for the default model.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] when neither
    /// `GEMINI_API_KEY` nor `GOOGLE_API_KEY` is set.
    #[instrument(name = "imagen_client_new")]
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self::with_api_key(api_key_from_env()?, DEFAULT_MODEL))
    }

    /// Creates a client with a specific API key and model.
    pub fn with_api_key(api_key: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model_name: model_name.into(),
            aspect_ratio: None,
        }
    }

    /// Creates a client from the `[provider]` and `[image]` sections.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] when no key is set.
    #[instrument(name = "imagen_client_from_config", skip(config), fields(model = %config.image.model))]
    pub fn from_config(config: &MotivateConfig) -> Result<Self, ProviderError> {
        Ok(Self::with_api_key(api_key_from_env()?, config.image.model.clone())
            .with_api_base(config.provider.api_base.clone())
            .with_aspect_ratio(config.image.aspect_ratio.clone()))
    }

    /// Point the client at another API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured HTTP client.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Default aspect ratio when the request names none.
    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<String>) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:predict", self.api_base, model)
    }

    async fn predict(&self, model: &str, body: &PredictRequest) -> ProviderResult<PredictResponse> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Imagen predict request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(ProviderErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let text = response.text().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            MalformedResponseError::new(format!("Failed to parse Imagen response: {}", e)).into()
        })
    }
}

#[async_trait]
impl ImageProvider for ImagenClient {
    #[instrument(
        skip(self, req),
        fields(provider = "imagen", model = req.model().as_deref().unwrap_or(&self.model_name))
    )]
    async fn generate_image(&self, req: &ImageGenerationRequest) -> ProviderResult<ImageResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model_name);
        let aspect_ratio = req.aspect_ratio().clone().or_else(|| self.aspect_ratio.clone());
        let body = PredictRequest::single(req.prompt(), aspect_ratio);
        let metrics = LlmMetrics::get();

        let started = Instant::now();
        let predictions = match self.predict(model, &body).await {
            Ok(predictions) => predictions,
            Err(err) => {
                warn!(error = %err, "Imagen request failed");
                metrics.record_error("imagen", model, classify_error(&err));
                return Err(err);
            }
        };
        metrics.record_request("imagen", model, started.elapsed().as_secs_f64());
        metrics.record_images(model, predictions.image_count() as u64);

        if predictions.image_count() == 0 {
            let reasons: Vec<&str> = predictions
                .predictions
                .iter()
                .filter_map(|p| p.rai_filtered_reason.as_deref())
                .collect();
            warn!(filtered = %reasons.join("; "), "Imagen returned no images");
        }

        Ok(predictions.into_image_response())
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_api_base_and_model() {
        let client = ImagenClient::with_api_key("key", "imagen-4.0-fast-generate-001")
            .with_api_base("http://localhost:8080/v1beta/");
        assert_eq!(
            client.endpoint("imagen-4.0-fast-generate-001"),
            "http://localhost:8080/v1beta/models/imagen-4.0-fast-generate-001:predict"
        );
    }

    #[test]
    fn test_default_model() {
        let client = ImagenClient::with_api_key("key", DEFAULT_MODEL);
        assert_eq!(client.model_name(), "imagen-4.0-fast-generate-001");
        assert_eq!(client.provider_name(), "imagen");
    }
}
