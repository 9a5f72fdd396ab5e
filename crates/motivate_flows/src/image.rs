//! Quote image generation, single attempt.

use motivate_core::{ImageRequest, ImageResult};
use motivate_error::{
    GenerationError, GenerationErrorKind, MalformedResponseError, ProviderResult,
};
use motivate_interface::{ImageGenerationRequest, ImageProvider};
use tracing::{debug, error, instrument};

use crate::image_prompt;

/// Message used when the provider answers without a usable image reference.
pub const NO_IMAGE_URL: &str = "Image generation failed to return a valid URL.";

/// Generates quote artwork through an [`ImageProvider`].
///
/// Image calls are slow and expensive, so a failure is reported right away
/// instead of being retried.
#[derive(Debug, Clone)]
pub struct ImageGenerator<P> {
    provider: P,
    model: Option<String>,
    aspect_ratio: Option<String>,
}

impl<P: ImageProvider> ImageGenerator<P> {
    /// Generator using the provider's default model and aspect ratio.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            model: None,
            aspect_ratio: None,
        }
    }

    /// Override the provider's default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Request a specific aspect ratio, e.g. "9:16".
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate one image for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] of kind [`GenerationErrorKind::Image`]
    /// with `attempts == 1` if the provider fails or returns no image URL.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.provider.provider_name(),
            model = self.model.as_deref().unwrap_or(self.provider.model_name()),
            quote_len = request.quote().len()
        )
    )]
    pub async fn generate(&self, request: &ImageRequest) -> Result<ImageResult, GenerationError> {
        let provider_request = ImageGenerationRequest::new(
            image_prompt(request),
            self.model.clone(),
            self.aspect_ratio.clone(),
        );

        match self.request_image(&provider_request).await {
            Ok(url) => {
                debug!(url_len = url.len(), "Image generated");
                Ok(ImageResult::new(url))
            }
            Err(cause) => {
                error!(error = %cause, "Image generation failed");
                Err(GenerationError::new(GenerationErrorKind::Image, 1, cause))
            }
        }
    }

    async fn request_image(&self, request: &ImageGenerationRequest) -> ProviderResult<String> {
        let response = self.provider.generate_image(request).await?;
        response
            .media
            .map(|media| media.url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| MalformedResponseError::new(NO_IMAGE_URL).into())
    }
}
