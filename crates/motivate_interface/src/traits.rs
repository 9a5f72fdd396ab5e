//! Trait definitions for generative providers.

use crate::{ImageGenerationRequest, ImageResponse, StructuredRequest};
use async_trait::async_trait;
use motivate_error::ProviderResult;

/// A text model that can answer with schema-constrained JSON.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate output conforming to `req.schema`.
    ///
    /// The provider is asked to honour the schema, but callers must still
    /// validate the returned value themselves.
    async fn generate_structured(&self, req: &StructuredRequest)
    -> ProviderResult<serde_json::Value>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request names none.
    fn model_name(&self) -> &str;
}

/// An image model.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate a single image for `req.prompt`.
    ///
    /// A response without media is not an error at this level; it is up to
    /// the caller to decide what an empty answer means.
    async fn generate_image(&self, req: &ImageGenerationRequest) -> ProviderResult<ImageResponse>;

    /// Provider name (e.g., "imagen").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request names none.
    fn model_name(&self) -> &str;
}
