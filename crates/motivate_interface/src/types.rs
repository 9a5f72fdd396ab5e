//! Request and response types crossing the provider boundary.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A prompt plus the JSON shape the answer must take.
///
/// # Examples
///
/// ```
/// use motivate_interface::StructuredRequest;
/// use serde_json::json;
///
/// let request = StructuredRequest::builder()
///     .prompt("Say hi")
///     .schema(json!({"type": "OBJECT"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Say hi");
/// assert!(request.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StructuredRequest {
    /// Instruction text sent to the model
    prompt: String,
    /// Response schema in the provider's schema dialect
    schema: serde_json::Value,
    /// Model override
    #[builder(default)]
    model: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
}

impl StructuredRequest {
    /// Creates a new request builder.
    pub fn builder() -> StructuredRequestBuilder {
        StructuredRequestBuilder::default()
    }

    /// Request with every field given.
    pub fn new(
        prompt: impl Into<String>,
        schema: serde_json::Value,
        model: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
            model,
            temperature,
        }
    }
}

/// A prompt for a single generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Description of the image
    prompt: String,
    /// Model override
    #[builder(default)]
    model: Option<String>,
    /// Aspect ratio such as "1:1" or "9:16"
    #[builder(default)]
    aspect_ratio: Option<String>,
}

impl ImageGenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> ImageGenerationRequestBuilder {
        ImageGenerationRequestBuilder::default()
    }

    /// Request with every field given.
    pub fn new(
        prompt: impl Into<String>,
        model: Option<String>,
        aspect_ratio: Option<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            aspect_ratio,
        }
    }
}

/// Generated media reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMedia {
    /// Self-contained image reference (a `data:` URI)
    pub url: String,
    /// MIME type of the media, when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// What an image provider returned.
///
/// # Examples
///
/// ```
/// use motivate_interface::ImageResponse;
///
/// let response: ImageResponse = serde_json::from_str(r#"{"media": null}"#).unwrap();
/// assert!(response.media.is_none());
///
/// let response: ImageResponse =
///     serde_json::from_str(r#"{"media": {"url": "data:image/png;base64,AAAA"}}"#).unwrap();
/// assert_eq!(response.url(), Some("data:image/png;base64,AAAA"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// The generated media, absent when the provider produced nothing
    #[serde(default)]
    pub media: Option<ProviderMedia>,
}

impl ImageResponse {
    /// Response carrying a single media reference.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            media: Some(ProviderMedia {
                url: url.into(),
                content_type: None,
            }),
        }
    }

    /// The media URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.media.as_ref().map(|media| media.url.as_str())
    }
}
