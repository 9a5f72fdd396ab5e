//! Image request and result types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Input for quote image generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ImageRequest {
    /// The quote to render into the image
    quote: String,
}

impl ImageRequest {
    /// Request an image for `quote`.
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
        }
    }
}

/// A generated image.
///
/// `image_url` is a self-contained `data:` URI, not a remote location.
///
/// # Examples
///
/// ```
/// use motivate_core::ImageResult;
///
/// let image = ImageResult::new("data:image/png;base64,AAAA");
/// let json = serde_json::to_string(&image).unwrap();
/// assert_eq!(json, r#"{"imageUrl":"data:image/png;base64,AAAA"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    /// Inline image reference
    image_url: String,
}

impl ImageResult {
    /// Wrap an inline image reference.
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}

/// A quote together with the image generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationEntry {
    /// Quote the image was generated for
    quote: String,
    /// Inline image reference
    image_url: String,
}

impl VisualizationEntry {
    /// Pair a quote with its image.
    pub fn new(quote: impl Into<String>, image: &ImageResult) -> Self {
        Self {
            quote: quote.into(),
            image_url: image.image_url.clone(),
        }
    }
}
