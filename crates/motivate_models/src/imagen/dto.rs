//! Wire types for the Imagen `:predict` endpoint.

use motivate_core::DataUri;
use motivate_interface::{ImageResponse, ProviderMedia};
use serde::{Deserialize, Serialize};

const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Request body for `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// One prompt per instance
    pub instances: Vec<PredictInstance>,
    /// Sampling parameters
    pub parameters: PredictParameters,
}

/// A single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictInstance {
    /// Image description
    pub prompt: String,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images to render
    pub sample_count: u32,
    /// Aspect ratio such as "1:1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

impl PredictRequest {
    /// Request for exactly one image.
    pub fn single(prompt: impl Into<String>, aspect_ratio: Option<String>) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: prompt.into(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio,
            },
        }
    }
}

/// Response body of `models/{model}:predict`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Rendered images; empty or absent when every sample was filtered
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One rendered image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image bytes
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Why the safety filter removed the image, if it did
    #[serde(default)]
    pub rai_filtered_reason: Option<String>,
}

impl PredictResponse {
    /// Number of predictions that carry image bytes.
    pub fn image_count(&self) -> usize {
        self.predictions
            .iter()
            .filter(|p| p.bytes_base64_encoded.is_some())
            .count()
    }

    /// Convert the first usable prediction into a data URI response.
    pub fn into_image_response(self) -> ImageResponse {
        let media = self.predictions.into_iter().find_map(|prediction| {
            let bytes = prediction.bytes_base64_encoded.filter(|b| !b.is_empty())?;
            let mime = prediction
                .mime_type
                .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());
            Some(ProviderMedia {
                url: DataUri::from_base64(mime.clone(), bytes).to_string(),
                content_type: Some(mime),
            })
        });
        ImageResponse { media }
    }
}
