//! Provider trait definitions for MotivateNow.
//!
//! The generators never talk to a network client directly. They are handed a
//! [`TextProvider`] or an [`ImageProvider`], which keeps the real Gemini and
//! Imagen clients swappable for test doubles.

mod traits;
mod types;

pub use traits::{ImageProvider, TextProvider};
pub use types::{
    ImageGenerationRequest, ImageGenerationRequestBuilder, ImageResponse, ProviderMedia,
    StructuredRequest, StructuredRequestBuilder,
};
