//! Provider clients for MotivateNow.
//!
//! Two providers back the generators:
//!
//! - **Gemini** text models answer quote prompts with schema-constrained JSON
//!   ([`GeminiClient`], a [`TextProvider`](motivate_interface::TextProvider))
//! - **Imagen** renders the quote artwork over the REST `:predict` endpoint
//!   ([`ImagenClient`], an [`ImageProvider`](motivate_interface::ImageProvider))
//!
//! Both read `GEMINI_API_KEY` (falling back to `GOOGLE_API_KEY`) and record
//! request counts and latency through [`LlmMetrics`].
//!
//! # Example
//!
//! ```no_run
//! use motivate_models::GeminiClient;
//! use motivate_interface::{StructuredRequest, TextProvider};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = StructuredRequest::builder()
//!     .prompt("Give me a word.")
//!     .schema(json!({"type": "OBJECT", "properties": {"word": {"type": "STRING"}}}))
//!     .build()?;
//! let value = client.generate_structured(&request).await?;
//! # Ok(())
//! # }
//! ```

mod api_key;
mod gemini;
mod imagen;
mod metrics;

pub use api_key::{API_KEY_VARS, api_key_from_env};
pub use gemini::GeminiClient;
pub use imagen::{
    ImagenClient, PredictInstance, PredictParameters, PredictRequest, PredictResponse, Prediction,
};
pub use metrics::{LlmMetrics, classify_error};
