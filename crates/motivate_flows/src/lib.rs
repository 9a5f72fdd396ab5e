//! Quote and image generation for MotivateNow.
//!
//! [`QuoteGenerator`] asks a [`TextProvider`](motivate_interface::TextProvider)
//! for a quote, validates the answer and retries any failure under a
//! [`RetryPolicy`](motivate_retry::RetryPolicy). [`ImageGenerator`] asks an
//! [`ImageProvider`](motivate_interface::ImageProvider) for a single image and
//! never retries.
//!
//! Both surface a [`GenerationError`](motivate_error::GenerationError) whose
//! kind tells the caller which fallback to use.
//!
//! # Example
//!
//! ```no_run
//! use motivate_core::QuoteRequest;
//! use motivate_flows::QuoteGenerator;
//! use motivate_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = QuoteGenerator::new(GeminiClient::new()?);
//! let quote = generator
//!     .generate(&QuoteRequest::new("discipline", "poetic"))
//!     .await?;
//! println!("{} {}", quote.quote, quote.emojis.join(" "));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod prompt;
mod quote;

pub use image::{ImageGenerator, NO_IMAGE_URL};
pub use prompt::{image_prompt, quote_prompt, quote_schema};
pub use quote::{QuoteGenerator, validate_quote};
