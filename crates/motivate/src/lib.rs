//! MotivateNow - AI-generated motivational quotes
//!
//! MotivateNow asks a Gemini text model for a short motivational quote with a
//! few emojis and key words, and can render the quote as artwork with an
//! Imagen model. Quote generation retries on failure and falls back to a
//! fixed quote; image generation is a single attempt.
//!
//! # Quick Start
//!
//! ```no_run
//! use motivate::{MotivateConfig, QuoteRequest, live_session};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MotivateConfig::load()?;
//! let mut session = live_session(&config)?;
//!
//! let outcome = session
//!     .next_quote(&QuoteRequest::new("discipline", "poetic"))
//!     .await;
//! println!("{}", outcome.result().quote);
//!
//! session.visualize().await?;
//! session.save_image(motivate::DEFAULT_DOWNLOAD_NAME)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `motivate_core` - Quote and image records, data URIs, telemetry
//! - `motivate_error` - Error types
//! - `motivate_interface` - `TextProvider` and `ImageProvider` traits
//! - `motivate_retry` - Retry policy and layered configuration
//! - `motivate_models` - Gemini and Imagen clients
//! - `motivate_flows` - Quote and image generators
//!
//! This crate adds the session, the theme vocabulary and the `motivate`
//! binary, and re-exports the rest for convenience.

mod live;
mod session;
mod shell;
mod vocabulary;

pub use live::{LiveSession, image_generator, live_session, quote_generator};
pub use session::{
    DEFAULT_DOWNLOAD_NAME, FALLBACK_QUOTE, QuoteOutcome, Session, fallback_quote, save_image_to,
    share_text_for,
};
pub use shell::{HELP, Shell, ShellCommand, render_quote};
pub use vocabulary::{CONCEPTS, STYLES, THEMES, ThemeSelection, random_style, resolve_theme};

pub use motivate_core::*;
pub use motivate_error::*;
pub use motivate_flows::*;
pub use motivate_interface::*;
pub use motivate_models::{GeminiClient, ImagenClient, LlmMetrics};
pub use motivate_retry::*;
