//! Sessions wired to the real Google providers.

use motivate_error::MotivateResult;
use motivate_flows::{ImageGenerator, QuoteGenerator};
use motivate_models::{GeminiClient, ImagenClient};
use motivate_retry::MotivateConfig;
use tracing::instrument;

use crate::Session;

/// A session backed by Gemini and Imagen.
pub type LiveSession = Session<GeminiClient, ImagenClient>;

/// Quote generator configured from the `[quote]` section.
///
/// # Errors
///
/// Fails when no API key is set.
pub fn quote_generator(config: &MotivateConfig) -> MotivateResult<QuoteGenerator<GeminiClient>> {
    let client = GeminiClient::from_config(config)?;
    Ok(QuoteGenerator::new(client).with_policy(config.quote.retry))
}

/// Image generator configured from the `[provider]` and `[image]` sections.
///
/// # Errors
///
/// Fails when no API key is set.
pub fn image_generator(config: &MotivateConfig) -> MotivateResult<ImageGenerator<ImagenClient>> {
    Ok(ImageGenerator::new(ImagenClient::from_config(config)?))
}

/// Build a live session from configuration.
///
/// # Errors
///
/// Fails when no API key is set.
#[instrument(skip(config), fields(quote_model = %config.quote.model, image_model = %config.image.model))]
pub fn live_session(config: &MotivateConfig) -> MotivateResult<LiveSession> {
    Ok(Session::new(quote_generator(config)?, image_generator(config)?))
}
