//! Motivational quote generation with retry.

use motivate_core::{QuoteRequest, QuoteResult};
use motivate_error::{GenerationError, GenerationErrorKind, MalformedResponseError, ProviderFailure};
use motivate_interface::{StructuredRequest, TextProvider};
use motivate_retry::RetryPolicy;
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::{quote_prompt, quote_schema};

/// Check a provider answer against the [`QuoteResult`] shape.
///
/// The value is returned exactly as the provider produced it; nothing is
/// trimmed or reordered. Main words that do not appear in the quote are
/// logged and kept.
///
/// # Errors
///
/// Returns [`MalformedResponseError`] if a required field is missing or has
/// the wrong type, if the quote is blank, or if an emoji entry is not a
/// single glyph. A glyph may span several code points (skin tones, ZWJ
/// sequences, keycaps) but never contains whitespace or letters.
///
/// # Examples
///
/// ```
/// use motivate_flows::validate_quote;
/// use serde_json::json;
///
/// let ok = validate_quote(json!({"quote": "Begin.", "emojis": ["🌅"]})).unwrap();
/// assert_eq!(ok.quote, "Begin.");
///
/// assert!(validate_quote(json!({"quote": "   ", "emojis": []})).is_err());
/// assert!(validate_quote(json!({"emojis": ["🌅"]})).is_err());
/// assert!(validate_quote(json!({"quote": "Go.", "emojis": ["🔥 fire"]})).is_err());
/// ```
pub fn validate_quote(value: Value) -> Result<QuoteResult, MalformedResponseError> {
    let result: QuoteResult = serde_json::from_value(value).map_err(|e| {
        MalformedResponseError::new(format!("response does not match the quote shape: {}", e))
    })?;

    if result.quote.trim().is_empty() {
        return Err(MalformedResponseError::new("quote is empty"));
    }
    if let Some(emoji) = result.emojis.iter().find(|emoji| !is_single_glyph(emoji)) {
        return Err(MalformedResponseError::new(format!(
            "emoji entry {:?} is not a single glyph",
            emoji
        )));
    }

    let missing = result.missing_main_words();
    if !missing.is_empty() {
        debug!(?missing, "Main words not found in quote");
    }

    Ok(result)
}

fn is_single_glyph(emoji: &str) -> bool {
    !emoji.is_empty()
        && !emoji
            .chars()
            .any(|c| c.is_whitespace() || c.is_ascii_alphabetic())
}

/// Generates motivational quotes through a [`TextProvider`].
///
/// Every failed attempt, whether a transport problem or a malformed answer,
/// is retried until the policy's attempt budget is spent.
///
/// # Example
///
/// ```no_run
/// use motivate_core::QuoteRequest;
/// use motivate_flows::QuoteGenerator;
/// use motivate_models::GeminiClient;
/// use motivate_retry::RetryPolicy;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = QuoteGenerator::new(GeminiClient::new()?)
///     .with_policy(RetryPolicy::new(5, 500))
///     .with_model("gemini-2.5-pro");
/// let quote = generator.generate(&QuoteRequest::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuoteGenerator<P> {
    provider: P,
    policy: RetryPolicy,
    model: Option<String>,
    temperature: Option<f32>,
}

impl<P: TextProvider> QuoteGenerator<P> {
    /// Generator with the default retry policy (3 attempts, 2 s apart).
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: RetryPolicy::default(),
            model: None,
            temperature: None,
        }
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the provider's default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The active retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generate one quote for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] of kind [`GenerationErrorKind::Quote`]
    /// carrying the last failure once every attempt has failed.
    #[instrument(
        skip(self),
        fields(
            provider = self.provider.provider_name(),
            model = self.model.as_deref().unwrap_or(self.provider.model_name())
        )
    )]
    pub async fn generate(&self, request: &QuoteRequest) -> Result<QuoteResult, GenerationError> {
        let structured = StructuredRequest::new(
            quote_prompt(request),
            quote_schema(),
            self.model.clone(),
            self.temperature,
        );

        let outcome = self
            .policy
            .run("generate_quote", |attempt| {
                let structured = &structured;
                async move {
                    debug!(attempt, "Requesting quote");
                    let value = self.provider.generate_structured(structured).await?;
                    let quote = validate_quote(value)?;
                    Ok::<_, ProviderFailure>(quote)
                }
            })
            .await;

        outcome.map_err(|exhausted| {
            error!(
                attempts = exhausted.attempts,
                error = %exhausted.last_error,
                "Quote generation failed"
            );
            GenerationError::new(
                GenerationErrorKind::Quote,
                exhausted.attempts,
                exhausted.last_error,
            )
        })
    }
}
