//! Quote request and result types.

use serde::{Deserialize, Serialize};

/// Input for quote generation.
///
/// Both fields are free text and unvalidated. When they are absent the
/// prompt simply carries an empty value; picking sensible defaults is the
/// caller's job.
///
/// # Examples
///
/// ```
/// use motivate_core::QuoteRequest;
///
/// let request = QuoteRequest::builder()
///     .theme("discipline")
///     .style("poetic")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.theme.as_deref(), Some("discipline"));
/// assert_eq!(QuoteRequest::default().style, None);
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into, strip_option), default)]
pub struct QuoteRequest {
    /// Theme of the quote, e.g. "perseverance"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Style of the quote, e.g. "witty"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl QuoteRequest {
    /// Creates a new request builder.
    pub fn builder() -> QuoteRequestBuilder {
        QuoteRequestBuilder::default()
    }

    /// Request with both theme and style set.
    pub fn new(theme: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
            style: Some(style.into()),
        }
    }
}

/// A generated quote with its decoration.
///
/// Serialized with the provider's field names (`quote`, `emojis`,
/// `mainWords`). `mainWords` may be absent and then reads as empty.
///
/// # Examples
///
/// ```
/// use motivate_core::QuoteResult;
///
/// let result: QuoteResult = serde_json::from_str(
///     r#"{"quote": "Discipline is the bridge.", "emojis": ["🔥"]}"#,
/// ).unwrap();
///
/// assert_eq!(result.emojis, vec!["🔥".to_string()]);
/// assert!(result.main_words.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct QuoteResult {
    /// The quote text
    pub quote: String,
    /// Single-glyph emojis, in display order
    #[builder(default)]
    pub emojis: Vec<String>,
    /// Lowercase key words expected to appear in the quote
    #[serde(default)]
    #[builder(default)]
    pub main_words: Vec<String>,
}

impl QuoteResult {
    /// Creates a new result builder.
    pub fn builder() -> QuoteResultBuilder {
        QuoteResultBuilder::default()
    }

    /// Main words that do not occur in the quote, compared case-insensitively.
    pub fn missing_main_words(&self) -> Vec<&str> {
        let haystack = self.quote.to_lowercase();
        self.main_words
            .iter()
            .map(String::as_str)
            .filter(|word| !haystack.contains(&word.to_lowercase()))
            .collect()
    }
}
