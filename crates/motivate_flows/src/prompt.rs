//! Prompt text and response schema.
//!
//! Everything here is a pure function of its input so identical requests
//! always produce byte-identical prompts.

use motivate_core::{ImageRequest, QuoteRequest};
use serde_json::{Value, json};

/// Build the quote prompt for `request`.
///
/// A missing theme or style renders as an empty value.
///
/// # Examples
///
/// ```
/// use motivate_core::QuoteRequest;
/// use motivate_flows::quote_prompt;
///
/// let prompt = quote_prompt(&QuoteRequest::new("discipline", "poetic"));
/// assert!(prompt.contains("Theme: discipline\n"));
/// assert!(prompt.contains("Style: poetic\n"));
/// ```
pub fn quote_prompt(request: &QuoteRequest) -> String {
    let theme = request.theme.as_deref().unwrap_or_default();
    let style = request.style.as_deref().unwrap_or_default();

    format!(
        "You are a motivational quote generator. Generate a quote based on the following theme and style.\n\
         Theme: {theme}\n\
         Style: {style}\n\
         \n\
         Also choose one to three emojis that capture the mood of the quote, \
         and list the key words of the quote in lowercase.\n\
         \n\
         Quote:"
    )
}

/// Response schema for quote generation, in Gemini's `responseSchema` dialect.
pub fn quote_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "quote": {
                "type": "STRING",
                "description": "The generated motivational quote."
            },
            "emojis": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "One to three single emojis that match the quote."
            },
            "mainWords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Key words of the quote, lowercase, as they appear in it."
            }
        },
        "required": ["quote", "emojis"]
    })
}

/// Build the image prompt for `request`.
///
/// The literal quote is embedded between double quotes; an empty quote
/// yields a prompt with an empty embedded string.
pub fn image_prompt(request: &ImageRequest) -> String {
    format!(
        "Generate a visually stunning, artistic, and inspiring image that complements the following \
         motivational quote. The quote should be elegantly integrated into the image, with a clear, \
         readable, and stylish font. The overall composition should be powerful and shareable on \
         social media.\n\
         \n\
         Quote: \"{}\"\n\
         \n\
         Image style guidelines:\n\
         - Abstract, symbolic, or metaphorical visuals are preferred over literal interpretations.\n\
         - Use a rich, cinematic color palette.\n\
         - Ensure high contrast for readability of the text.\n\
         - The final image should feel premium and highly polished.",
        request.quote()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_prompt_is_deterministic() {
        let request = QuoteRequest::new("resilience", "witty");
        assert_eq!(quote_prompt(&request), quote_prompt(&request.clone()));
    }

    #[test]
    fn test_quote_prompt_with_missing_values() {
        let prompt = quote_prompt(&QuoteRequest::default());
        assert!(prompt.contains("Theme: \n"));
        assert!(prompt.contains("Style: \n"));
        assert!(prompt.ends_with("Quote:"));
    }

    #[test]
    fn test_quote_schema_requires_quote_and_emojis() {
        let schema = quote_schema();
        assert_eq!(schema["required"], json!(["quote", "emojis"]));
        assert_eq!(schema["properties"]["mainWords"]["type"], "ARRAY");
    }

    #[test]
    fn test_image_prompt_embeds_quote() {
        let prompt = image_prompt(&ImageRequest::new("Discipline is the bridge."));
        assert!(prompt.contains("Quote: \"Discipline is the bridge.\"\n"));
        assert!(prompt.contains("cinematic color palette"));
        assert!(prompt.contains("high contrast"));
    }

    #[test]
    fn test_image_prompt_allows_empty_quote() {
        let prompt = image_prompt(&ImageRequest::new(""));
        assert!(prompt.contains("Quote: \"\"\n"));
    }
}
