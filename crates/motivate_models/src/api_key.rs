//! API key lookup shared by both Google clients.

use motivate_error::{ProviderError, ProviderErrorKind};
use std::env;

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Read the API key from the environment.
///
/// Blank values are skipped so an empty `GEMINI_API_KEY` does not shadow a
/// valid `GOOGLE_API_KEY`.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::MissingApiKey`] when no variable is set.
pub fn api_key_from_env() -> Result<String, ProviderError> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingApiKey))
}
