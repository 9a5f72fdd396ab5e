//! Metrics for provider API calls.
//!
//! Provides OpenTelemetry-based metrics for tracking provider latency and
//! failures across the text and image clients.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use motivate_error::{ProviderErrorKind, ProviderFailure};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Metrics for generative API interactions.
///
/// Metrics are labeled with provider (gemini, imagen) and model name.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total successful API requests
    pub requests: Counter<u64>,
    /// Failed API requests
    pub errors: Counter<u64>,
    /// API call duration in seconds
    pub duration: Histogram<f64>,
    /// Images returned by image models
    pub images: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("motivate_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Total LLM API requests")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed LLM API requests")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("LLM API call duration")
                .build(),
            images: meter
                .u64_counter("llm.images")
                .with_description("Images returned by image models")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful API request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed API request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record images returned by an image model.
    pub fn record_images(&self, model: &str, count: u64) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.images.add(count, labels);
    }
}

impl Default for LlmMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify a provider failure for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "network", "timeout",
/// "invalid_request", "malformed", "unknown"
pub fn classify_error(failure: &ProviderFailure) -> &'static str {
    match failure {
        ProviderFailure::Transient(err) => classify_kind(&err.kind),
        ProviderFailure::Malformed(_) => "malformed",
    }
}

fn classify_kind(kind: &ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::MissingApiKey => "auth",
        ProviderErrorKind::Transport(message) => {
            let message = message.to_lowercase();
            if message.contains("timeout") || message.contains("timed out") {
                "timeout"
            } else {
                "network"
            }
        }
        ProviderErrorKind::HttpStatus { status_code, .. } => match status_code {
            429 => "rate_limit",
            401 | 403 => "auth",
            400 => "invalid_request",
            408 | 504 => "timeout",
            _ => "unknown",
        },
        ProviderErrorKind::ClientCreation(_) | ProviderErrorKind::ApiRequest(_) => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motivate_error::{MalformedResponseError, ProviderError};

    fn transient(kind: ProviderErrorKind) -> ProviderFailure {
        ProviderError::new(kind).into()
    }

    fn status(status_code: u16) -> ProviderErrorKind {
        ProviderErrorKind::HttpStatus {
            status_code,
            message: "details".to_string(),
        }
    }

    #[test]
    fn test_classify_status_codes() {
        assert_eq!(classify_error(&transient(status(429))), "rate_limit");
        assert_eq!(classify_error(&transient(status(401))), "auth");
        assert_eq!(classify_error(&transient(status(403))), "auth");
        assert_eq!(classify_error(&transient(status(400))), "invalid_request");
        assert_eq!(classify_error(&transient(status(500))), "unknown");
    }

    #[test]
    fn test_classify_ignores_error_location() {
        let located = ProviderError {
            kind: ProviderErrorKind::HttpStatus {
                status_code: 500,
                message: "internal".to_string(),
            },
            line: 429,
            file: "/home/author/auth/src/lib.rs",
        };
        assert_eq!(classify_error(&located.into()), "unknown");
    }

    #[test]
    fn test_classify_transport_failures() {
        let timed_out = transient(ProviderErrorKind::Transport("operation timed out".into()));
        assert_eq!(classify_error(&timed_out), "timeout");

        let reset = transient(ProviderErrorKind::Transport("reset by peer".into()));
        assert_eq!(classify_error(&reset), "network");
    }

    #[test]
    fn test_classify_other_failures() {
        assert_eq!(
            classify_error(&transient(ProviderErrorKind::MissingApiKey)),
            "auth"
        );
        assert_eq!(
            classify_error(&transient(ProviderErrorKind::ApiRequest("boom".into()))),
            "unknown"
        );
        let malformed: ProviderFailure = MalformedResponseError::new("not JSON").into();
        assert_eq!(classify_error(&malformed), "malformed");
    }
}
