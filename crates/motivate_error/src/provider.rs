//! Provider error types.

use crate::MalformedResponseError;

/// Conditions under which a call to the generative provider fails.
///
/// Every kind is treated as transient by the quote flow: the request may
/// succeed if it is simply sent again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY (or GOOGLE_API_KEY) environment variable not set")]
    MissingApiKey,
    /// Failed to create the underlying client
    #[display("Failed to create provider client: {}", _0)]
    ClientCreation(String),
    /// Connection, DNS or timeout failure before a response arrived
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// API request failed without a recognisable status code
    #[display("Provider API request failed: {}", _0)]
    ApiRequest(String),
}

impl ProviderErrorKind {
    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProviderErrorKind::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Transient provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use motivate_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::HttpStatus {
///     status_code: 503,
///     message: "Model is overloaded".to_string(),
/// });
/// assert_eq!(err.kind.status_code(), Some(503));
/// assert!(format!("{}", err).contains("HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Any failure of a single provider call.
///
/// # Examples
///
/// ```
/// use motivate_error::{MalformedResponseError, ProviderFailure};
///
/// let failure: ProviderFailure = MalformedResponseError::new("not JSON").into();
/// assert!(failure.is_malformed());
/// ```
#[derive(Debug, Clone, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ProviderFailure {
    /// Network failure, timeout or rejected request
    #[from(ProviderError)]
    Transient(ProviderError),
    /// Response arrived but failed shape validation
    #[from(MalformedResponseError)]
    Malformed(MalformedResponseError),
}

impl ProviderFailure {
    /// True when the provider answered with output of the wrong shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ProviderFailure::Malformed(_))
    }
}

/// Result type for a single provider call.
pub type ProviderResult<T> = std::result::Result<T, ProviderFailure>;
