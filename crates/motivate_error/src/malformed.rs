//! Malformed provider output.

/// The provider answered, but its output does not have the expected shape.
///
/// # Examples
///
/// ```
/// use motivate_error::MalformedResponseError;
///
/// let err = MalformedResponseError::new("missing field `quote`");
/// assert!(format!("{}", err).contains("missing field"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Response: {} at line {} in {}", message, line, file)]
pub struct MalformedResponseError {
    /// What was wrong with the response
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MalformedResponseError {
    /// Create a new MalformedResponseError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
