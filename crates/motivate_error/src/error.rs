//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, JsonError, MalformedResponseError, ProviderError, SessionError,
    StorageError,
};

/// Every error the workspace can surface, by origin.
///
/// # Examples
///
/// ```
/// use motivate_error::{MotivateError, ConfigError};
///
/// let config_err = ConfigError::new("bad backoff");
/// let err: MotivateError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MotivateErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Transient provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Provider output with the wrong shape
    #[from(MalformedResponseError)]
    Malformed(MalformedResponseError),
    /// Generation gave up
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Session action without a subject
    #[from(SessionError)]
    Session(SessionError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// MotivateNow error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("MotivateNow Error: {}", _0)]
pub struct MotivateError(Box<MotivateErrorKind>);

impl MotivateError {
    /// Create a new error from a kind.
    pub fn new(kind: MotivateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MotivateErrorKind {
        &self.0
    }

    /// The generation failure behind this error, if that is what it is.
    pub fn as_generation(&self) -> Option<&GenerationError> {
        match self.kind() {
            MotivateErrorKind::Generation(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to MotivateErrorKind
impl<T> From<T> for MotivateError
where
    T: Into<MotivateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for MotivateNow operations.
///
/// # Examples
///
/// ```
/// use motivate_error::{MotivateResult, StorageError, StorageErrorKind};
///
/// fn save() -> MotivateResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("read-only".into())))?
/// }
/// assert!(save().is_err());
/// ```
pub type MotivateResult<T> = std::result::Result<T, MotivateError>;
