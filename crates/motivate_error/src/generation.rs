//! Terminal generation failures surfaced to the caller.

use crate::ProviderFailure;

/// Which generator gave up.
///
/// Callers pick their fallback from this: a default quote for
/// [`GenerationErrorKind::Quote`], a notification without image for
/// [`GenerationErrorKind::Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Motivational quote generation
    #[display("Quote")]
    Quote,
    /// Quote image generation
    #[display("Image")]
    Image,
}

/// Generation failed after the attempt budget was spent.
///
/// # Examples
///
/// ```
/// use motivate_error::{
///     GenerationError, GenerationErrorKind, ProviderError, ProviderErrorKind,
/// };
///
/// let cause = ProviderError::new(ProviderErrorKind::Transport("connection reset".into()));
/// let err = GenerationError::new(GenerationErrorKind::Quote, 3, cause.into());
///
/// assert_eq!(*err.kind(), GenerationErrorKind::Quote);
/// assert_eq!(err.attempts(), 3);
/// assert!(format!("{}", err).contains("after 3 attempt(s)"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Generation Error: {} generation failed after {} attempt(s): {} at line {} in {}",
    kind,
    attempts,
    cause,
    line,
    file
)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    attempts: usize,
    #[error(source)]
    cause: ProviderFailure,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind, attempts: usize, cause: ProviderFailure) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            attempts,
            cause,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Which generator failed.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Number of provider calls made before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The last underlying failure.
    pub fn cause(&self) -> &ProviderFailure {
        &self.cause
    }
}
