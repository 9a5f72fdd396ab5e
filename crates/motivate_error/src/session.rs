//! Errors for session actions that have nothing to act on.

/// Session actions that need a current quote or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Visualize requested before any quote is shown
    #[display("No quote to visualize; generate a quote first")]
    NothingToVisualize,
    /// Download requested before any image is shown
    #[display("No image to download; visualize a quote first")]
    NothingToDownload,
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    kind: SessionErrorKind,
    line: u32,
    file: &'static str,
}

impl SessionError {
    /// Create a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SessionErrorKind {
        &self.kind
    }
}
