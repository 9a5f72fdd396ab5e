//! Error types for MotivateNow.
//!
//! This crate provides the error types used throughout the MotivateNow workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Provider calls return [`ProviderFailure`], which is either a transient
//! [`ProviderError`] or a [`MalformedResponseError`]. Generators turn the last
//! failure into a terminal [`GenerationError`] whose kind tells the caller
//! whether a quote or an image could not be produced.
//!
//! # Examples
//!
//! ```
//! use motivate_error::{MotivateResult, ConfigError};
//!
//! fn load() -> MotivateResult<String> {
//!     Err(ConfigError::new("Missing [quote] section"))?
//! }
//!
//! match load() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod json;
mod malformed;
mod provider;
mod session;
mod storage;

pub use config::ConfigError;
pub use error::{MotivateError, MotivateErrorKind, MotivateResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use malformed::MalformedResponseError;
pub use provider::{ProviderError, ProviderErrorKind, ProviderFailure, ProviderResult};
pub use session::{SessionError, SessionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
