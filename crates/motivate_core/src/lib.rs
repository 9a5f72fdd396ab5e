//! Core data types for MotivateNow.
//!
//! These are the transient request/response records exchanged between the
//! shell and the two generators. Nothing here is persisted; results are
//! created per request and at most copied into in-memory history.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod data_uri;
mod image;
mod quote;
mod telemetry;

pub use data_uri::DataUri;
pub use image::{ImageRequest, ImageResult, VisualizationEntry};
pub use quote::{QuoteRequest, QuoteRequestBuilder, QuoteResult, QuoteResultBuilder};
pub use telemetry::{init_telemetry, shutdown_telemetry};
