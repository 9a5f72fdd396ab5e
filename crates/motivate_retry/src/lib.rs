//! Retry policy and configuration.
//!
//! The quote flow retries failed provider calls a fixed number of times with
//! a fixed pause in between. Both numbers come from [`RetryPolicy`], which is
//! normally read from `motivate.toml` through [`MotivateConfig`] and can be
//! swapped for [`RetryPolicy::immediate`] in tests.

mod config;
mod policy;

pub use config::{ImageSettings, MotivateConfig, ProviderSettings, QuoteSettings};
pub use policy::{RetryExhausted, RetryPolicy};
