//! Google Gemini text generation.

mod client;

pub use client::GeminiClient;
