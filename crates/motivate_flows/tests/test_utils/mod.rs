//! Test doubles for the provider traits.
//!
//! Each mock plays back a scripted sequence of responses and counts calls.
//! Once the script runs out, the last entry repeats.

#![allow(dead_code)]

use async_trait::async_trait;
use motivate_error::{
    MalformedResponseError, ProviderError, ProviderErrorKind, ProviderFailure, ProviderResult,
};
use motivate_interface::{
    ImageGenerationRequest, ImageProvider, ImageResponse, StructuredRequest, TextProvider,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A single scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    /// Return this value
    Success(T),
    /// Fail with a transient provider error
    Error(ProviderErrorKind),
    /// Fail with a malformed-response error
    Malformed(String),
}

impl<T: Clone> MockResponse<T> {
    fn play(&self) -> ProviderResult<T> {
        match self {
            MockResponse::Success(value) => Ok(value.clone()),
            MockResponse::Error(kind) => Err(ProviderError::new(kind.clone()).into()),
            MockResponse::Malformed(message) => {
                Err(ProviderFailure::from(MalformedResponseError::new(message.clone())))
            }
        }
    }
}

/// Shared script and call log.
#[derive(Debug)]
struct Script<T, R> {
    responses: Vec<MockResponse<T>>,
    calls: Arc<Mutex<Vec<R>>>,
}

impl<T: Clone, R> Script<T, R> {
    fn new(responses: Vec<MockResponse<T>>) -> Self {
        assert!(!responses.is_empty(), "mock script needs at least one response");
        Self {
            responses,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn next(&self, request: R) -> ProviderResult<T> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len().min(self.responses.len() - 1);
        calls.push(request);
        self.responses[index].play()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

/// Transient error used by most failure scripts.
pub fn unavailable() -> ProviderErrorKind {
    ProviderErrorKind::HttpStatus {
        status_code: 503,
        message: "The model is overloaded".to_string(),
    }
}

/// Scripted [`TextProvider`].
#[derive(Debug)]
pub struct MockTextProvider {
    script: Script<Value, StructuredRequest>,
}

impl MockTextProvider {
    /// Always answer with `value`.
    pub fn new_success(value: Value) -> Self {
        Self::new_sequence(vec![MockResponse::Success(value)])
    }

    /// Always fail with `error`.
    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Fail `fail_count` times, then answer with `value`.
    pub fn new_fail_then_succeed(fail_count: usize, error: ProviderErrorKind, value: Value) -> Self {
        let mut responses = vec![MockResponse::Error(error); fail_count];
        responses.push(MockResponse::Success(value));
        Self::new_sequence(responses)
    }

    /// Play back `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse<Value>>) -> Self {
        Self {
            script: Script::new(responses),
        }
    }

    /// Number of times generate_structured() was called.
    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<StructuredRequest> {
        self.script.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate_structured(&self, req: &StructuredRequest) -> ProviderResult<Value> {
        self.script.next(req.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }

    fn model_name(&self) -> &str {
        "mock-text-model"
    }
}

/// Scripted [`ImageProvider`].
#[derive(Debug)]
pub struct MockImageProvider {
    script: Script<ImageResponse, ImageGenerationRequest>,
}

impl MockImageProvider {
    /// Always answer with media at `url`.
    pub fn new_success(url: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(ImageResponse::with_url(url))])
    }

    /// Always answer with `response`.
    pub fn new_response(response: ImageResponse) -> Self {
        Self::new_sequence(vec![MockResponse::Success(response)])
    }

    /// Always fail with `error`.
    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Play back `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse<ImageResponse>>) -> Self {
        Self {
            script: Script::new(responses),
        }
    }

    /// Number of times generate_image() was called.
    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<ImageGenerationRequest> {
        self.script.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate_image(&self, req: &ImageGenerationRequest) -> ProviderResult<ImageResponse> {
        self.script.next(req.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }

    fn model_name(&self) -> &str {
        "mock-image-model"
    }
}
