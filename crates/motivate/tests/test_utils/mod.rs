//! Scripted providers for session and shell tests.
//!
//! Answers are played back in order and the last one repeats.

#![allow(dead_code)]

use async_trait::async_trait;
use motivate_error::{ProviderError, ProviderErrorKind, ProviderResult};
use motivate_interface::{
    ImageGenerationRequest, ImageProvider, ImageResponse, StructuredRequest, TextProvider,
};
use serde_json::Value;
use std::sync::Mutex;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    /// Answer with this value
    Success(T),
    /// Fail with a provider error
    Error(ProviderErrorKind),
}

/// 503 used by the failure scripts.
pub fn unavailable() -> ProviderErrorKind {
    ProviderErrorKind::HttpStatus {
        status_code: 503,
        message: "The model is overloaded".to_string(),
    }
}

fn answer<T: Clone, R>(
    responses: &[MockResponse<T>],
    log: &Mutex<Vec<R>>,
    request: R,
) -> ProviderResult<T> {
    let mut log = log.lock().unwrap();
    let response = &responses[log.len().min(responses.len() - 1)];
    log.push(request);
    match response {
        MockResponse::Success(value) => Ok(value.clone()),
        MockResponse::Error(kind) => Err(ProviderError::new(kind.clone()).into()),
    }
}

/// Scripted quote provider.
#[derive(Debug)]
pub struct MockTextProvider {
    responses: Vec<MockResponse<Value>>,
    requests: Mutex<Vec<StructuredRequest>>,
}

impl MockTextProvider {
    pub fn new_sequence(responses: Vec<MockResponse<Value>>) -> Self {
        assert!(!responses.is_empty());
        Self {
            responses,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn new_success(value: Value) -> Self {
        Self::new_sequence(vec![MockResponse::Success(value)])
    }

    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    pub fn requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate_structured(&self, req: &StructuredRequest) -> ProviderResult<Value> {
        answer(&self.responses, &self.requests, req.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }

    fn model_name(&self) -> &str {
        "mock-text-model"
    }
}

/// Scripted image provider.
#[derive(Debug)]
pub struct MockImageProvider {
    responses: Vec<MockResponse<ImageResponse>>,
    requests: Mutex<Vec<ImageGenerationRequest>>,
}

impl MockImageProvider {
    pub fn new_sequence(responses: Vec<MockResponse<ImageResponse>>) -> Self {
        assert!(!responses.is_empty());
        Self {
            responses,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn new_success(url: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(ImageResponse::with_url(url))])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ImageGenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate_image(&self, req: &ImageGenerationRequest) -> ProviderResult<ImageResponse> {
        answer(&self.responses, &self.requests, req.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }

    fn model_name(&self) -> &str {
        "mock-image-model"
    }
}
