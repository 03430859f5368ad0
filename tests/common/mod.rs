//! Shared test utilities

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use roast_gateway::{ApiState, ProviderError, RoastProvider};

/// Scripted provider that records calls instead of hitting the network
pub struct MockProvider {
    caption_result: Mutex<Option<Result<String, ProviderError>>>,
    speech_result: Mutex<Option<Result<Vec<u8>, ProviderError>>>,
    /// Images passed to `generate_caption`
    pub caption_calls: Mutex<Vec<String>>,
    /// Texts passed to `synthesize_speech`
    pub speech_calls: Mutex<Vec<String>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            caption_result: Mutex::new(None),
            speech_result: Mutex::new(None),
            caption_calls: Mutex::new(Vec::new()),
            speech_calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_caption(self, result: Result<String, ProviderError>) -> Self {
        *self.caption_result.lock().unwrap() = Some(result);
        self
    }

    #[must_use]
    pub fn with_speech(self, result: Result<Vec<u8>, ProviderError>) -> Self {
        *self.speech_result.lock().unwrap() = Some(result);
        self
    }

    pub fn caption_call_count(&self) -> usize {
        self.caption_calls.lock().unwrap().len()
    }

    pub fn speech_call_count(&self) -> usize {
        self.speech_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RoastProvider for MockProvider {
    async fn generate_caption(&self, image: &str) -> Result<String, ProviderError> {
        self.caption_calls.lock().unwrap().push(image.to_string());
        self.caption_result
            .lock()
            .unwrap()
            .take()
            .expect("unexpected generate_caption call")
    }

    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        self.speech_calls.lock().unwrap().push(text.to_string());
        self.speech_result
            .lock()
            .unwrap()
            .take()
            .expect("unexpected synthesize_speech call")
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Build an upstream provider error with pass-through details
#[must_use]
pub fn upstream_error(status: u16, details: serde_json::Value) -> ProviderError {
    ProviderError::Upstream { status, details }
}

/// Build a router around an optional provider, as the server does
#[must_use]
pub fn test_router(provider: Option<Arc<dyn RoastProvider>>) -> Router {
    roast_gateway::api::router(Arc::new(ApiState { provider }))
}
