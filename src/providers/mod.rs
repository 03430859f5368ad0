//! AI provider abstraction for captioning and speech synthesis
//!
//! The gateway never depends on a specific provider's wire format; it talks
//! to a [`RoastProvider`] with two operations, each of which can fail with a
//! [`ProviderError`]. This keeps the relay testable with a scripted mock.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Failure from an external AI provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider returned a non-success HTTP status. `details` is the
    /// best-effort JSON parse of the provider's error body, falling back to
    /// `{"status": n, "statusText": s}` when the body is not JSON.
    #[error("upstream returned status {status}")]
    Upstream {
        status: u16,
        details: serde_json::Value,
    },

    /// Transport or response-decoding failure
    #[error("request failed: {0}")]
    Request(String),
}

/// Trait for providers that caption images and synthesize speech
#[async_trait]
pub trait RoastProvider: Send + Sync {
    /// Generate a short roast caption for an image
    ///
    /// `image` is a data URL (`data:image/jpeg;base64,...`). The returned
    /// caption is trimmed; it may be empty if the provider produced no text.
    ///
    /// # Errors
    ///
    /// Returns error if the provider call fails
    async fn generate_caption(&self, image: &str) -> Result<String, ProviderError>;

    /// Synthesize speech for a caption
    ///
    /// # Returns
    ///
    /// Audio bytes (MP3 format)
    ///
    /// # Errors
    ///
    /// Returns error if the provider call fails
    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>, ProviderError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
