//! The caption-then-synthesize pipeline
//!
//! Two strictly sequential provider calls per request: the caption produced
//! by the vision call is the input to the speech call, so there is no
//! parallelism and no partial success. A failure at either stage fails the
//! whole request.

use thiserror::Error;

use crate::providers::{ProviderError, RoastProvider};

/// A completed roast: the caption text and its spoken rendering
#[derive(Debug, Clone)]
pub struct Roast {
    /// Trimmed caption text
    pub text: String,
    /// MP3 audio bytes
    pub audio: Vec<u8>,
}

/// Failure of the pipeline, tagged by stage
#[derive(Debug, Error)]
pub enum RelayError {
    /// The captioning call failed upstream
    #[error("captioning failed: {0}")]
    Caption(ProviderError),

    /// The captioning call succeeded but yielded no usable text. Distinct
    /// from upstream failure: the provider returned a success envelope with
    /// empty content.
    #[error("captioning produced no text")]
    EmptyCaption,

    /// The synthesis call failed upstream
    #[error("synthesis failed: {0}")]
    Synthesis(ProviderError),
}

/// Run the two-stage pipeline for one image
///
/// Synthesis is only invoked once captioning has produced a non-empty
/// trimmed caption, and its input is exactly that caption.
///
/// # Errors
///
/// Returns [`RelayError`] identifying the failed stage
pub async fn run(provider: &dyn RoastProvider, image: &str) -> Result<Roast, RelayError> {
    let caption = provider
        .generate_caption(image)
        .await
        .map_err(RelayError::Caption)?;

    let caption = caption.trim().to_string();
    if caption.is_empty() {
        tracing::warn!(provider = provider.name(), "empty caption from provider");
        return Err(RelayError::EmptyCaption);
    }

    let audio = provider
        .synthesize_speech(&caption)
        .await
        .map_err(RelayError::Synthesis)?;

    tracing::debug!(
        provider = provider.name(),
        caption = %caption,
        audio_bytes = audio.len(),
        "roast complete"
    );

    Ok(Roast {
        text: caption,
        audio,
    })
}
