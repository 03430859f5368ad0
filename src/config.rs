//! Configuration for the roast gateway
//!
//! The only required setting is the provider credential (`OPENAI_API_KEY`).
//! Everything else has product-choice defaults that can be overridden via
//! `ROAST_*` environment variables.

use secrecy::SecretString;

use crate::{Error, Result};

/// Default OpenAI-compatible API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider bearer credential; `None` when `OPENAI_API_KEY` is unset.
    /// Absence is surfaced per-request as a configuration error, not a
    /// startup failure.
    pub api_key: Option<SecretString>,

    /// Provider call parameters
    pub provider: ProviderConfig,
}

/// Parameters for the captioning and synthesis calls
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// OpenAI-compatible API base URL
    pub api_base: String,

    /// Vision-capable chat-completion model for captioning
    pub caption_model: String,

    /// Sampling temperature for captioning
    pub temperature: f32,

    /// Output token cap for captioning
    pub max_caption_tokens: u32,

    /// Speech-synthesis model
    pub tts_model: String,

    /// Synthesis voice identifier
    pub tts_voice: String,

    /// Synthesis output audio format
    pub tts_format: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            caption_model: "gpt-4o-mini".to_string(),
            temperature: 0.8,
            max_caption_tokens: 60,
            tts_model: "gpt-4o-mini-tts".to_string(),
            tts_voice: "alloy".to_string(),
            tts_format: "mp3".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a numeric override fails to parse
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from);

        let mut provider = ProviderConfig::default();

        if let Ok(base) = std::env::var("ROAST_API_BASE") {
            provider.api_base = base;
        }
        if let Ok(model) = std::env::var("ROAST_CAPTION_MODEL") {
            provider.caption_model = model;
        }
        if let Ok(temp) = std::env::var("ROAST_TEMPERATURE") {
            provider.temperature = temp
                .parse()
                .map_err(|_| Error::Config(format!("invalid ROAST_TEMPERATURE: {temp}")))?;
        }
        if let Ok(tokens) = std::env::var("ROAST_MAX_CAPTION_TOKENS") {
            provider.max_caption_tokens = tokens
                .parse()
                .map_err(|_| Error::Config(format!("invalid ROAST_MAX_CAPTION_TOKENS: {tokens}")))?;
        }
        if let Ok(model) = std::env::var("ROAST_TTS_MODEL") {
            provider.tts_model = model;
        }
        if let Ok(voice) = std::env::var("ROAST_TTS_VOICE") {
            provider.tts_voice = voice;
        }
        if let Ok(format) = std::env::var("ROAST_TTS_FORMAT") {
            provider.tts_format = format;
        }

        Ok(Self { api_key, provider })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_defaults_match_product_choices() {
        let config = ProviderConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.caption_model, "gpt-4o-mini");
        assert!((config.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.max_caption_tokens, 60);
        assert_eq!(config.tts_model, "gpt-4o-mini-tts");
        assert_eq!(config.tts_voice, "alloy");
        assert_eq!(config.tts_format, "mp3");
    }
}
