//! OpenAI provider for roast captioning (vision) and speech synthesis

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{ProviderError, RoastProvider};
use crate::config::ProviderConfig;

/// Fixed system instruction for the captioning call. Changing this is a
/// product decision; it is deliberately not configurable.
const ROAST_SYSTEM_PROMPT: &str = "You are a concise roast generator. Produce ONE punchy line (6\u{2013}20 words) about the person in the image.\nRules (strict):\n- PG-13 tone: witty, sharp, playful; mild profanity only, no explicit content.\n- Absolutely no slurs, hate, or references to protected attributes (race, religion, gender, sexual orientation, disability, etc.).\n- No violence, threats, doxxing, or medical/mental health judgments.\n- Do not identify real people or guess sensitive traits.\n- Output only the roast line; no emojis, disclaimers, or extra text.\n- If the image is unclear, still produce a general, PG-13 roast about their vibe or selfie skills.";

/// User-turn instruction paired with the image
const ROAST_USER_PROMPT: &str = "Roast this photo with the rules above.";

/// OpenAI-backed roast provider
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    config: ProviderConfig,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    #[must_use]
    pub fn new(api_key: SecretString, config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            config,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key.expose_secret())
    }
}

#[async_trait]
impl RoastProvider for OpenAiProvider {
    async fn generate_caption(&self, image: &str) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.caption_model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_caption_tokens,
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(ROAST_SYSTEM_PROMPT),
                },
                Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: ROAST_USER_PROMPT,
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl { url: image },
                        },
                    ]),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .header("Authorization", self.bearer())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("vision request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let details = error_details(response).await;
            return Err(ProviderError::Upstream { status, details });
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Request(format!("vision response parse failed: {e}")))?;

        let caption = result
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string();

        tracing::debug!(caption = %caption, "caption generated");
        Ok(caption)
    }

    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let request = SpeechRequest {
            model: &self.config.tts_model,
            voice: &self.config.tts_voice,
            input: text,
            format: &self.config.tts_format,
        };

        let response = self
            .client
            .post(format!("{}/audio/speech", self.config.api_base))
            .header("Authorization", self.bearer())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("TTS request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let details = error_details(response).await;
            return Err(ProviderError::Upstream { status, details });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Request(format!("TTS body read failed: {e}")))?;

        Ok(audio.to_vec())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Best-effort parse of a provider error body, falling back to
/// `{status, statusText}` when the body is not JSON
async fn error_details(response: reqwest::Response) -> serde_json::Value {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str(&body).unwrap_or_else(|_| {
        serde_json::json!({
            "status": status.as_u16(),
            "statusText": status.canonical_reason().unwrap_or_default(),
        })
    })
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: MessageContent<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ContentPart<'a> {
    #[serde(rename = "text")]
    Text { text: &'a str },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
