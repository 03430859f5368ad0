//! Pipeline integration tests
//!
//! Exercises the caption-then-synthesize sequencing and stage-tagged error
//! mapping against a scripted provider; no network involved.

mod common;

use common::{MockProvider, upstream_error};
use roast_gateway::{ProviderError, RelayError, relay};
use serde_json::json;

const IMAGE: &str = "data:image/jpeg;base64,AAAA";

#[tokio::test]
async fn success_returns_trimmed_caption_and_audio() {
    let provider = MockProvider::new()
        .with_caption(Ok("  Nice lighting, shame about the smirk  ".to_string()))
        .with_speech(Ok(vec![0x49, 0x44, 0x33, 0x00, 0xFF]));

    let roast = relay::run(&provider, IMAGE).await.unwrap();

    assert_eq!(roast.text, "Nice lighting, shame about the smirk");
    assert_eq!(roast.audio, vec![0x49, 0x44, 0x33, 0x00, 0xFF]);
}

#[tokio::test]
async fn synthesis_input_is_exactly_the_trimmed_caption() {
    let provider = MockProvider::new()
        .with_caption(Ok("\n  That pose took practice, huh?\t".to_string()))
        .with_speech(Ok(vec![1]));

    relay::run(&provider, IMAGE).await.unwrap();

    assert_eq!(*provider.caption_calls.lock().unwrap(), [IMAGE]);
    assert_eq!(
        *provider.speech_calls.lock().unwrap(),
        ["That pose took practice, huh?"]
    );
}

#[tokio::test]
async fn caption_failure_skips_synthesis() {
    let provider = MockProvider::new().with_caption(Err(upstream_error(
        429,
        json!({"error": {"message": "rate limited"}}),
    )));

    let err = relay::run(&provider, IMAGE).await.unwrap_err();

    match err {
        RelayError::Caption(ProviderError::Upstream { status, details }) => {
            assert_eq!(status, 429);
            assert_eq!(details["error"]["message"], "rate limited");
        }
        other => panic!("expected caption error, got {other:?}"),
    }
    assert_eq!(provider.speech_call_count(), 0);
}

#[tokio::test]
async fn whitespace_caption_is_empty_and_skips_synthesis() {
    let provider = MockProvider::new().with_caption(Ok("   \n\t ".to_string()));

    let err = relay::run(&provider, IMAGE).await.unwrap_err();

    assert!(matches!(err, RelayError::EmptyCaption));
    assert_eq!(provider.speech_call_count(), 0);
}

#[tokio::test]
async fn synthesis_failure_is_tagged_as_synthesis_stage() {
    let provider = MockProvider::new()
        .with_caption(Ok("A roast".to_string()))
        .with_speech(Err(upstream_error(503, json!({"message": "overloaded"}))));

    let err = relay::run(&provider, IMAGE).await.unwrap_err();

    match err {
        RelayError::Synthesis(ProviderError::Upstream { status, details }) => {
            assert_eq!(status, 503);
            assert_eq!(details["message"], "overloaded");
        }
        other => panic!("expected synthesis error, got {other:?}"),
    }
    assert_eq!(provider.caption_call_count(), 1);
}

#[tokio::test]
async fn transport_failure_carries_message() {
    let provider = MockProvider::new()
        .with_caption(Err(ProviderError::Request("connection refused".to_string())));

    let err = relay::run(&provider, IMAGE).await.unwrap_err();

    match err {
        RelayError::Caption(ProviderError::Request(msg)) => {
            assert!(msg.contains("connection refused"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}
