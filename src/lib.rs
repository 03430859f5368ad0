//! Roast Gateway - selfie-to-spoken-roast relay
//!
//! A thin HTTP relay between a browser webcam client and an AI provider:
//! one vision call to caption a frame, one speech call to voice the
//! caption, and a single combined `{ text, audioBase64 }` response.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          Browser client (webcam)          │
//! └────────────────────┬─────────────────────┘
//!                      │ POST /api/roast { image }
//! ┌────────────────────▼─────────────────────┐
//! │              Roast Gateway                │
//! │   validate → caption → synthesize → 200   │
//! └────────────────────┬─────────────────────┘
//!                      │
//! ┌────────────────────▼─────────────────────┐
//! │        AI provider (vision │ TTS)         │
//! └──────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod providers;
pub mod relay;

pub use api::{ApiServer, ApiState};
pub use config::{Config, ProviderConfig};
pub use error::{Error, Result};
pub use providers::{OpenAiProvider, ProviderError, RoastProvider};
pub use relay::{RelayError, Roast};
