//! Response providers: strategies that produce a participant's next reply.

mod registry;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{DebateSettings, ParticipantConfig};
use crate::debate::{Message, Side};
use crate::error::GenerationError;

pub use registry::ProviderRegistry;

/// Which provider produces a participant's replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local scripted replies, no network.
    #[default]
    Mock,
    /// Google Gemini `generateContent` endpoint.
    Gemini,
}

impl ProviderKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "mock" => Some(Self::Mock),
            "gemini" | "google" => Some(Self::Gemini),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mock => write!(f, "mock"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

/// Everything a provider needs to produce one turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnRequest<'a> {
    /// Side whose reply is requested.
    pub side: Side,
    /// Configuration of that side, from the current settings snapshot.
    pub participant: &'a ParticipantConfig,
    /// Settings snapshot the turn is computed from.
    pub settings: &'a DebateSettings,
    /// Transcript so far, greetings included.
    pub transcript: &'a [Message],
}

impl<'a> TurnRequest<'a> {
    pub fn new(side: Side, settings: &'a DebateSettings, transcript: &'a [Message]) -> Self {
        Self {
            side,
            participant: settings.participant(side),
            settings,
            transcript,
        }
    }
}

/// Produces the body of the next message for a participant.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, request: &TurnRequest<'_>) -> Result<String, GenerationError>;
}
