use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::debate::Side;
use crate::provider::ProviderKind;

use super::TurnLimit;

/// Register requested from both participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Heated,
    Academic,
    Humorous,
}

impl Tone {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "formal" => Some(Self::Formal),
            "friendly" => Some(Self::Friendly),
            "heated" => Some(Self::Heated),
            "academic" => Some(Self::Academic),
            "humorous" => Some(Self::Humorous),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Friendly => "friendly",
            Self::Heated => "heated",
            Self::Academic => "academic",
            Self::Humorous => "humorous",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-participant configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParticipantConfig {
    /// Display name; blank falls back to "Agent 1" / "Agent 2".
    pub name: String,
    /// Strategy used to produce this participant's replies.
    pub provider: ProviderKind,
    /// Remote model name; blank uses the provider default.
    pub model: String,
    /// API key for remote providers.
    pub api_key: Option<SecretString>,
    /// Side-specific instruction appended to the prompt.
    pub instruction: String,
}

impl ParticipantConfig {
    pub fn mock(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn gemini(name: impl Into<String>, api_key: Option<&str>) -> Self {
        Self {
            name: name.into(),
            provider: ProviderKind::Gemini,
            api_key: api_key.map(|key| SecretString::new(key.to_string())),
            ..Self::default()
        }
    }

    /// Trimmed display name, or the side's default when blank.
    pub fn display_name(&self, side: Side) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            side.default_name().to_string()
        } else {
            name.to_string()
        }
    }

    /// Trimmed API key, `None` when missing or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().trim())
            .filter(|key| !key.is_empty())
    }
}

/// Both sides of a debate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Participants {
    pub p1: ParticipantConfig,
    pub p2: ParticipantConfig,
}

impl Participants {
    pub fn get(&self, side: Side) -> &ParticipantConfig {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut ParticipantConfig {
        match side {
            Side::P1 => &mut self.p1,
            Side::P2 => &mut self.p2,
        }
    }
}

/// Everything a turn is computed from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DebateSettings {
    pub topic: String,
    pub tone: Tone,
    pub global_instruction: String,
    pub turn_limit: TurnLimit,
    pub participants: Participants,
}

impl DebateSettings {
    pub fn participant(&self, side: Side) -> &ParticipantConfig {
        self.participants.get(side)
    }
}
