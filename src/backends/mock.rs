//! Scripted provider: canned rhetorical lines plus a stance sentence.
//!
//! No network I/O. Line selection comes from a seedable RNG so debates can be
//! replayed exactly.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::debate::Side;
use crate::error::GenerationError;
use crate::provider::{ResponseProvider, TurnRequest};

/// Lines used when none are configured.
pub const DEFAULT_LINES: [&str; 5] = [
    "I see your point, but the evidence suggests a more nuanced outcome.",
    "Let me challenge that: are we assuming a fixed definition of progress?",
    "The long-term implications matter more than the short-term benefits.",
    "We should separate ethical intent from unintended consequences.",
    "A balanced view recognizes both the risks and the opportunities.",
];

/// Configuration for the scripted provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// RNG seed; `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Candidate lines; empty uses [`DEFAULT_LINES`].
    pub lines: Vec<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lines: DEFAULT_LINES.iter().map(|line| line.to_string()).collect(),
        }
    }
}

#[derive(Debug)]
pub struct MockProvider {
    lines: Vec<String>,
    rng: Mutex<StdRng>,
}

impl MockProvider {
    pub fn new(config: MockConfig) -> Self {
        let lines = if config.lines.is_empty() {
            MockConfig::default().lines
        } else {
            config.lines
        };
        let rng = config
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self {
            lines,
            rng: Mutex::new(rng),
        }
    }

    /// Picks a line and appends the side's stance on `topic`.
    pub fn reply(&self, side: Side, topic: &str) -> String {
        let index = self.rng.lock().gen_range(0..self.lines.len());
        let base = &self.lines[index];
        let topic = topic.trim();
        let stance = side.stance();
        if topic.is_empty() {
            format!("{base} I lean {stance} on this.")
        } else {
            format!("{base} On {topic}, I lean {stance}.")
        }
    }
}

#[async_trait]
impl ResponseProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &TurnRequest<'_>) -> Result<String, GenerationError> {
        Ok(self.reply(request.side, &request.settings.topic))
    }
}
