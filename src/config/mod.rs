//! Debate configuration: the settings each turn is computed from.
//!
//! Settings are read through a [`ConfigSource`] at the start of every turn,
//! so edits made while a debate is live apply to the next generated reply.

mod prompt;
mod settings;
mod source;
mod turn_limit;

pub use prompt::build_prompt;
pub use settings::{DebateSettings, ParticipantConfig, Participants, Tone};
pub use source::{ConfigSource, SharedSettings};
pub use turn_limit::TurnLimit;
