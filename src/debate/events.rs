//! Debate events for rendering sinks.

use crate::error::GenerationError;

use super::{Message, Side};

/// Events emitted by the [`DebateController`](super::DebateController).
#[derive(Debug, Clone)]
pub enum DebateEvent {
    /// The debate has (re)started with the given turn limit.
    Started {
        /// Number of generated turns allowed.
        max_turns: u32,
    },

    /// A generation is starting for the active side.
    TurnStarted {
        /// Side whose reply is being generated.
        side: Side,
        /// 1-based number of the turn being generated.
        turn: u32,
    },

    /// A message was appended to the transcript.
    MessageAppended(Message),

    /// A generation failed. Depending on the failure policy the failure is
    /// also rendered as a transcript message.
    TurnFailed {
        /// Side whose generation failed.
        side: Side,
        /// The failure.
        error: GenerationError,
    },

    /// The debate has stopped.
    Stopped {
        /// Reason for stopping.
        reason: StopReason,
    },
}

/// Reason for a debate stopping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Stop was requested explicitly.
    UserRequested,
    /// The turn limit was reached.
    Completed,
    /// A generation failed under the halting policy.
    Failed(GenerationError),
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserRequested => write!(f, "User requested stop"),
            Self::Completed => write!(f, "Turn limit reached"),
            Self::Failed(err) => write!(f, "Error: {}", err.detail),
        }
    }
}
