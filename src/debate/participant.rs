//! Debate sides.

use serde::{Deserialize, Serialize};

/// One of the two debate participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    P1,
    P2,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }

    /// Fixed stance used by scripted replies.
    #[must_use]
    pub const fn stance(self) -> &'static str {
        match self {
            Self::P1 => "optimistic",
            Self::P2 => "skeptical",
        }
    }

    /// Name shown when the participant has no configured name.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::P1 => "Agent 1",
            Self::P2 => "Agent 2",
        }
    }

    /// Scripted opener emitted when a debate starts.
    #[must_use]
    pub const fn greeting(self) -> &'static str {
        match self {
            Self::P1 => "Hello! Ready to debate.",
            Self::P2 => "Hi there. Let us begin.",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}
