use serde::Serialize;

use super::{Message, Side};

/// Lifecycle of a debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Never started.
    #[default]
    Idle,
    /// Accepting turns.
    Live,
    /// Stopped by request, by the turn limit or by a failure. Can be restarted.
    Stopped,
}

/// Mutable debate record, owned by the controller.
#[derive(Debug, Clone)]
pub(crate) struct DebateState {
    pub phase: Phase,
    pub turn: u32,
    pub max_turns: u32,
    pub active: Side,
    /// A generation is in flight.
    pub pending: bool,
    pub transcript: Vec<Message>,
}

impl DebateState {
    pub fn new(max_turns: u32) -> Self {
        Self {
            phase: Phase::Idle,
            turn: 0,
            max_turns,
            active: Side::P1,
            pending: false,
            transcript: Vec::new(),
        }
    }

    pub fn reset(&mut self, max_turns: u32) {
        self.turn = 0;
        self.max_turns = max_turns;
        self.active = Side::P1;
        self.pending = false;
        self.transcript.clear();
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Live
    }

    pub fn limit_reached(&self) -> bool {
        self.turn >= self.max_turns
    }

    pub fn snapshot(&self) -> DebateSnapshot {
        DebateSnapshot {
            phase: self.phase,
            running: self.is_running(),
            turn: self.turn,
            max_turns: self.max_turns,
            active: self.active,
            pending: self.pending,
            transcript: self.transcript.clone(),
        }
    }
}

/// Read-only view of a debate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebateSnapshot {
    pub phase: Phase,
    pub running: bool,
    pub turn: u32,
    pub max_turns: u32,
    pub active: Side,
    pub pending: bool,
    pub transcript: Vec<Message>,
}
