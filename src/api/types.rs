use serde::Serialize;

use crate::debate::{DebateSnapshot, TurnOutcome};
use crate::error::GenerationError;

/// Body returned by `POST /debate/advance`.
#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    /// `ignored`, `limit_reached`, `appended`, `halted` or `cancelled`.
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GenerationError>,
    pub snapshot: DebateSnapshot,
}

impl AdvanceResponse {
    pub fn new(outcome: TurnOutcome, snapshot: DebateSnapshot) -> Self {
        let (outcome, error) = match outcome {
            TurnOutcome::Ignored => ("ignored", None),
            TurnOutcome::LimitReached => ("limit_reached", None),
            TurnOutcome::Appended(_) => ("appended", None),
            TurnOutcome::Halted(error) => ("halted", Some(error)),
            TurnOutcome::Cancelled => ("cancelled", None),
        };
        Self {
            outcome,
            error,
            snapshot,
        }
    }
}
