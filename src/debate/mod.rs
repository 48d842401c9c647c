//! Two-participant debate: state, turn controller and events.
//!
//! A debate starts with two scripted greetings, then alternates generated
//! turns between [`Side::P1`] and [`Side::P2`] until the turn limit is reached
//! or it is stopped. Each turn is one discrete [`DebateController::advance`]
//! call; the controller never schedules turns by itself.

mod controller;
mod events;
mod message;
mod participant;
mod state;
mod stop;

pub use controller::{DebateController, FailurePolicy, TurnOutcome, DEFAULT_TURN_TIMEOUT};
pub use events::{DebateEvent, StopReason};
pub use message::Message;
pub use participant::Side;
pub use state::{DebateSnapshot, Phase};
pub use stop::StopSignal;

#[cfg(test)]
mod tests;
