//! Turn controller for two-participant debates.

use std::time::Duration;

use serde::Deserialize;
use tokio::sync::{mpsc, watch};

use crate::config::{ConfigSource, DebateSettings, TurnLimit};
use crate::error::{FailureKind, GenerationError};
use crate::provider::{ProviderRegistry, TurnRequest};

use super::events::{DebateEvent, StopReason};
use super::state::{DebateSnapshot, DebateState, Phase};
use super::stop::StopSignal;
use super::{Message, Side};

/// Upper bound on a single generation unless configured otherwise.
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(60);

/// What the controller does with a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Append the failure text as the participant's message and keep going.
    #[default]
    RenderInTranscript,
    /// Stop the debate without appending anything.
    Halt,
}

/// Result of one [`DebateController::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The debate is not live; nothing happened.
    Ignored,
    /// The turn limit was already reached; the debate is now stopped.
    LimitReached,
    /// A message was appended (a generated reply or a rendered failure).
    Appended(Message),
    /// The generation failed under [`FailurePolicy::Halt`].
    Halted(GenerationError),
    /// The stop signal fired; any in-flight reply was discarded.
    Cancelled,
}

/// Owns the debate state and drives start/advance/stop transitions.
pub struct DebateController<C: ConfigSource> {
    /// Where settings are read from at the start of each turn.
    config: C,
    /// Provider implementations by kind.
    providers: ProviderRegistry,
    /// The debate record.
    state: DebateState,
    /// Handling of failed generations.
    policy: FailurePolicy,
    /// Upper bound on one generation.
    turn_timeout: Duration,
    /// External stop handle.
    stop_signal: StopSignal,
    /// Event sender for rendering sinks.
    event_sender: Option<mpsc::UnboundedSender<DebateEvent>>,
    /// Latest snapshot for observers.
    snapshots: watch::Sender<DebateSnapshot>,
}

impl<C: ConfigSource> DebateController<C> {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(config: C, providers: ProviderRegistry) -> Self {
        let state = DebateState::new(config.snapshot().turn_limit.get());
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            config,
            providers,
            state,
            policy: FailurePolicy::default(),
            turn_timeout: DEFAULT_TURN_TIMEOUT,
            stop_signal: StopSignal::default(),
            event_sender: None,
            snapshots,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }

    /// Sets the event sender for receiving debate events.
    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<DebateEvent>) {
        self.event_sender = Some(sender);
    }

    /// Creates an event receiver channel.
    #[must_use]
    pub fn create_event_channel(&mut self) -> mpsc::UnboundedReceiver<DebateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.event_sender = Some(tx);
        rx
    }

    /// Receiver that always holds the latest snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DebateSnapshot> {
        self.snapshots.subscribe()
    }

    /// Handle that stops the debate and cancels an in-flight generation.
    #[must_use]
    pub fn stop_signal(&self) -> StopSignal {
        self.stop_signal.clone()
    }

    #[must_use]
    pub fn config(&self) -> &C {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.state.turn
    }

    #[must_use]
    pub const fn max_turns(&self) -> u32 {
        self.state.max_turns
    }

    /// Side whose reply the next advance generates.
    #[must_use]
    pub const fn active(&self) -> Side {
        self.state.active
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.state.transcript
    }

    #[must_use]
    pub fn snapshot(&self) -> DebateSnapshot {
        self.state.snapshot()
    }

    /// Starts (or restarts) the debate.
    ///
    /// Resets the state, reads the turn limit and seeds the transcript with
    /// the two scripted greetings. Returns `false` if the debate is already
    /// live.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }

        let settings = self.config.snapshot();
        let max_turns = settings.turn_limit.get();
        self.state.reset(max_turns);
        self.state.phase = Phase::Live;
        self.stop_signal.rearm();

        log::info!("Debate started with a limit of {max_turns} turns");
        self.emit_event(DebateEvent::Started { max_turns });

        for side in [Side::P1, Side::P2] {
            let name = settings.participant(side).display_name(side);
            self.append(Message::new(side, name, side.greeting()));
        }
        self.publish();
        true
    }

    /// Generates one turn for the active side.
    ///
    /// Only acts while live. Appends the reply, moves to the next turn and
    /// swaps the active side; stops once the turn limit is reached.
    pub async fn advance(&mut self) -> TurnOutcome {
        if !self.state.is_running() {
            return TurnOutcome::Ignored;
        }
        if self.state.limit_reached() {
            self.halt(StopReason::Completed);
            return TurnOutcome::LimitReached;
        }

        let token = self.stop_signal.token();
        if token.is_cancelled() {
            self.halt(StopReason::UserRequested);
            return TurnOutcome::Cancelled;
        }

        let settings = self.config.snapshot();
        let side = self.state.active;
        let turn = self.state.turn + 1;

        self.state.pending = true;
        log::debug!("Generating turn {turn} for {side}");
        self.emit_event(DebateEvent::TurnStarted { side, turn });
        self.publish();

        let generated = tokio::select! {
            _ = token.cancelled() => None,
            result = self.generate(side, &settings) => Some(result),
        };
        self.state.pending = false;

        let Some(result) = generated else {
            log::info!("Turn {turn} cancelled by stop request");
            self.halt(StopReason::UserRequested);
            return TurnOutcome::Cancelled;
        };

        let body = match result {
            Ok(text) => text,
            Err(error) => {
                log::warn!("Turn {turn} for {side} failed: {error}");
                self.emit_event(DebateEvent::TurnFailed {
                    side,
                    error: error.clone(),
                });
                match self.policy {
                    FailurePolicy::RenderInTranscript => error.transcript_text(),
                    FailurePolicy::Halt => {
                        self.halt(StopReason::Failed(error.clone()));
                        return TurnOutcome::Halted(error);
                    }
                }
            }
        };

        let message = Message::new(side, settings.participant(side).display_name(side), body);
        self.append(message.clone());
        self.state.turn = turn;
        self.state.active = side.other();

        if self.state.limit_reached() {
            self.halt(StopReason::Completed);
        } else {
            self.publish();
        }
        TurnOutcome::Appended(message)
    }

    /// Stops the debate. Valid from any phase.
    pub fn stop(&mut self) {
        if self.state.phase == Phase::Stopped {
            return;
        }
        self.halt(StopReason::UserRequested);
    }

    /// Changes the turn limit, stopping a live debate that already reached it.
    pub fn set_turn_limit(&mut self, limit: TurnLimit) {
        self.state.max_turns = limit.get();
        if self.state.is_running() && self.state.limit_reached() {
            self.halt(StopReason::Completed);
        } else {
            self.publish();
        }
    }

    async fn generate(
        &self,
        side: Side,
        settings: &DebateSettings,
    ) -> Result<String, GenerationError> {
        let kind = settings.participant(side).provider;
        let Some(provider) = self.providers.get(kind) else {
            return Err(GenerationError::new(
                FailureKind::ProviderUnavailable,
                format!("No provider registered for {kind}"),
            ));
        };

        let request = TurnRequest::new(side, settings, &self.state.transcript);
        match tokio::time::timeout(self.turn_timeout, provider.generate(&request)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::new(
                FailureKind::Timeout,
                format!(
                    "{} did not answer within {}s",
                    provider.name(),
                    self.turn_timeout.as_secs()
                ),
            )),
        }
    }

    fn append(&mut self, message: Message) {
        self.state.transcript.push(message.clone());
        self.emit_event(DebateEvent::MessageAppended(message));
    }

    fn halt(&mut self, reason: StopReason) {
        self.state.phase = Phase::Stopped;
        self.state.pending = false;
        log::info!(
            "Debate stopped after {} turns: {reason}",
            self.state.turn
        );
        self.emit_event(DebateEvent::Stopped { reason });
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }

    /// Emits an event to listeners.
    fn emit_event(&self, event: DebateEvent) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event);
        }
    }
}

impl<C: ConfigSource> std::fmt::Debug for DebateController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebateController")
            .field("phase", &self.state.phase)
            .field("turn", &self.state.turn)
            .field("max_turns", &self.state.max_turns)
            .field("active", &self.state.active)
            .field("transcript_len", &self.state.transcript.len())
            .field("providers", &self.providers)
            .finish()
    }
}
