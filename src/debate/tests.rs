use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::backends::gemini::{Gemini, GeminiConfig};
use crate::backends::mock::{MockConfig, MockProvider};
use crate::config::{DebateSettings, ParticipantConfig, SharedSettings, TurnLimit};
use crate::error::{FailureKind, GenerationError};
use crate::provider::{ProviderKind, ProviderRegistry, ResponseProvider, TurnRequest};

/// Replies with the side and the transcript length it was shown.
struct EchoProvider;

#[async_trait]
impl ResponseProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(&self, request: &TurnRequest<'_>) -> Result<String, GenerationError> {
        Ok(format!("{} saw {}", request.side, request.transcript.len()))
    }
}

/// Never answers.
struct HangingProvider;

#[async_trait]
impl ResponseProvider for HangingProvider {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn generate(&self, _request: &TurnRequest<'_>) -> Result<String, GenerationError> {
        std::future::pending().await
    }
}

fn mock_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(
        ProviderKind::Mock,
        Arc::new(MockProvider::new(MockConfig {
            seed: Some(11),
            ..MockConfig::default()
        })),
    );
    registry
}

fn registry_with(gemini_slot: Arc<dyn ResponseProvider>) -> ProviderRegistry {
    let mut registry = mock_registry();
    registry.register(ProviderKind::Gemini, gemini_slot);
    registry
}

fn settings(limit: i64) -> DebateSettings {
    DebateSettings {
        topic: "Urban farming".to_string(),
        turn_limit: TurnLimit::from_count(limit),
        ..DebateSettings::default()
    }
}

fn remote_p2(limit: i64) -> DebateSettings {
    let mut settings = settings(limit);
    settings.participants.p2 = ParticipantConfig::gemini("Gem", Some("key"));
    settings
}

fn appended(outcome: TurnOutcome) -> Message {
    match outcome {
        TurnOutcome::Appended(message) => message,
        other => panic!("expected an appended message, got {other:?}"),
    }
}

fn sides(transcript: &[Message]) -> Vec<Side> {
    transcript.iter().map(|m| m.side).collect()
}

#[test]
fn start_seeds_two_greetings() {
    let mut controller = DebateController::new(settings(4), mock_registry());
    assert_eq!(controller.phase(), Phase::Idle);

    assert!(controller.start());

    let transcript = controller.transcript();
    assert_eq!(sides(transcript), vec![Side::P1, Side::P2]);
    assert_eq!(transcript[0].body, "Hello! Ready to debate.");
    assert_eq!(transcript[0].display_name, "Agent 1");
    assert_eq!(transcript[1].body, "Hi there. Let us begin.");
    assert_eq!(transcript[1].display_name, "Agent 2");
    assert_eq!(controller.turn(), 0);
    assert_eq!(controller.active(), Side::P1);
    assert!(controller.is_running());
}

#[test]
fn start_while_live_is_rejected() {
    let mut controller = DebateController::new(settings(4), mock_registry());
    assert!(controller.start());
    assert!(!controller.start());
    assert_eq!(controller.transcript().len(), 2);
}

#[test]
fn unusable_turn_limit_falls_back_to_twelve() {
    let mut settings = settings(1);
    settings.turn_limit = TurnLimit::parse("0");
    let mut controller = DebateController::new(settings, mock_registry());
    controller.start();
    assert_eq!(controller.max_turns(), 12);
}

#[tokio::test]
async fn two_turn_debate_walkthrough() {
    let mut controller = DebateController::new(settings(2), mock_registry());
    controller.start();
    assert_eq!(controller.transcript().len(), 2);

    let outcome = controller.advance().await;
    assert!(matches!(outcome, TurnOutcome::Appended(ref m) if m.side == Side::P1));
    assert_eq!(controller.turn(), 1);
    assert_eq!(controller.active(), Side::P2);
    assert_eq!(controller.transcript().len(), 3);
    assert_eq!(controller.phase(), Phase::Live);

    controller.advance().await;
    assert_eq!(controller.turn(), 2);
    assert_eq!(controller.active(), Side::P1);
    assert_eq!(controller.transcript().len(), 4);
    assert_eq!(controller.phase(), Phase::Stopped);
    assert!(!controller.is_running());
}

#[tokio::test]
async fn turns_alternate_and_never_exceed_limit() {
    let mut controller = DebateController::new(settings(5), mock_registry());
    controller.start();

    for expected in 1..=5 {
        let speaker = controller.active();
        controller.advance().await;
        assert_eq!(controller.turn(), expected);
        let last = controller.transcript().last().unwrap();
        assert_eq!(last.side, speaker);
        let want = if expected % 2 == 1 { Side::P1 } else { Side::P2 };
        assert_eq!(speaker, want);
    }

    assert_eq!(controller.phase(), Phase::Stopped);
    assert_eq!(controller.advance().await, TurnOutcome::Ignored);
    assert_eq!(controller.turn(), 5);
    assert_eq!(controller.transcript().len(), 7);
}

#[tokio::test]
async fn advance_is_ignored_unless_live() {
    let mut controller = DebateController::new(settings(3), mock_registry());
    assert_eq!(controller.advance().await, TurnOutcome::Ignored);

    controller.start();
    controller.stop();
    assert_eq!(controller.phase(), Phase::Stopped);
    assert_eq!(controller.advance().await, TurnOutcome::Ignored);
    assert_eq!(controller.transcript().len(), 2);
}

#[tokio::test]
async fn mock_replies_carry_topic_and_stance() {
    let mut controller = DebateController::new(settings(2), mock_registry());
    controller.start();
    controller.advance().await;
    controller.advance().await;

    let transcript = controller.transcript();
    assert!(transcript[2].body.contains("Urban farming"));
    assert!(transcript[2].body.contains("optimistic"));
    assert!(transcript[3].body.contains("Urban farming"));
    assert!(transcript[3].body.contains("skeptical"));
}

#[tokio::test]
async fn mixed_providers_use_their_own_strategy() {
    let mut controller =
        DebateController::new(remote_p2(2), registry_with(Arc::new(EchoProvider)));
    controller.start();
    controller.advance().await;
    controller.advance().await;

    let transcript = controller.transcript();
    assert!(transcript[2].body.contains("optimistic"));
    assert_eq!(transcript[3].body, "P2 saw 3");
    assert_eq!(transcript[3].display_name, "Gem");
}

#[tokio::test]
async fn missing_key_is_rendered_as_a_message() {
    let gemini = Gemini::new(GeminiConfig {
        endpoint: "http://127.0.0.1:1".to_string(),
        ..GeminiConfig::default()
    })
    .unwrap();
    let mut settings = settings(2);
    settings.participants.p1 = ParticipantConfig::gemini("", None);
    let mut controller = DebateController::new(settings, registry_with(Arc::new(gemini)));
    let mut events = controller.create_event_channel();
    controller.start();

    let outcome = controller.advance().await;

    let message = appended(outcome);
    assert_eq!(message.body, "Error: Missing Gemini API key.");
    assert_eq!(controller.turn(), 1);
    assert!(controller.is_running());

    let mut failed = None;
    while let Ok(event) = events.try_recv() {
        if let DebateEvent::TurnFailed { error, .. } = event {
            failed = Some(error);
        }
    }
    assert_eq!(failed.unwrap().kind, FailureKind::MissingCredential);
}

#[tokio::test]
async fn halt_policy_stops_without_appending() {
    let mut settings = settings(4);
    settings.participants.p1 = ParticipantConfig::gemini("Gem", None);
    let gemini = Gemini::new(GeminiConfig::default()).unwrap();
    let mut controller = DebateController::new(settings, registry_with(Arc::new(gemini)))
        .with_policy(FailurePolicy::Halt);
    controller.start();

    let outcome = controller.advance().await;

    assert!(
        matches!(outcome, TurnOutcome::Halted(ref e) if e.kind == FailureKind::MissingCredential)
    );
    assert_eq!(controller.phase(), Phase::Stopped);
    assert_eq!(controller.turn(), 0);
    assert_eq!(controller.transcript().len(), 2);
}

#[tokio::test]
async fn unregistered_provider_is_reported() {
    let mut controller = DebateController::new(remote_p2(2), mock_registry());
    controller.start();
    controller.advance().await;

    let outcome = controller.advance().await;

    let message = appended(outcome);
    assert_eq!(message.body, "Error: No provider registered for gemini");
}

#[tokio::test(start_paused = true)]
async fn hung_generation_times_out() {
    let mut controller =
        DebateController::new(remote_p2(4), registry_with(Arc::new(HangingProvider)))
            .with_turn_timeout(Duration::from_secs(5));
    controller.start();
    controller.advance().await;

    let outcome = controller.advance().await;

    let message = appended(outcome);
    assert_eq!(message.body, "Error: hanging did not answer within 5s");
    assert_eq!(controller.turn(), 2);
    assert!(!controller.snapshot().pending);
}

#[tokio::test(start_paused = true)]
async fn stop_signal_cancels_in_flight_generation() {
    let mut controller =
        DebateController::new(remote_p2(4), registry_with(Arc::new(HangingProvider)));
    controller.start();
    controller.advance().await;

    let signal = controller.stop_signal();
    let mut snapshots = controller.subscribe();
    tokio::spawn(async move {
        loop {
            let pending = snapshots.borrow_and_update().pending;
            if pending {
                break;
            }
            if snapshots.changed().await.is_err() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        signal.trigger();
    });

    let outcome = controller.advance().await;

    assert_eq!(outcome, TurnOutcome::Cancelled);
    assert_eq!(controller.phase(), Phase::Stopped);
    assert_eq!(controller.turn(), 1);
    assert_eq!(controller.transcript().len(), 3);
}

#[tokio::test]
async fn stop_signal_between_turns_stops_on_next_advance() {
    let mut controller = DebateController::new(settings(4), mock_registry());
    controller.start();
    controller.stop_signal().trigger();

    assert_eq!(controller.advance().await, TurnOutcome::Cancelled);
    assert_eq!(controller.phase(), Phase::Stopped);

    assert!(controller.start());
    assert!(matches!(
        controller.advance().await,
        TurnOutcome::Appended(_)
    ));
}

#[tokio::test]
async fn settings_edits_apply_to_the_next_turn() {
    let shared = SharedSettings::new(settings(4));
    let mut controller =
        DebateController::new(shared.clone(), registry_with(Arc::new(EchoProvider)));
    controller.start();
    controller.advance().await;

    shared.update(|s| {
        s.participants.p2 = ParticipantConfig::gemini("Renamed", Some("k"));
    });
    controller.advance().await;

    let last = controller.transcript().last().unwrap();
    assert_eq!(last.display_name, "Renamed");
    assert_eq!(last.body, "P2 saw 3");
}

#[tokio::test]
async fn lowering_the_limit_stops_a_live_debate() {
    let mut controller = DebateController::new(settings(6), mock_registry());
    controller.start();
    controller.advance().await;
    controller.advance().await;

    controller.set_turn_limit(TurnLimit::from_count(2));

    assert_eq!(controller.phase(), Phase::Stopped);
    assert_eq!(controller.max_turns(), 2);
    assert_eq!(controller.advance().await, TurnOutcome::Ignored);
}

#[tokio::test]
async fn restart_resets_transcript_and_turns() {
    let mut controller = DebateController::new(settings(1), mock_registry());
    controller.start();
    controller.advance().await;
    assert_eq!(controller.phase(), Phase::Stopped);

    controller.start();

    assert_eq!(controller.turn(), 0);
    assert_eq!(controller.active(), Side::P1);
    assert_eq!(controller.transcript().len(), 2);
    assert_eq!(controller.phase(), Phase::Live);
}

#[tokio::test]
async fn events_follow_the_turn_sequence() {
    let mut controller = DebateController::new(settings(1), mock_registry());
    let mut events = controller.create_event_channel();
    controller.start();
    controller.advance().await;

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(match event {
            DebateEvent::Started { max_turns } => format!("started:{max_turns}"),
            DebateEvent::TurnStarted { side, turn } => format!("turn:{side}:{turn}"),
            DebateEvent::MessageAppended(m) => format!("message:{}", m.side),
            DebateEvent::TurnFailed { side, .. } => format!("failed:{side}"),
            DebateEvent::Stopped { reason } => format!("stopped:{reason}"),
        });
    }
    assert_eq!(
        seen,
        vec![
            "started:1",
            "message:P1",
            "message:P2",
            "turn:P1:1",
            "message:P1",
            "stopped:Turn limit reached",
        ]
    );
}

#[tokio::test]
async fn snapshots_track_progress() {
    let mut controller = DebateController::new(settings(3), mock_registry());
    let snapshots = controller.subscribe();
    controller.start();
    controller.advance().await;

    let latest = snapshots.borrow().clone();
    assert_eq!(latest, controller.snapshot());
    assert_eq!(latest.turn, 1);
    assert_eq!(latest.active, Side::P2);
    assert!(latest.running);
    assert!(!latest.pending);
}
