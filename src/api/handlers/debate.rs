use axum::{extract::State, http::StatusCode, Json};

use super::helpers::{conflict, ApiResult};
use crate::api::types::AdvanceResponse;
use crate::api::ServerState;
use crate::config::{ConfigSource, DebateSettings};
use crate::debate::DebateSnapshot;

pub async fn get_debate(State(state): State<ServerState>) -> Json<DebateSnapshot> {
    Json(state.snapshots.borrow().clone())
}

pub async fn start_debate(State(state): State<ServerState>) -> ApiResult<Json<DebateSnapshot>> {
    let mut controller = state.controller.lock().await;
    if !controller.start() {
        return Err(conflict("Debate is already live"));
    }
    Ok(Json(controller.snapshot()))
}

/// Runs one turn. A trigger that arrives while a turn is in flight is
/// rejected, never queued.
pub async fn advance_debate(
    State(state): State<ServerState>,
) -> ApiResult<Json<AdvanceResponse>> {
    let Ok(mut controller) = state.controller.try_lock() else {
        return Err(conflict("A turn is already pending"));
    };
    let outcome = controller.advance().await;
    Ok(Json(AdvanceResponse::new(outcome, controller.snapshot())))
}

pub async fn stop_debate(State(state): State<ServerState>) -> Json<DebateSnapshot> {
    state.stop_signal.trigger();
    let mut controller = state.controller.lock().await;
    controller.stop();
    Json(controller.snapshot())
}

/// Replaces the settings. Participant and prompt changes apply to the next
/// turn. The turn limit applies immediately, or once the in-flight turn
/// releases the controller.
pub async fn update_settings(
    State(state): State<ServerState>,
    Json(settings): Json<DebateSettings>,
) -> StatusCode {
    state.settings.replace(settings);
    match state.controller.try_lock() {
        Ok(mut controller) => controller.set_turn_limit(state.settings.snapshot().turn_limit),
        Err(_) => {
            let controller = state.controller.clone();
            let settings = state.settings.clone();
            tokio::spawn(async move {
                let mut controller = controller.lock().await;
                // Newest limit at the time the lock is acquired.
                controller.set_turn_limit(settings.snapshot().turn_limit);
            });
        }
    }
    StatusCode::NO_CONTENT
}
