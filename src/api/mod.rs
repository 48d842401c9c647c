//! HTTP surface exposing the controller's start/advance/stop operations and
//! the debate snapshot.

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};
use tower_http::cors::CorsLayer;

use crate::config::SharedSettings;
use crate::debate::{DebateController, DebateSnapshot, StopSignal};
use crate::error::DebateError;

pub use types::AdvanceResponse;

/// State shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub controller: Arc<Mutex<DebateController<SharedSettings>>>,
    pub settings: SharedSettings,
    pub stop_signal: StopSignal,
    pub snapshots: watch::Receiver<DebateSnapshot>,
}

impl ServerState {
    pub fn new(controller: DebateController<SharedSettings>) -> Self {
        Self {
            settings: controller.config().clone(),
            stop_signal: controller.stop_signal(),
            snapshots: controller.subscribe(),
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/debate", get(handlers::get_debate))
        .route("/debate/start", post(handlers::start_debate))
        .route("/debate/advance", post(handlers::advance_debate))
        .route("/debate/stop", post(handlers::stop_debate))
        .route("/debate/settings", put(handlers::update_settings))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves the debate API until the process exits.
pub async fn serve(state: ServerState, addr: &str) -> Result<(), DebateError> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("Debate API listening on {}", listener.local_addr()?);
    serve_on(listener, state).await
}

pub async fn serve_on(listener: TcpListener, state: ServerState) -> Result<(), DebateError> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
