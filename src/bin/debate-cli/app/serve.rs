use debate::api::{serve, ServerState};
use debate::config::SharedSettings;
use debate::DebateController;

use super::render::spawn_renderer;

/// Serves the debate API; transcript lines are echoed to stdout.
pub async fn run_server(
    mut controller: DebateController<SharedSettings>,
    bind: &str,
) -> anyhow::Result<()> {
    let _renderer = spawn_renderer(controller.create_event_channel());
    let state = ServerState::new(controller);
    eprintln!("Debate API on http://{bind}/debate");
    serve(state, bind).await?;
    Ok(())
}
