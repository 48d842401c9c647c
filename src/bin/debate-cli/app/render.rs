use chrono::Local;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use debate::{DebateEvent, Message};

/// Prints debate events to stdout until the controller is dropped.
pub fn spawn_renderer(mut events: UnboundedReceiver<DebateEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if let Some(line) = render_event(&event) {
                println!("{line}");
            }
        }
    })
}

fn render_event(event: &DebateEvent) -> Option<String> {
    match event {
        DebateEvent::Started { max_turns } => Some(format!("-- Live ({max_turns} turns) --")),
        DebateEvent::MessageAppended(message) => Some(format_message(message)),
        DebateEvent::Stopped { reason } => Some(format!("-- Stopped: {reason} --")),
        DebateEvent::TurnStarted { .. } | DebateEvent::TurnFailed { .. } => None,
    }
}

fn format_message(message: &Message) -> String {
    format!(
        "[{}] {}: {}",
        message.timestamp.with_timezone(&Local).format("%H:%M"),
        message.display_name,
        message.body
    )
}
