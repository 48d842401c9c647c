use crate::debate::{Message, Side};

use super::message::{ChatMessage, ChatRole};

/// Re-maps a debate transcript into the conversation seen by `side`.
///
/// Each participant sees its own turns as assistant turns and the opponent's
/// turns as user turns.
pub fn conversation_for(side: Side, transcript: &[Message]) -> Vec<ChatMessage> {
    transcript
        .iter()
        .map(|msg| ChatMessage {
            role: if msg.side == side {
                ChatRole::Assistant
            } else {
                ChatRole::User
            },
            content: msg.body.clone(),
        })
        .collect()
}
