mod history;
mod message;

pub use history::conversation_for;
pub use message::{ChatMessage, ChatMessageBuilder, ChatRole};
