use crate::debate::Side;

use super::DebateSettings;

/// Context block sent ahead of the conversation to remote providers.
pub fn build_prompt(side: Side, settings: &DebateSettings) -> String {
    let topic = settings.topic.trim();
    let global = settings.global_instruction.trim();
    let own = settings.participant(side).instruction.trim();

    let mut lines = vec![
        format!(
            "Topic: {}",
            if topic.is_empty() { "Open debate" } else { topic }
        ),
        format!("Tone: {}", settings.tone),
    ];
    if !global.is_empty() {
        lines.push(format!("Global instructions: {global}"));
    }
    if !own.is_empty() {
        lines.push(format!("Your side: {own}"));
    }
    lines.join("\n")
}
