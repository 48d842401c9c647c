#[path = "handlers/debate.rs"]
mod debate;

#[path = "handlers/helpers.rs"]
mod helpers;

pub use debate::{advance_debate, get_debate, start_debate, stop_debate, update_settings};
