//! Built-in response providers.

pub mod gemini;
pub mod mock;
