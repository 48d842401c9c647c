//! Two-participant debates between scripted and remote LLM speakers.
//!
//! A [`DebateController`] owns the debate state and exposes three
//! operations: [`start`](DebateController::start),
//! [`advance`](DebateController::advance) and
//! [`stop`](DebateController::stop). Each participant's reply comes from a
//! [`ResponseProvider`] chosen per participant, either the scripted
//! [`MockProvider`](backends::mock::MockProvider) or the
//! [`Gemini`](backends::gemini::Gemini) client.
//!
//! # Example
//!
//! ```no_run
//! use debate::backends::{gemini::GeminiConfig, mock::MockConfig};
//! use debate::config::DebateSettings;
//! use debate::{DebateController, ProviderRegistry};
//!
//! # async fn run() -> Result<(), debate::error::DebateError> {
//! let settings = DebateSettings {
//!     topic: "Remote work".to_string(),
//!     ..DebateSettings::default()
//! };
//! let providers = ProviderRegistry::with_defaults(GeminiConfig::default(), MockConfig::default())?;
//! let mut controller = DebateController::new(settings, providers);
//! controller.start();
//! while controller.is_running() {
//!     controller.advance().await;
//! }
//! for message in controller.transcript() {
//!     println!("{}: {}", message.display_name, message.body);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod chat;
pub mod config;
pub mod debate;
pub mod error;
pub mod provider;

#[cfg(feature = "api")]
pub mod api;

pub use debate::{DebateController, DebateEvent, DebateSnapshot, Message, Phase, Side, TurnOutcome};
pub use provider::{ProviderKind, ProviderRegistry, ResponseProvider, TurnRequest};
