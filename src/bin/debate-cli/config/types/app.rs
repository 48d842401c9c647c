use serde::Deserialize;

use debate::backends::gemini::GeminiConfig;
use debate::backends::mock::MockConfig;
use debate::config::DebateSettings;

use super::{ControllerConfig, LoggingConfig, ServerConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub debate: DebateSettings,
    pub generation: GeminiConfig,
    pub mock: MockConfig,
    pub controller: ControllerConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}
