use std::time::Duration;

use serde::Deserialize;

use debate::debate::{FailurePolicy, DEFAULT_TURN_TIMEOUT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub turn_timeout_seconds: u64,
    pub failure_policy: FailurePolicy,
}

impl ControllerConfig {
    pub fn turn_timeout(&self) -> Duration {
        Duration::from_secs(self.turn_timeout_seconds.max(1))
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            turn_timeout_seconds: DEFAULT_TURN_TIMEOUT.as_secs(),
            failure_policy: FailurePolicy::default(),
        }
    }
}
