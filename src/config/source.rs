use std::sync::Arc;

use parking_lot::RwLock;

use super::DebateSettings;

/// Supplies a fresh settings snapshot each time a turn is computed.
pub trait ConfigSource: Send + Sync {
    fn snapshot(&self) -> DebateSettings;
}

impl ConfigSource for DebateSettings {
    fn snapshot(&self) -> DebateSettings {
        self.clone()
    }
}

/// Settings shared between the controller and whoever edits them.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<DebateSettings>>,
}

impl SharedSettings {
    pub fn new(settings: DebateSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    pub fn replace(&self, settings: DebateSettings) {
        *self.inner.write() = settings;
    }

    pub fn update(&self, edit: impl FnOnce(&mut DebateSettings)) {
        edit(&mut self.inner.write());
    }
}

impl ConfigSource for SharedSettings {
    fn snapshot(&self) -> DebateSettings {
        self.inner.read().clone()
    }
}
