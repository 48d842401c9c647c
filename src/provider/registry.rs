use std::collections::HashMap;
use std::sync::Arc;

use crate::backends::gemini::{Gemini, GeminiConfig};
use crate::backends::mock::{MockConfig, MockProvider};
use crate::error::DebateError;

use super::{ProviderKind, ResponseProvider};

/// Provider implementations keyed by [`ProviderKind`].
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn ResponseProvider>>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in mock and Gemini providers.
    pub fn with_defaults(gemini: GeminiConfig, mock: MockConfig) -> Result<Self, DebateError> {
        let mut registry = Self::new();
        registry.register(ProviderKind::Mock, Arc::new(MockProvider::new(mock)));
        registry.register(ProviderKind::Gemini, Arc::new(Gemini::new(gemini)?));
        Ok(registry)
    }

    /// Registers (or replaces) the implementation for `kind`.
    pub fn register(&mut self, kind: ProviderKind, provider: Arc<dyn ResponseProvider>) {
        self.providers.insert(kind, provider);
    }

    #[must_use]
    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn ResponseProvider>> {
        self.providers.get(&kind).cloned()
    }

    #[must_use]
    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<String> = self.providers.keys().map(ToString::to_string).collect();
        names.sort();
        f.debug_struct("ProviderRegistry")
            .field("providers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_both_providers() {
        let registry =
            ProviderRegistry::with_defaults(GeminiConfig::default(), MockConfig::default())
                .unwrap();
        assert!(registry.contains(ProviderKind::Mock));
        assert!(registry.contains(ProviderKind::Gemini));
        assert_eq!(registry.get(ProviderKind::Gemini).unwrap().name(), "gemini");
    }

    #[test]
    fn empty_registry_has_nothing() {
        assert!(ProviderRegistry::new().get(ProviderKind::Mock).is_none());
    }
}
