//! Provider trait and registry

mod trait_def;

pub use trait_def::Provider;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::{GeminiProvider, ZaiProvider};

/// Registry of provider implementations, keyed by provider ID.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under the given ID. Returns `self` for chaining.
    pub fn register<P: Provider + 'static>(self, id: impl Into<String>, provider: P) -> Self {
        self.register_arc(id, Arc::new(provider))
    }

    pub fn register_arc(mut self, id: impl Into<String>, provider: Arc<dyn Provider>) -> Self {
        self.providers.insert(id.into(), provider);
        self
    }

    /// Look up a provider by ID.
    pub fn get_provider(&self, id: &str) -> Result<Arc<dyn Provider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(id.to_string()))
    }

    /// List all registered provider IDs, sorted.
    pub fn list_providers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Every provider whose API key is set in the environment.
    pub fn from_env() -> Self {
        let mut registry = Self::new();
        match GeminiProvider::from_env() {
            Ok(p) => registry = registry.register("gemini", p),
            Err(e) => tracing::debug!(error = %e, "gemini provider not configured"),
        }
        match ZaiProvider::from_env() {
            Ok(p) => registry = registry.register("zai", p),
            Err(e) => tracing::debug!(error = %e, "zai provider not configured"),
        }
        match ZaiProvider::openai_from_env() {
            Ok(p) => registry = registry.register("openai", p),
            Err(e) => tracing::debug!(error = %e, "openai provider not configured"),
        }
        registry
    }
}
