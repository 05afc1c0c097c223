//! Provider selection from the environment.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::providers::gemini::GeminiConfig;
use crate::providers::zai::ZaiConfig;
use crate::providers::{GeminiProvider, ZaiProvider};

pub const PROVIDER_ENV: &str = "HEXVIBE_PROVIDER";
pub const MODEL_ENV: &str = "HEXVIBE_MODEL";
pub const TIMEOUT_ENV: &str = "HEXVIBE_AI_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    Zai,
    OpenAI,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Gemini, ProviderKind::Zai, ProviderKind::OpenAI];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Zai => "zai",
            ProviderKind::OpenAI => "openai",
        }
    }

    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => GeminiProvider::API_KEY_ENV,
            ProviderKind::Zai => ZaiProvider::API_KEY_ENV,
            ProviderKind::OpenAI => ZaiProvider::OPENAI_API_KEY_ENV,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-2.5-flash",
            ProviderKind::Zai => "glm-4-flash",
            ProviderKind::OpenAI => "gpt-4o-mini",
        }
    }

    /// First provider whose key is set, in `ALL` order.
    fn infer(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| lookup(kind.api_key_env()).is_some_and(|v| !v.trim().is_empty()))
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "zai" | "z.ai" => Ok(ProviderKind::Zai),
            "openai" => Ok(ProviderKind::OpenAI),
            _ => Err(Error::ProviderNotFound(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub timeout: Duration,
    /// Overrides the provider's default base URL (tests, proxies).
    pub base_url: Option<String>,
}

impl AiConfig {
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            model: provider.default_model().to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: None,
        }
    }

    /// Switching provider also resets the model to that provider's default.
    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        if self.model == self.provider.default_model() {
            self.model = provider.default_model().to_string();
        }
        self.provider = provider;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `from_env` over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let provider = match lookup(PROVIDER_ENV).filter(|v| !v.trim().is_empty()) {
            Some(name) => name.parse::<ProviderKind>()?,
            None => ProviderKind::infer(&lookup)
                .ok_or_else(|| Error::MissingApiKey("any (set GEMINI_API_KEY, ZAI_API_KEY or OPENAI_API_KEY)".to_string()))?,
        };

        let mut config = Self::new(provider);
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.model = model.trim().to_string();
        }
        if let Some(secs) = lookup(TIMEOUT_ENV).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Builds the provider, reading its API key from the environment.
    pub fn build_provider(&self) -> Result<Arc<dyn Provider>> {
        let key_env = self.provider.api_key_env();
        let api_key = std::env::var(key_env).map_err(|_| Error::MissingApiKey(self.provider.to_string()))?;
        self.build_provider_with_key(api_key)
    }

    pub fn build_provider_with_key(&self, api_key: impl Into<String>) -> Result<Arc<dyn Provider>> {
        let provider: Arc<dyn Provider> = match self.provider {
            ProviderKind::Gemini => {
                let mut config = GeminiConfig::new(api_key).with_timeout(self.timeout);
                if let Some(url) = &self.base_url {
                    config = config.with_base_url(url.clone());
                }
                Arc::new(GeminiProvider::new(config)?)
            }
            ProviderKind::Zai | ProviderKind::OpenAI => {
                let base = if self.provider == ProviderKind::OpenAI {
                    ZaiConfig::openai(api_key)
                } else {
                    ZaiConfig::new(api_key)
                };
                let mut config = base.with_timeout(self.timeout);
                if let Some(url) = &self.base_url {
                    config = config.with_base_url(url.clone());
                }
                Arc::new(ZaiProvider::new(config)?)
            }
        };
        Ok(provider)
    }
}
