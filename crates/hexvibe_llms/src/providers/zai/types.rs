//! Chat-completions wire types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::providers::normalize_base_url;

pub const ZAI_BASE_URL: &str = "https://api.z.ai/api/paas/v4/";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1/";

/// Configuration for Z.AI provider
#[derive(Debug, Clone)]
pub struct ZaiConfig {
    /// Registry id (`zai` or `openai`)
    pub provider_id: String,
    /// API key for authentication
    pub api_key: String,
    /// Base URL (default: https://api.z.ai/api/paas/v4/)
    pub base_url: String,
    pub default_model: String,
    pub timeout: Option<Duration>,
}

impl ZaiConfig {
    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            provider_id: "zai".to_string(),
            api_key: api_key.into(),
            base_url: ZAI_BASE_URL.to_string(),
            default_model: "glm-4-flash".to_string(),
            timeout: None,
        }
    }

    /// Same wire format against OpenAI.
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            provider_id: "openai".to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
            default_model: "gpt-4o-mini".to_string(),
            ..Self::new(api_key)
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ZaiRequest {
    pub model: String,
    pub messages: Vec<ZaiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ZaiResponseFormat>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ZaiResponseFormat {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ZaiMessage {
    pub role: String,
    pub content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ZaiResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<ZaiChoice>,
    #[serde(default)]
    pub usage: Option<ZaiUsage>,
}

#[derive(Debug, Deserialize)]
pub struct ZaiChoice {
    pub message: ZaiResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ZaiResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZaiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
