//! Z.AI / OpenAI-compatible provider implementation

use super::convert::{from_zai_response, to_zai_request};
use super::types::{ZaiConfig, ZaiResponse};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::providers::http_client;
use crate::types::{GenerateRequest, GenerateResponse, Headers};
use async_trait::async_trait;
use reqwest::Client;

pub struct ZaiProvider {
    config: ZaiConfig,
    client: Client,
}

impl ZaiProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "ZAI_API_KEY";
    pub const OPENAI_API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    pub fn new(config: ZaiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey(config.provider_id.clone()));
        }

        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }

    /// Create provider from `ZAI_API_KEY`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV).map_err(|_| Error::MissingApiKey("zai".to_string()))?;
        Self::new(ZaiConfig::new(api_key))
    }

    /// OpenAI through the same wire format, from `OPENAI_API_KEY`
    pub fn openai_from_env() -> Result<Self> {
        let api_key =
            std::env::var(Self::OPENAI_API_KEY_ENV).map_err(|_| Error::MissingApiKey("openai".to_string()))?;
        Self::new(ZaiConfig::openai(api_key))
    }

    pub fn config(&self) -> &ZaiConfig {
        &self.config
    }
}

#[async_trait]
impl Provider for ZaiProvider {
    fn provider_id(&self) -> &str {
        &self.config.provider_id
    }

    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization", format!("Bearer {}", self.config.api_key));
        headers.insert("Content-Type", "application/json");

        if let Some(custom) = custom_headers {
            headers.merge_with(custom);
        }

        headers
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        // No models endpoint is queried; return known models.
        let models: &[&str] = if self.config.provider_id == "openai" {
            &["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini", "gpt-4.1"]
        } else {
            &["glm-4-flash", "glm-4-air", "glm-4-airx", "glm-4-plus", "glm-4-long"]
        };
        Ok(models.iter().map(|m| m.to_string()).collect())
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}chat/completions", self.config.base_url);
        let body = to_zai_request(&request);
        let headers = self.build_headers(request.options.headers.as_ref());

        tracing::debug!(provider = %self.config.provider_id, model = %request.model, "chat completion request");

        let response = self
            .client
            .post(&url)
            .headers(headers.to_reqwest_headers())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider_error(format!(
                "{} API error {}: {}",
                self.config.provider_id, status, error_text
            )));
        }

        let resp: ZaiResponse = response.json().await?;
        from_zai_response(resp)
    }
}
