//! Gemini provider implementation

use super::convert::{from_gemini_response, to_gemini_request};
use super::types::{GeminiConfig, GeminiModelList, GeminiResponse};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::providers::http_client;
use crate::types::{GenerateRequest, GenerateResponse, Headers};
use async_trait::async_trait;
use reqwest::Client;

pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";

    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("gemini".to_string()));
        }

        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV).map_err(|_| Error::MissingApiKey("gemini".to_string()))?;
        Self::new(GeminiConfig::new(api_key))
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        Err(Error::provider_error(format!("Gemini API error {}: {}", status, error_text)))
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers {
        let mut headers = Headers::new();
        headers.insert("x-goog-api-key", self.config.api_key.clone());
        headers.insert("Content-Type", "application/json");

        if let Some(custom) = custom_headers {
            headers.merge_with(custom);
        }

        headers
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}models", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .headers(self.build_headers(None).to_reqwest_headers())
            .send()
            .await?;
        let list: GeminiModelList = self.check(response).await?.json().await?;
        Ok(list
            .models
            .into_iter()
            .map(|m| m.name.strip_prefix("models/").map(str::to_string).unwrap_or(m.name))
            .collect())
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}models/{}:generateContent", self.config.base_url, request.model);
        let body = to_gemini_request(&request);
        let headers = self.build_headers(request.options.headers.as_ref());

        tracing::debug!(provider = "gemini", model = %request.model, "generateContent request");

        let response = self
            .client
            .post(&url)
            .headers(headers.to_reqwest_headers())
            .json(&body)
            .send()
            .await?;

        let resp: GeminiResponse = self.check(response).await?.json().await?;
        from_gemini_response(resp)
    }
}
