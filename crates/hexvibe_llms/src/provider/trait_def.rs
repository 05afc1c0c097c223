use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// One LLM backend reachable over HTTP.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable id used for registry lookup and logs (`gemini`, `zai`, `openai`).
    fn provider_id(&self) -> &str;

    /// Auth and content headers, with `custom_headers` merged on top.
    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers;

    /// Known model ids. Providers without a models endpoint return a fixed list.
    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn default_model(&self) -> &str;

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
