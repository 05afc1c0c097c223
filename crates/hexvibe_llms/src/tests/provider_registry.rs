use crate::error::Error;
use crate::provider::{Provider, ProviderRegistry};
use crate::types::{GenerateRequest, GenerateResponse, Headers};
use async_trait::async_trait;

/// Mock provider for testing
struct MockProvider {
    id: &'static str,
}

#[async_trait]
impl Provider for MockProvider {
    fn provider_id(&self) -> &str {
        self.id
    }

    fn build_headers(&self, _custom_headers: Option<&Headers>) -> Headers {
        Headers::new()
    }

    fn default_model(&self) -> &str {
        "mock-1"
    }

    async fn generate(&self, _request: GenerateRequest) -> crate::error::Result<GenerateResponse> {
        Err(Error::Other("mock".to_string()))
    }
}

#[test]
fn test_register_and_get_provider() {
    let registry = ProviderRegistry::new().register("test", MockProvider { id: "test" });

    let provider = registry.get_provider("test");
    assert!(provider.is_ok());
    assert_eq!(provider.unwrap().provider_id(), "test");
}

#[test]
fn test_provider_not_found() {
    let registry = ProviderRegistry::new();
    let result = registry.get_provider("nonexistent");
    assert!(matches!(result, Err(Error::ProviderNotFound(id)) if id == "nonexistent"));
}

#[test]
fn test_list_providers_sorted() {
    let registry = ProviderRegistry::new()
        .register("beta", MockProvider { id: "beta" })
        .register("alpha", MockProvider { id: "alpha" });

    assert_eq!(registry.list_providers(), vec!["alpha", "beta"]);
}

#[test]
fn test_default_list_models_is_empty() {
    let provider = MockProvider { id: "m" };
    let models = tokio_test::block_on(provider.list_models()).unwrap();
    assert!(models.is_empty());
}

#[test]
fn test_failing_provider_maps_to_failure_outcome() {
    use crate::palette::PaletteParaphraser;
    use hexvibe_core::AiOutcome;
    use std::sync::Arc;

    let paraphraser = PaletteParaphraser::with_default_model(Arc::new(MockProvider { id: "m" }));
    assert_eq!(paraphraser.model(), "mock-1");
    let outcome = tokio_test::block_on(paraphraser.request_palette("anything"));
    assert_eq!(outcome, AiOutcome::Failure("mock".to_string()));
}
