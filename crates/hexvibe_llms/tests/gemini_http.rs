use hexvibe_core::AiOutcome;
use hexvibe_llms::providers::gemini::GeminiConfig;
use hexvibe_llms::{GeminiProvider, PaletteParaphraser, Provider};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

fn provider(base_url: &str) -> GeminiProvider {
    GeminiProvider::new(GeminiConfig::new("test-key").with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn generate_content_sends_schema_and_key() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "required": ["palette"] }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "{\"palette\":[\"#0B3D91\",\"#1E90FF\",\"#87CEEB\"],\"themeName\":\"Ocean\"}" }] },
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let paraphraser = PaletteParaphraser::with_default_model(Arc::new(provider(&server.url())));
    let outcome = paraphraser.request_palette("deep ocean").await;

    mock.assert_async().await;
    let AiOutcome::Success(colors) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    let hexes: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    assert_eq!(hexes, ["#0B3D91", "#1E90FF", "#87CEEB"]);
    Ok(())
}

#[tokio::test]
async fn http_error_becomes_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .with_status(429)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let paraphraser = PaletteParaphraser::with_default_model(Arc::new(provider(&server.url())));
    match paraphraser.request_palette("x").await {
        AiOutcome::Failure(reason) => {
            assert!(reason.contains("429"), "{reason}");
            assert!(reason.contains("quota exceeded"), "{reason}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_palette_becomes_empty_outcome() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(json!({ "candidates": [{ "content": { "parts": [{ "text": "{\"palette\":[\"nope\"]}" }] } }] }).to_string())
        .create_async()
        .await;

    let paraphraser = PaletteParaphraser::with_default_model(Arc::new(provider(&server.url())));
    assert_eq!(paraphraser.request_palette("x").await, AiOutcome::Empty);
}

#[tokio::test]
async fn list_models_strips_prefix() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/models")
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_body(json!({ "models": [{ "name": "models/gemini-2.5-flash" }, { "name": "models/gemini-2.5-pro" }] }).to_string())
        .create_async()
        .await;

    let models = provider(&server.url()).list_models().await?;
    assert_eq!(models, ["gemini-2.5-flash", "gemini-2.5-pro"]);
    Ok(())
}
