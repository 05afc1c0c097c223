//! Google Gemini provider module
//!
//! `models/{model}:generateContent` with JSON output and an optional response schema.
//! API docs: https://ai.google.dev/api/generate-content

mod convert;
mod provider;
mod types;

pub use provider::GeminiProvider;
pub use types::{GeminiConfig, GeminiRequest, GeminiResponse};
