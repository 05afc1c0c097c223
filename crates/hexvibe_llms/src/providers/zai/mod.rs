//! Z.AI provider module
//!
//! OpenAI-compatible chat completions. Z.AI's GLM models by default; pointed at
//! `https://api.openai.com/v1/` the same provider serves OpenAI.
//! API docs: https://docs.z.ai/api-reference/llm/chat-completion

mod convert;
mod provider;
mod types;

pub use provider::ZaiProvider;
pub use types::{ZaiConfig, ZaiRequest, ZaiResponse};
