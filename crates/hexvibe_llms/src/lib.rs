//! hexvibe_llms: provider-agnostic LLM client that turns a description into colors.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  ProviderRegistry                    │
//! │  ┌──────────────────────────────────────────────┐   │
//! │  │  HashMap<String, Arc<dyn Provider>>           │   │
//! │  └──────────────────────────────────────────────┘   │
//! │                       │                              │
//! │          ┌────────────┼────────────┐                │
//! │          ▼            ▼            ▼                │
//! │   ┌───────────┐ ┌──────────┐ ┌──────────┐         │
//! │   │  Gemini   │ │  Z.AI    │ │  OpenAI  │         │
//! │   │ Provider  │ │ Provider │ │ (Z.AI    │         │
//! │   │           │ │          │ │  wire)   │         │
//! │   └───────────┘ └──────────┘ └──────────┘         │
//! └──────────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//!               PaletteParaphraser -> AiOutcome
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hexvibe_llms::{AiConfig, PaletteParaphraser};
//!
//! # async fn run() -> hexvibe_llms::Result<()> {
//! let config = AiConfig::from_env()?;
//! let paraphraser = PaletteParaphraser::new(config.build_provider()?, config.model.clone());
//! let outcome = paraphraser.request_palette("misty forest at dawn").await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod palette;
pub mod provider;
pub mod providers;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{AiConfig, ProviderKind};
pub use error::{Error, Result};
pub use palette::{PaletteParaphraser, normalize_hex, palette_prompt, parse_palette_response};
pub use provider::{Provider, ProviderRegistry};

pub use providers::{GeminiProvider, ZaiProvider};

pub use types::{GenerateOptions, GenerateRequest, GenerateResponse, Headers, Message, Role, Usage};
