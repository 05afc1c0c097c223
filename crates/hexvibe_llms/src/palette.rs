//! Description-to-palette requests on top of any [Provider].

use std::sync::Arc;
use std::time::Instant;

use hexvibe_constant::app::PALETTE_SIZE;
use hexvibe_core::{AiOutcome, HexColor};
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::{GenerateOptions, GenerateRequest, Message};

/// Appended for providers that cannot enforce a response schema.
const JSON_OBJECT_INSTRUCTION: &str =
    "Respond with a JSON object of the form {\"palette\": [\"#RRGGBB\", ...], \"themeName\": \"...\"} and nothing else.";

pub fn palette_prompt(description: &str) -> String {
    format!(
        "Generate a professional {PALETTE_SIZE}-color palette based on this description: \"{description}\". \
         Return ONLY the hex codes in a JSON array."
    )
}

/// `{ palette: [string], themeName: string }`, `palette` required.
pub fn palette_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "palette": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!("An array of {PALETTE_SIZE} hex color strings."),
            },
            "themeName": { "type": "STRING" },
        },
        "required": ["palette"],
    })
}

pub fn palette_request(model: &str, description: &str) -> GenerateRequest {
    GenerateRequest::new(
        model,
        vec![Message::system(JSON_OBJECT_INSTRUCTION), Message::user(palette_prompt(description))],
    )
    .with_options(GenerateOptions {
        json_output: true,
        response_schema: Some(palette_response_schema()),
        temperature: Some(0.9),
        ..Default::default()
    })
}

/// Accepts `{"palette": [...]}` or a bare array, optionally fenced in ```json.
/// Entries are trimmed, given a `#` when missing and validated; invalid ones
/// are dropped. At most `PALETTE_SIZE` colors come back.
pub fn parse_palette_response(text: &str) -> Result<Vec<HexColor>> {
    let body = strip_code_fence(text.trim());
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => extract_json(body)?,
    };

    let entries = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("palette") {
            Some(Value::Array(items)) => items,
            _ => return Err(Error::invalid_response("response has no palette array")),
        },
        _ => return Err(Error::invalid_response("response is not a JSON array or object")),
    };

    Ok(entries
        .iter()
        .filter_map(Value::as_str)
        .filter_map(normalize_hex)
        .take(PALETTE_SIZE)
        .collect())
}

/// `" ff8800 "` -> `#FF8800`.
pub fn normalize_hex(raw: &str) -> Option<HexColor> {
    let trimmed = raw.trim();
    let candidate = if trimmed.starts_with('#') {
        trimmed.to_uppercase()
    } else {
        format!("#{}", trimmed.to_uppercase())
    };
    candidate.parse().ok()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the info string (`json`) up to the first newline
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// JSON embedded in prose. The outermost `{...}` span is tried before `[...]`,
/// so a stray bracket ahead of the object does not win.
fn extract_json(text: &str) -> Result<Value> {
    [('{', '}'), ('[', ']')]
        .into_iter()
        .filter_map(|(open, close)| span(text, open, close))
        .find_map(|candidate| serde_json::from_str(candidate).ok())
        .ok_or_else(|| Error::invalid_response("no JSON in response"))
}

fn span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close).filter(|&end| end > start)?;
    Some(&text[start..=end])
}

/// Turns free text into colors through one provider and model.
#[derive(Clone)]
pub struct PaletteParaphraser {
    provider: Arc<dyn Provider>,
    model: String,
}

impl PaletteParaphraser {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Uses the provider's default model.
    pub fn with_default_model(provider: Arc<dyn Provider>) -> Self {
        let model = provider.default_model().to_string();
        Self { provider, model }
    }

    pub fn provider_id(&self) -> &str {
        self.provider.provider_id()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Never fails: transport and parse errors become [AiOutcome::Failure].
    pub async fn request_palette(&self, description: &str) -> AiOutcome {
        let started = Instant::now();
        let request = palette_request(&self.model, description);
        let outcome = match self.provider.generate(request).await {
            Ok(response) => match parse_palette_response(&response.text) {
                Ok(colors) if colors.is_empty() => AiOutcome::Empty,
                Ok(colors) => AiOutcome::Success(colors),
                Err(e) => AiOutcome::failure(format!("could not read palette: {e}")),
            },
            Err(e) => AiOutcome::failure(e.to_string()),
        };
        tracing::info!(
            provider = %self.provider.provider_id(),
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            outcome = outcome_label(&outcome),
            "AI palette request finished"
        );
        outcome
    }
}

fn outcome_label(outcome: &AiOutcome) -> &'static str {
    match outcome {
        AiOutcome::Success(_) => "success",
        AiOutcome::Empty => "empty",
        AiOutcome::Failure(_) => "failure",
    }
}
