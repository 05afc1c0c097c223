//! Conversion between unified types and Gemini types

use super::types::{GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse};
use crate::error::{Error, Result};
use crate::types::{GenerateRequest, GenerateResponse, Role, Usage};
use serde_json::json;

pub fn to_gemini_request(req: &GenerateRequest) -> GeminiRequest {
    let contents = req
        .messages
        .iter()
        .filter(|m| m.role != Role::System)
        .map(|m| GeminiContent {
            role: Some(if m.role == Role::Assistant { "model" } else { "user" }.to_string()),
            parts: vec![GeminiPart {
                text: Some(m.content.clone()),
            }],
        })
        .collect();

    let system_instruction = req.system_text().map(|text| GeminiContent {
        role: None,
        parts: vec![GeminiPart { text: Some(text) }],
    });

    let opts = &req.options;
    let generation_config = GeminiGenerationConfig {
        temperature: opts.temperature,
        max_output_tokens: opts.max_tokens,
        response_mime_type: (opts.json_output || opts.response_schema.is_some())
            .then(|| "application/json".to_string()),
        response_schema: opts.response_schema.clone(),
    };

    GeminiRequest {
        contents,
        system_instruction,
        generation_config: Some(generation_config),
    }
}

/// Text of the first candidate, all parts concatenated.
pub fn from_gemini_response(resp: GeminiResponse) -> Result<GenerateResponse> {
    let candidate = resp
        .candidates
        .first()
        .ok_or_else(|| Error::invalid_response("No candidates in Gemini response"))?;

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return Err(Error::invalid_response("No text in Gemini response"));
    }

    let usage = resp
        .usage_metadata
        .as_ref()
        .map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        text,
        usage,
        finish_reason: candidate.finish_reason.clone(),
        metadata: resp.model_version.map(|v| json!({ "model": v })),
    })
}
