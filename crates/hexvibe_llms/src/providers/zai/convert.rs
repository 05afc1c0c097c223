//! Conversion between unified types and chat-completions types

use super::types::{ZaiMessage, ZaiRequest, ZaiResponse, ZaiResponseFormat};
use crate::error::{Error, Result};
use crate::types::{GenerateRequest, GenerateResponse, Usage};
use serde_json::json;

/// Convert unified request to a chat-completions request
pub fn to_zai_request(req: &GenerateRequest) -> ZaiRequest {
    let messages = req
        .messages
        .iter()
        .map(|m| ZaiMessage {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        })
        .collect();

    ZaiRequest {
        model: req.model.clone(),
        messages,
        temperature: req.options.temperature,
        max_tokens: req.options.max_tokens,
        response_format: req.options.json_output.then(|| ZaiResponseFormat {
            type_: "json_object".to_string(),
        }),
    }
}

/// Convert a chat-completions response to unified response
pub fn from_zai_response(resp: ZaiResponse) -> Result<GenerateResponse> {
    let choice = resp
        .choices
        .first()
        .ok_or_else(|| Error::invalid_response("No choices in chat completion response"))?;

    let text = choice
        .message
        .content
        .clone()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| Error::invalid_response("No content in chat completion response"))?;

    let usage = resp
        .usage
        .as_ref()
        .map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        text,
        usage,
        finish_reason: choice.finish_reason.clone(),
        metadata: Some(json!({
            "id": resp.id,
            "model": resp.model,
        })),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerateOptions, Message};

    #[test]
    fn test_json_output_sets_response_format() {
        let req = GenerateRequest::new("glm-4-flash", vec![Message::system("s"), Message::user("u")])
            .with_options(GenerateOptions {
                json_output: true,
                temperature: Some(0.7),
                ..Default::default()
            });
        let body = serde_json::to_value(to_zai_request(&req)).unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "u");
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_from_response() {
        let resp: ZaiResponse = serde_json::from_value(json!({
            "id": "abc",
            "model": "glm-4-flash",
            "choices": [{ "message": { "content": "[\"#FFFFFF\"]" }, "finish_reason": "stop" }],
            "usage": { "prompt_tokens": 3, "completion_tokens": 4, "total_tokens": 7 }
        }))
        .unwrap();
        let out = from_zai_response(resp).unwrap();
        assert_eq!(out.text, "[\"#FFFFFF\"]");
        assert_eq!(out.usage.total_tokens, 7);
        assert_eq!(out.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_empty_choices_is_invalid() {
        let resp: ZaiResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(from_zai_response(resp), Err(Error::InvalidResponse(_))));
    }
}
