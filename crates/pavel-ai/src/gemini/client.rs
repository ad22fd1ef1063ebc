//! Gemini API client struct, request building, and response parsing.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

use crate::{AiError, AiResponse, GenerateRequest, Part, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

fn part_to_json(part: &Part) -> serde_json::Value {
    match part {
        Part::Text(text) => serde_json::json!({ "text": text }),
        Part::InlineData { mime_type, data } => serde_json::json!({
            "inlineData": {
                "mimeType": mime_type,
                "data": BASE64_STANDARD.encode(data),
            }
        }),
    }
}

/// Build the JSON request body for the Gemini API.
pub(crate) fn build_request_body(request: &GenerateRequest<'_>) -> serde_json::Value {
    let parts: Vec<_> = request.parts.iter().map(part_to_json).collect();
    let generation = &request.model.generation;

    serde_json::json!({
        "contents": [{
            "role": "user",
            "parts": parts,
        }],
        "systemInstruction": {
            "parts": [{ "text": request.model.system_instruction }]
        },
        "generationConfig": {
            "temperature": generation.temperature,
            "topP": generation.top_p,
            "topK": generation.top_k,
            "maxOutputTokens": generation.max_output_tokens,
        }
    })
}

/// Parse a Gemini response into the concatenated text of the first candidate.
pub(crate) fn parse_response(json: serde_json::Value) -> Result<AiResponse, AiError> {
    let Some(first) = json["candidates"].as_array().and_then(|c| c.first()) else {
        return Err(match json["promptFeedback"]["blockReason"].as_str() {
            Some(reason) => AiError::ParseError(format!("prompt blocked: {reason}")),
            None => AiError::ParseError("no candidates in response".to_string()),
        });
    };

    let content: String = first["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();

    if content.is_empty() {
        let reason = first["finishReason"].as_str().unwrap_or("UNKNOWN");
        return Err(AiError::ParseError(format!(
            "response contained no text (finish reason: {reason})"
        )));
    }

    let usage = TokenUsage {
        input_tokens: json["usageMetadata"]["promptTokenCount"]
            .as_u64()
            .unwrap_or(0),
        output_tokens: json["usageMetadata"]["candidatesTokenCount"]
            .as_u64()
            .unwrap_or(0),
    };

    Ok(AiResponse { content, usage })
}

/// Pull `error.message` out of a Gemini error envelope, falling back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
