//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, GenerateRequest};

use super::client::{build_request_body, error_message, parse_response, GeminiClient};

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else if e.is_builder() {
        AiError::InvalidRequest(e.to_string())
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<AiResponse, AiError> {
        let body = build_request_body(request);
        let url = self.api_url(request.model.identifier());

        let attachment_bytes: usize = request
            .parts
            .iter()
            .map(|p| match p {
                crate::Part::InlineData { data, .. } => data.len(),
                crate::Part::Text(_) => 0,
            })
            .sum();
        debug!(
            model = %request.model.identifier(),
            parts = request.parts.len(),
            attachment_bytes,
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text);
            debug!(%status, "Gemini API error response");
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(AiError::RateLimited(message));
            }
            return Err(AiError::ApiError(format!("HTTP {status}: {message}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        parse_response(json)
    }
}
