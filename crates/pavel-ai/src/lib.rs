//! AI engine for Pavel.
//!
//! Provides:
//! - A session store holding the ordered, persona-seeded transcript
//! - A request assembler turning one prompt plus attachments into a
//!   single generation call, with failures folded into reply strings
//! - A Gemini `generateContent` client
//! - Token usage tracking

pub mod assembler;
pub mod attachment;
pub mod gemini;
pub mod generation;
pub mod persona;
pub mod session;
pub mod token_tracker;

#[cfg(test)]
pub(crate) mod mock;

use std::fmt;

use async_trait::async_trait;

pub use assembler::{Answer, AnswerError, AssembledContent, RequestAssembler};
pub use attachment::{classify, Attachment, AttachmentOutcome, RejectedAttachment, RejectionReason};
pub use gemini::{GeminiClient, GeminiConfig};
pub use generation::{GenerationConfig, ModelConfig};
pub use pavel_common::ModelTier;
pub use persona::PERSONA;
pub use session::{Exchange, PersonaVisibility, Session, SessionState, StateHandle, Turn};
pub use token_tracker::TokenTracker;

/// The seam between the request assembler and a remote model.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Issue exactly one generation call.
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<AiResponse, AiError>;
}

/// Everything a single generation call needs.
pub struct GenerateRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a ModelConfig,
    /// Ordered content: the prompt text first, then binary parts.
    pub parts: &'a [Part],
}

impl fmt::Debug for GenerateRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateRequest")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("parts", &self.parts)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    /// Stored but never rendered.
    System,
}

/// One element of a request's content list.
#[derive(Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineData { mime_type: String, data: Vec<u8> },
}

impl Part {
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Part::Text(_) => None,
            Part::InlineData { mime_type, .. } => Some(mime_type),
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Part::InlineData { .. })
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Part::InlineData { mime_type, data } => f
                .debug_struct("InlineData")
                .field("mime_type", mime_type)
                .field("bytes", &data.len())
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
