//! Request assembly: one prompt plus attachments in, one reply out.
//!
//! [`RequestAssembler::generate_answer`] is the boundary where remote
//! failures stop being errors and become text for the transcript. Nothing
//! past this point crashes the session.

use std::fmt;
use std::sync::Arc;

use pavel_common::ModelTier;
use tracing::{debug, warn};

use crate::attachment::{classify, Attachment, AttachmentOutcome, RejectedAttachment};
use crate::generation::ModelConfig;
use crate::persona::PERSONA;
use crate::{AiClient, AiResponse, GenerateRequest, Part, TokenUsage};

/// Prefix of every reply produced from a failed remote call.
pub const ERROR_MARKER: &str = "❌ Error:";

/// Reply shown when no API key has been entered.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "⚠️ Please enter your Gemini API key (use /key).";

/// Why a prompt produced no model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// No API key; detected before any network activity.
    MissingCredential,
    /// The remote call failed; carries the underlying message.
    RemoteCallFailed(String),
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::MissingCredential => f.write_str(MISSING_CREDENTIAL_MESSAGE),
            AnswerError::RemoteCallFailed(message) => write!(f, "{ERROR_MARKER} {message}"),
        }
    }
}

impl std::error::Error for AnswerError {}

/// The ordered content list for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledContent {
    /// Prompt text first, then accepted attachments in picker order.
    pub parts: Vec<Part>,
    pub rejected: Vec<RejectedAttachment>,
}

/// A successful model answer.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub usage: TokenUsage,
    pub rejected: Vec<RejectedAttachment>,
}

/// Builds generation requests and issues them through an [`AiClient`].
pub struct RequestAssembler {
    client: Arc<dyn AiClient>,
    system_instruction: String,
}

impl RequestAssembler {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self {
            client,
            system_instruction: PERSONA.to_string(),
        }
    }

    /// Replace the persona sent as the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn model_config(&self, tier: ModelTier) -> ModelConfig {
        ModelConfig {
            system_instruction: self.system_instruction.clone(),
            ..ModelConfig::for_tier(tier)
        }
    }

    /// Build the content list: the raw prompt, then every image or PDF.
    pub fn assemble(&self, prompt: &str, attachments: &[Attachment]) -> AssembledContent {
        let mut parts = Vec::with_capacity(attachments.len() + 1);
        parts.push(Part::Text(prompt.to_string()));
        let mut rejected = Vec::new();

        for attachment in attachments {
            match classify(attachment) {
                AttachmentOutcome::Accepted(part) => parts.push(part),
                AttachmentOutcome::Rejected(r) => {
                    warn!(name = %r.name, mime = %r.mime_type, "attachment skipped: {}", r.reason);
                    rejected.push(r);
                }
            }
        }

        AssembledContent { parts, rejected }
    }

    /// Issue exactly one generation call for already assembled content.
    ///
    /// An empty key short-circuits with [`AnswerError::MissingCredential`]
    /// and the client is never called. No retries.
    pub async fn send(
        &self,
        content: &AssembledContent,
        api_key: &str,
        tier: ModelTier,
    ) -> Result<AiResponse, AnswerError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            debug!("no API key, skipping remote call");
            return Err(AnswerError::MissingCredential);
        }

        let model = self.model_config(tier);
        let request = GenerateRequest {
            api_key,
            model: &model,
            parts: &content.parts,
        };

        self.client.generate(&request).await.map_err(|e| {
            warn!(model = %tier, "generation failed: {e}");
            AnswerError::RemoteCallFailed(e.to_string())
        })
    }

    /// Assemble `prompt` with its attachments and send it.
    pub async fn generate_answer(
        &self,
        prompt: &str,
        attachments: &[Attachment],
        api_key: &str,
        tier: ModelTier,
    ) -> Result<Answer, AnswerError> {
        let content = self.assemble(prompt, attachments);
        let response = self.send(&content, api_key, tier).await?;
        Ok(Answer {
            text: response.content,
            usage: response.usage,
            rejected: content.rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;
    use crate::AiError;

    fn fixtures() -> Vec<Attachment> {
        vec![
            Attachment::new("fig.png", "image/png", vec![1]),
            Attachment::new("paper.pdf", "application/pdf", vec![2]),
            Attachment::new("notes.txt", "text/plain", vec![3]),
        ]
    }

    #[test]
    fn assemble_filters_unsupported_types() {
        let assembler = RequestAssembler::new(MockClient::replying("ok"));
        let content = assembler.assemble("prove it", &fixtures());

        assert_eq!(content.parts.len(), 3);
        assert_eq!(content.parts[0], Part::Text("prove it".into()));
        assert_eq!(content.parts.iter().filter(|p| p.is_binary()).count(), 2);
        assert_eq!(content.parts[1].mime_type(), Some("image/png"));
        assert_eq!(content.parts[2].mime_type(), Some("application/pdf"));
        assert_eq!(content.rejected.len(), 1);
        assert_eq!(content.rejected[0].name, "notes.txt");
    }

    #[test]
    fn assemble_without_attachments_is_text_only() {
        let assembler = RequestAssembler::new(MockClient::replying("ok"));
        let content = assembler.assemble("", &[]);
        assert_eq!(content.parts, vec![Part::Text(String::new())]);
        assert!(content.rejected.is_empty());
    }

    #[tokio::test]
    async fn missing_key_never_calls_client() {
        let mock = MockClient::replying("should not be seen");
        let assembler = RequestAssembler::new(mock.clone());

        for key in ["", "   "] {
            let err = assembler
                .generate_answer("what is 2+2", &fixtures(), key, ModelTier::Pro)
                .await
                .unwrap_err();
            assert_eq!(err, AnswerError::MissingCredential);
            assert_eq!(err.to_string(), MISSING_CREDENTIAL_MESSAGE);
        }
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn success_sends_assembled_request() {
        let mock = MockClient::replying("x = 4");
        let assembler = RequestAssembler::new(mock.clone());

        let answer = assembler
            .generate_answer("solve x", &fixtures(), "key-123", ModelTier::Pro)
            .await
            .unwrap();

        assert_eq!(answer.text, "x = 4");
        assert_eq!(answer.rejected.len(), 1);
        assert_eq!(mock.calls(), 1);

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.api_key, "key-123");
        assert_eq!(sent.model, ModelConfig::for_tier(ModelTier::Pro));
        assert_eq!(sent.parts.len(), 3);
        assert_eq!(sent.parts[0], Part::Text("solve x".into()));
    }

    #[tokio::test]
    async fn remote_failure_is_formatted_with_marker() {
        let mock = MockClient::failing(AiError::RateLimited("quota exceeded".into()));
        let assembler = RequestAssembler::new(mock.clone());

        let err = assembler
            .generate_answer("q", &[], "key", ModelTier::Flash)
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.starts_with(ERROR_MARKER));
        assert!(text.contains("quota exceeded"));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn system_instruction_override_reaches_client() {
        let mock = MockClient::replying("ok");
        let assembler = RequestAssembler::new(mock.clone())
            .with_system_instruction("Answer in SI units only.");

        assembler
            .generate_answer("speed of light?", &[], "key", ModelTier::Flash)
            .await
            .unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.model.system_instruction, "Answer in SI units only.");
        assert_eq!(sent.model.tier, ModelTier::Flash);
        assert_eq!(sent.model.generation, ModelConfig::for_tier(ModelTier::Flash).generation);
    }

    #[test]
    fn default_system_instruction_is_persona() {
        let assembler = RequestAssembler::new(MockClient::replying("ok"));
        assert_eq!(assembler.model_config(ModelTier::Pro).system_instruction, PERSONA);
    }

    #[test]
    fn answer_error_display() {
        let err = AnswerError::RemoteCallFailed("Network error: dns".into());
        assert_eq!(err.to_string(), "❌ Error: Network error: dns");
    }
}
