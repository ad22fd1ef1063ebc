//! The per-prompt exchange.

use pavel_common::ModelTier;
use tracing::debug;

use crate::assembler::{AnswerError, RequestAssembler};
use crate::attachment::{Attachment, RejectedAttachment};
use crate::{Role, TokenUsage};

use super::manager::Session;
use super::types::AwaitGuard;

/// Outcome of one submitted prompt.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The text appended as the model turn: an answer or a formatted error.
    pub reply: String,
    pub error: Option<AnswerError>,
    pub rejected: Vec<RejectedAttachment>,
    pub usage: TokenUsage,
}

impl Exchange {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl Session {
    /// Run one prompt through the assembler and record both sides.
    ///
    /// Appends the user turn, blocks in `AwaitingResponse` for the single
    /// remote call, then appends exactly one model turn holding either the
    /// answer or the error text. Never fails. Skipped attachments are
    /// reported whether or not the call succeeds.
    pub async fn submit(
        &mut self,
        assembler: &RequestAssembler,
        prompt: &str,
        attachments: &[Attachment],
        api_key: &str,
        tier: ModelTier,
    ) -> Exchange {
        self.append_turn(Role::User, prompt);

        let content = assembler.assemble(prompt, attachments);
        let result = {
            let _guard = AwaitGuard::enter(&self.awaiting);
            assembler.send(&content, api_key, tier).await
        };

        let rejected = content.rejected;
        let exchange = match result {
            Ok(response) => {
                self.tracker.record(tier, &response.usage);
                Exchange {
                    reply: response.content,
                    error: None,
                    rejected,
                    usage: response.usage,
                }
            }
            Err(err) => Exchange {
                reply: err.to_string(),
                error: Some(err),
                rejected,
                usage: TokenUsage::default(),
            },
        };

        self.append_turn(Role::Model, exchange.reply.clone());
        debug!(
            session = %self.id,
            turns = self.turns.len(),
            success = exchange.is_success(),
            "exchange complete"
        );
        exchange
    }
}
