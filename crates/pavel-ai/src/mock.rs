//! In-memory `AiClient` for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::session::{SessionState, StateHandle};
use crate::{AiClient, AiError, AiResponse, GenerateRequest, ModelConfig, Part, TokenUsage};

pub(crate) const MOCK_USAGE: TokenUsage = TokenUsage {
    input_tokens: 10,
    output_tokens: 20,
};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub api_key: String,
    pub model: ModelConfig,
    pub parts: Vec<Part>,
}

pub(crate) struct MockClient {
    outcome: Result<String, AiError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<RecordedRequest>>,
    watched: Mutex<Option<StateHandle>>,
    observed: Mutex<Vec<SessionState>>,
}

impl MockClient {
    fn with_outcome(outcome: Result<String, AiError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            watched: Mutex::new(None),
            observed: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub fn failing(err: AiError) -> Arc<Self> {
        Self::with_outcome(Err(err))
    }

    /// Record the session state seen from inside each call.
    pub fn watch(&self, handle: StateHandle) {
        *self.watched.lock().unwrap() = Some(handle);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn observed_states(&self) -> Vec<SessionState> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for MockClient {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<AiResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(RecordedRequest {
            api_key: request.api_key.to_string(),
            model: request.model.clone(),
            parts: request.parts.to_vec(),
        });
        if let Some(handle) = self.watched.lock().unwrap().as_ref() {
            self.observed.lock().unwrap().push(handle.get());
        }
        self.outcome.clone().map(|content| AiResponse {
            content,
            usage: MOCK_USAGE,
        })
    }
}
