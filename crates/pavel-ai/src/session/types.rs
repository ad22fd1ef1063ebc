//! Transcript turns, persona visibility, and the exchange state flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// One message unit in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    /// In practice a single text part; attachments are never stored here.
    pub parts: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![text.into()],
            created_at: Utc::now(),
        }
    }

    /// The first part, which is what gets rendered.
    pub fn text(&self) -> &str {
        self.parts.first().map(String::as_str).unwrap_or("")
    }
}

/// How the persona seed is stored, and therefore whether it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonaVisibility {
    /// Seed stored with the `model` role and shown as the first reply.
    #[default]
    Shown,
    /// Seed stored with the `system` role and filtered from the transcript.
    Hidden,
}

impl PersonaVisibility {
    pub fn from_flag(show_in_transcript: bool) -> Self {
        if show_in_transcript {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    pub(crate) fn seed_role(self) -> Role {
        match self {
            Self::Shown => Role::Model,
            Self::Hidden => Role::System,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// Read-only view of a session's state, shareable with a progress indicator.
#[derive(Debug, Clone)]
pub struct StateHandle {
    awaiting: Arc<AtomicBool>,
}

impl StateHandle {
    pub(crate) fn new(awaiting: Arc<AtomicBool>) -> Self {
        Self { awaiting }
    }

    pub fn get(&self) -> SessionState {
        if self.awaiting.load(Ordering::Acquire) {
            SessionState::AwaitingResponse
        } else {
            SessionState::Idle
        }
    }
}

/// Holds the session in `AwaitingResponse` and returns it to `Idle` on drop,
/// including when the in-flight future is dropped.
pub(crate) struct AwaitGuard {
    flag: Arc<AtomicBool>,
}

impl AwaitGuard {
    pub(crate) fn enter(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self {
            flag: Arc::clone(flag),
        }
    }
}

impl Drop for AwaitGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
