//! Session struct and transcript management.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use pavel_common::SessionId;
use tracing::debug;

use crate::persona::PERSONA;
use crate::token_tracker::TokenTracker;
use crate::Role;

use super::types::{PersonaVisibility, SessionState, StateHandle, Turn};

/// One user's chat session: the ordered transcript plus usage counters.
pub struct Session {
    pub(super) id: SessionId,
    /// Ordered transcript; empty until the first interaction seeds it.
    pub(super) turns: Vec<Turn>,
    pub(super) visibility: PersonaVisibility,
    pub(super) tracker: TokenTracker,
    pub(super) awaiting: Arc<AtomicBool>,
}

impl Session {
    pub fn new(visibility: PersonaVisibility) -> Self {
        Self {
            id: SessionId::new(),
            turns: Vec::new(),
            visibility,
            tracker: TokenTracker::new(),
            awaiting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Seed the transcript with the persona turn if it is not seeded yet.
    ///
    /// Returns `true` if this call did the seeding.
    pub fn initialize(&mut self) -> bool {
        if self.is_initialized() {
            return false;
        }
        self.turns
            .push(Turn::new(self.visibility.seed_role(), PERSONA));
        debug!(session = %self.id, visibility = ?self.visibility, "session seeded");
        true
    }

    pub fn is_initialized(&self) -> bool {
        !self.turns.is_empty()
    }

    /// Append a turn. The text is stored as-is, empty strings included.
    pub fn append_turn(&mut self, role: Role, text: impl Into<String>) -> &Turn {
        self.initialize();
        self.turns.push(Turn::new(role, text));
        let index = self.turns.len() - 1;
        &self.turns[index]
    }

    /// Turns that get rendered: everything except `system` turns.
    ///
    /// Recomputed from the stored transcript on every call.
    pub fn visible_turns(&self) -> impl Iterator<Item = &Turn> + '_ {
        self.turns.iter().filter(|t| t.role != Role::System)
    }

    /// Full stored transcript, hidden turns included.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn visibility(&self) -> PersonaVisibility {
        self.visibility
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn state(&self) -> SessionState {
        self.state_handle().get()
    }

    pub fn state_handle(&self) -> StateHandle {
        StateHandle::new(Arc::clone(&self.awaiting))
    }

    /// Tear the session down. The next interaction re-seeds under a new id.
    pub fn reset(&mut self) {
        debug!(session = %self.id, turns = self.turns.len(), "session reset");
        self.turns.clear();
        self.tracker.reset();
        self.id = SessionId::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PersonaVisibility::default())
    }
}
