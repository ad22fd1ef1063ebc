//! Conversation session management.
//!
//! A `Session` holds the ordered transcript for one interactive session,
//! seeded with the persona, and drives the per-prompt exchange:
//! `Idle` -> `AwaitingResponse` -> `Idle`, appending one reply turn
//! whatever the outcome.

mod chat;
mod manager;
mod types;


pub use chat::Exchange;
pub use manager::Session;
pub use types::{PersonaVisibility, SessionState, StateHandle, Turn};
