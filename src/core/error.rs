//! Engine errors.
//!
//! Only caller mistakes are errors. A move the rules forbid (fighting a
//! potion, running twice) is not an error: the engine rejects it through
//! `last_action` and carries on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The driving layer referenced a room slot that does not exist.
    #[error("room index {index} out of range (room has {len} cards)")]
    RoomIndexOutOfRange { index: usize, len: usize },

    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}
