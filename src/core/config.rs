//! Game configuration.
//!
//! The defaults are the standard Scoundrel rules. Variants (a gentler
//! health pool, a bigger room) are expressed by overriding fields with
//! the `with_*` builders.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Standard starting and maximum health.
pub const DEFAULT_MAX_HEALTH: i32 = 20;

/// Standard number of cards in a room.
pub const DEFAULT_ROOM_SIZE: usize = 4;

/// A room at or below this size counts as cleared and is refilled.
pub const DEFAULT_REFILL_THRESHOLD: usize = 1;

/// Rule parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting health and the cap applied to every heal.
    pub max_health: i32,

    /// Cards drawn into a full room.
    pub room_size: usize,

    /// Room size at which the room is refilled and running is re-enabled.
    pub refill_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            room_size: DEFAULT_ROOM_SIZE,
            refill_threshold: DEFAULT_REFILL_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }

    #[must_use]
    pub fn with_room_size(mut self, room_size: usize) -> Self {
        self.room_size = room_size;
        self
    }

    #[must_use]
    pub fn with_refill_threshold(mut self, threshold: usize) -> Self {
        self.refill_threshold = threshold;
        self
    }

    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_health <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.room_size == 0 {
            return Err(GameError::InvalidConfig("room_size must be at least 1".into()));
        }
        if self.refill_threshold >= self.room_size {
            return Err(GameError::InvalidConfig(format!(
                "refill_threshold ({}) must be below room_size ({})",
                self.refill_threshold, self.room_size
            )));
        }
        Ok(())
    }
}
