//! Terminal conditions.

use serde::{Deserialize, Serialize};

use crate::core::state::GameState;

/// Where a game stands after the latest action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// The game continues.
    InProgress,
    /// Health dropped to zero or below.
    Dead,
    /// Deck and room are both empty with the player alive.
    Victory,
}

impl GameOutcome {
    /// Evaluate a state. Death takes precedence over an empty dungeon.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if state.health() <= 0 {
            GameOutcome::Dead
        } else if state.deck().is_empty() && state.room().is_empty() {
            GameOutcome::Victory
        } else {
            GameOutcome::InProgress
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Text for the game-over screen. `None` while the game continues.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Dead => Some("You died."),
            GameOutcome::Victory => Some("Dungeon cleared. You win!"),
        }
    }
}
