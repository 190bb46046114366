//! Player actions and the action log.
//!
//! An `Action` names a verb plus the room slot it targets. Actions are
//! plain values so a driving layer can enumerate, store and replay them;
//! `Game::apply` turns one into a state transition.

use serde::{Deserialize, Serialize};

/// A single player action.
///
/// Indexed actions refer to a 0-based position in the current room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Fight the monster at `index`, with the equipped weapon if
    /// `use_weapon` is set and the weapon may be used on it.
    Fight { index: usize, use_weapon: bool },
    /// Equip the weapon at `index`, discarding any current weapon.
    Equip { index: usize },
    /// Drink the potion at `index`.
    Drink { index: usize },
    /// Sell the equipped weapon to the merchant at `index`.
    Sell { index: usize },
    /// Send the whole room to the bottom of the deck.
    Run,
}

impl Action {
    /// Room slot this action targets, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match *self {
            Action::Fight { index, .. }
            | Action::Equip { index }
            | Action::Drink { index }
            | Action::Sell { index } => Some(index),
            Action::Run => None,
        }
    }

    /// Short verb for logs.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Fight { use_weapon: true, .. } => "fight_armed",
            Action::Fight { use_weapon: false, .. } => "fight",
            Action::Equip { .. } => "equip",
            Action::Drink { .. } => "drink",
            Action::Sell { .. } => "sell",
            Action::Run => "run",
        }
    }
}

/// A recorded action with its outcome.
///
/// Rule rejections are recorded too (`accepted == false`); a rejected
/// action changed nothing but the log message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the game's history, starting at 0.
    pub sequence: usize,

    /// The action taken.
    pub action: Action,

    /// Did the rules allow it?
    pub accepted: bool,

    /// The `last_action` text the action produced.
    pub message: String,
}

impl ActionRecord {
    #[must_use]
    pub fn new(
        sequence: usize,
        action: Action,
        accepted: bool,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sequence,
            action,
            accepted,
            message: message.into(),
        }
    }
}
