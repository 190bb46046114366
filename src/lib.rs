//! # scoundrel
//!
//! Rules engine for Scoundrel, a single-player dungeon crawl played with
//! a deck of cards.
//!
//! ## Rules in brief
//!
//! - Clubs and spades are **monsters**, diamonds **weapons**, hearts
//!   **potions**, jokers **merchants**.
//! - Each turn the player faces a **room** of up to four cards and acts on
//!   one of them, or **runs**, sending the room to the bottom of the deck.
//!   Running twice in a row is not allowed.
//! - A weapon softens a monster's hit by its value, but after its first
//!   kill it may only be turned on strictly weaker monsters.
//! - Health starts at 20 and never exceeds it. Reach 0 and you die; empty
//!   the dungeon and you win.
//!
//! ## Design
//!
//! - **Deterministic**: each game owns a seeded ChaCha8 RNG. Same seed and
//!   same actions, same game.
//! - **Rejections are not errors**: an illegal move only sets
//!   `last_action`. Addressing a room slot that does not exist is an error.
//! - **No presentation**: the engine produces state and log text; drawing
//!   it is the caller's business.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, categories, the dungeon deck
//! - `core`: state, actions, RNG, configuration, errors
//! - `rules`: weapon restriction, damage, merchant pricing, outcomes
//! - `game`: the `Game` engine

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{dungeon_deck, Card, Category, Rank, Suit, DUNGEON_DECK_SIZE};

pub use crate::core::{Action, ActionRecord, GameConfig, GameError, GameRng, GameState};

pub use crate::game::{Game, GameBuilder};

pub use crate::rules::GameOutcome;
