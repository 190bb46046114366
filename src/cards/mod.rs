//! Card model: suits, ranks, categories, and the dungeon deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the printed face of a card
//! - `Category`: monster / weapon / potion / merchant, derived from suit
//! - `Card`: immutable card value with derived combat value and category
//! - `dungeon_deck`: the 46-card play set

pub mod card;
pub mod deck;
pub mod definition;

pub use card::Card;
pub use deck::{dungeon_deck, DUNGEON_DECK_SIZE};
pub use definition::{Category, Rank, Suit};
