//! Rules that do not mutate anything.
//!
//! - `combat`: weapon restriction, damage, merchant pricing
//! - `outcome`: terminal-condition query
//!
//! `Game` applies these to its state; nothing here touches a deck.

pub mod combat;
pub mod outcome;

pub use combat::{can_use_weapon, damage, sell_value};
pub use outcome::GameOutcome;
