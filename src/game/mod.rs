//! The Scoundrel engine.
//!
//! `Game` owns one `GameState` and implements every rule transition:
//! - `engine`: construction, queries, legal actions, replay
//! - `room`: drawing the room and the refill policy
//! - `actions`: fight, equip, drink, sell, run

pub mod actions;
pub mod engine;
pub mod room;

pub use engine::{Game, GameBuilder};
