//! Core engine types: state, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::GameConfig;
pub use error::GameError;
pub use rng::GameRng;
pub use state::{GameState, Room, WELCOME_MESSAGE};
