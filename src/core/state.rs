//! Game state: the single mutable aggregate of a game.
//!
//! ## GameState
//!
//! - Health, deck, room, discard
//! - Equipped weapon and the monsters it has slain
//! - Run cooldown and the last action message
//! - The game's own RNG
//!
//! Fields are only writable inside the crate. Outside code reads them
//! through accessors and changes them through `Game`'s actions, which is
//! what keeps the invariants below true.
//!
//! ## Invariants
//!
//! - `room.len() <= config.room_size`
//! - `weapon_slain_values` is empty whenever `weapon` is `None`
//! - deck + room + discard + weapon + consumed == `total_cards`

use im::Vector;
use smallvec::SmallVec;

use super::config::GameConfig;
use super::rng::GameRng;
use crate::cards::Card;
use crate::rules::GameOutcome;

/// Inline capacity of the room; the standard room never spills.
pub type Room = SmallVec<[Card; 4]>;

/// Message set when a game starts.
pub const WELCOME_MESSAGE: &str = "Game started. Welcome to the dungeon!";

/// Complete game state.
///
/// The deck is an `im::Vector` so snapshots of a game are O(1) to clone.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) health: i32,
    pub(crate) deck: Vector<Card>,
    pub(crate) room: Room,
    pub(crate) discard: Vec<Card>,
    pub(crate) weapon: Option<Card>,
    pub(crate) weapon_slain_values: Vec<i32>,
    pub(crate) consumed: Vec<Card>,
    pub(crate) can_run: bool,
    pub(crate) last_action: String,
    pub(crate) total_cards: usize,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a state with `deck` in draw order and an empty room.
    ///
    /// The deck is used as given; shuffling is the caller's job.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng, deck: impl IntoIterator<Item = Card>) -> Self {
        let deck: Vector<Card> = deck.into_iter().collect();
        let total_cards = deck.len();
        Self {
            health: config.max_health,
            room: SmallVec::new(),
            config,
            deck,
            discard: Vec::new(),
            weapon: None,
            weapon_slain_values: Vec::new(),
            consumed: Vec::new(),
            can_run: true,
            last_action: WELCOME_MESSAGE.to_string(),
            total_cards,
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.config.max_health
    }

    /// Remaining draw pile; front is the next card drawn.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Cards currently in the room, in slot order.
    #[must_use]
    pub fn room(&self) -> &[Card] {
        &self.room
    }

    /// Weapons replaced by a newer weapon.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn weapon(&self) -> Option<&Card> {
        self.weapon.as_ref()
    }

    /// Values of monsters killed with the current weapon, in kill order.
    #[must_use]
    pub fn weapon_slain_values(&self) -> &[i32] {
        &self.weapon_slain_values
    }

    /// Cards out of play for good: slain monsters, drunk potions, spent
    /// merchants and sold weapons.
    #[must_use]
    pub fn consumed(&self) -> &[Card] {
        &self.consumed
    }

    #[must_use]
    pub fn can_run(&self) -> bool {
        self.can_run
    }

    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    /// Seed of the game's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cards the game started with.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently accounted for across every pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.room.len()
            + self.discard.len()
            + usize::from(self.weapon.is_some())
            + self.consumed.len()
    }

    /// Terminal check. Pure; see `GameOutcome::of`.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(self)
    }

    // === Mutation helpers ===

    /// Add health, capped at `max_health`. Returns the new health.
    pub(crate) fn heal(&mut self, amount: i32) -> i32 {
        self.health = self.health.saturating_add(amount).min(self.config.max_health);
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{dungeon_deck, Rank, Suit, DUNGEON_DECK_SIZE};

    fn fresh_state() -> GameState {
        GameState::new(GameConfig::default(), GameRng::new(1), dungeon_deck())
    }

    #[test]
    fn test_new_state() {
        let state = fresh_state();

        assert_eq!(state.health(), 20);
        assert_eq!(state.deck().len(), DUNGEON_DECK_SIZE);
        assert!(state.room().is_empty());
        assert!(state.weapon().is_none());
        assert!(state.can_run());
        assert_eq!(state.last_action(), WELCOME_MESSAGE);
        assert_eq!(state.seed(), 1);
    }

    #[test]
    fn test_deck_order_preserved() {
        let cards = vec![
            Card::standard(Suit::Clubs, Rank::Five),
            Card::joker(1),
            Card::standard(Suit::Hearts, Rank::Two),
        ];
        let state = GameState::new(GameConfig::default(), GameRng::new(1), cards.clone());

        let deck: Vec<Card> = state.deck().iter().copied().collect();
        assert_eq!(deck, cards);
        assert_eq!(state.total_cards(), 3);
    }

    #[test]
    fn test_heal_is_capped() {
        let mut state = fresh_state();
        state.health = 15;

        assert_eq!(state.heal(3), 18);
        assert_eq!(state.heal(10), 20);

        state.health = -4;
        assert_eq!(state.heal(6), 2);
    }

    #[test]
    fn test_card_count() {
        let mut state = fresh_state();
        assert_eq!(state.card_count(), state.total_cards());

        let card = state.deck.pop_front().unwrap();
        state.weapon = Some(card);
        assert_eq!(state.card_count(), state.total_cards());

        state.deck.pop_front();
        assert_eq!(state.card_count(), state.total_cards() - 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let state = fresh_state();
        let mut snapshot = state.clone();
        snapshot.deck.pop_front();

        assert_eq!(state.deck().len(), DUNGEON_DECK_SIZE);
        assert_eq!(snapshot.deck().len(), DUNGEON_DECK_SIZE - 1);
    }
}
