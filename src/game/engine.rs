//! The Scoundrel game: construction, queries, history and replay.

use im::Vector;
use tracing::debug;

use crate::cards::{dungeon_deck, Card};
use crate::core::{Action, ActionRecord, GameConfig, GameError, GameRng, GameState};
use crate::rules::{self, GameOutcome};

/// One game of Scoundrel.
///
/// Owns the `GameState` and is the only thing that mutates it. The
/// driving layer calls an action, then reads the state, `last_action`
/// and `outcome()` to render the result.
///
/// ## Example
///
/// ```
/// use scoundrel::Game;
///
/// let mut game = Game::new(Some(42));
/// assert_eq!(game.health(), 20);
/// assert_eq!(game.room().len(), 4);
///
/// let action = game.legal_actions()[0];
/// game.apply(action).unwrap();
/// assert_eq!(game.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) state: GameState,
    pub(crate) history: Vec<ActionRecord>,
}

/// Builder for a `Game` with non-default rules or a fixed deck.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    stacked_deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the shuffle. Without a seed one is drawn from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Play with exactly these cards in exactly this order (front is drawn
    /// first). The deck is not shuffled; runs still shuffle the room.
    pub fn stacked_deck(mut self, deck: impl IntoIterator<Item = Card>) -> Self {
        self.stacked_deck = Some(deck.into_iter().collect());
        self
    }

    /// Build the game and draw the first room.
    pub fn build(self) -> Result<Game, GameError> {
        self.config.validate()?;
        Ok(Game::from_parts(self.config, self.seed, self.stacked_deck))
    }
}

impl Game {
    /// Start a standard game. Same seed, same dungeon.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_parts(GameConfig::default(), seed, None)
    }

    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    fn from_parts(config: GameConfig, seed: Option<u64>, stacked: Option<Vec<Card>>) -> Self {
        let mut rng = GameRng::from_optional(seed);
        let stacked_deck = stacked.is_some();
        let deck = stacked.unwrap_or_else(|| {
            let mut deck = dungeon_deck();
            rng.shuffle(&mut deck);
            deck
        });

        let mut game = Self {
            state: GameState::new(config, rng, deck),
            history: Vec::new(),
        };
        game.draw_room();

        debug!(
            seed = game.seed(),
            cards = game.state.total_cards,
            stacked_deck,
            "dungeon built"
        );
        game
    }

    /// Rebuild a game from its seed and the actions taken.
    ///
    /// Stops at the first action with an out-of-range index. Rejected
    /// actions replay as rejections.
    pub fn replay(
        config: GameConfig,
        seed: u64,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<Self, GameError> {
        let mut game = GameBuilder::new().config(config).seed(seed).build()?;
        for action in actions {
            game.apply(action)?;
        }
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.state.health
    }

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.state.deck
    }

    #[must_use]
    pub fn room(&self) -> &[Card] {
        &self.state.room
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.state.discard
    }

    #[must_use]
    pub fn consumed(&self) -> &[Card] {
        &self.state.consumed
    }

    #[must_use]
    pub fn weapon(&self) -> Option<&Card> {
        self.state.weapon.as_ref()
    }

    #[must_use]
    pub fn weapon_slain_values(&self) -> &[i32] {
        &self.state.weapon_slain_values
    }

    #[must_use]
    pub fn can_run(&self) -> bool {
        self.state.can_run
    }

    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.state.last_action
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.state.seed()
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    /// Every action taken so far, accepted or rejected.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Could the equipped weapon be used on `card` right now?
    #[must_use]
    pub fn can_use_weapon_on(&self, card: &Card) -> bool {
        rules::can_use_weapon(
            self.state.weapon.as_ref(),
            &self.state.weapon_slain_values,
            card,
        )
    }

    /// Actions the rules would accept in the current state.
    ///
    /// Room cards in slot order, then `Run` if allowed. Empty once the game
    /// is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.outcome().is_over() {
            return Vec::new();
        }

        let armed = self.state.weapon.is_some();
        let mut actions = Vec::with_capacity(self.state.room.len() + 2);
        for (index, card) in self.state.room.iter().enumerate() {
            let ranked = card.value().is_some();
            if card.is_monster() && ranked {
                actions.push(Action::Fight { index, use_weapon: false });
                if self.can_use_weapon_on(card) {
                    actions.push(Action::Fight { index, use_weapon: true });
                }
            } else if card.is_weapon() {
                actions.push(Action::Equip { index });
            } else if card.is_potion() && ranked {
                actions.push(Action::Drink { index });
            } else if card.is_merchant() && armed {
                actions.push(Action::Sell { index });
            }
        }
        if self.state.can_run {
            actions.push(Action::Run);
        }
        actions
    }
}
