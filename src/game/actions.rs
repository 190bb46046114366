//! Action handlers: fight, equip, drink, sell, run.
//!
//! Every handler follows the same shape. Look the card up (an index
//! outside the room is an error), check the rule, then either apply the
//! whole effect or change nothing but `last_action`.

use tracing::{debug, warn};

use super::engine::Game;
use crate::cards::Card;
use crate::core::{Action, ActionRecord, GameError};
use crate::rules;

/// How an in-range action resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolution {
    Applied,
    Rejected,
}

impl Game {
    /// Fight the monster at `index`.
    ///
    /// With `use_weapon` the equipped weapon blocks up to its value, but
    /// only if the weapon may be used on this monster; otherwise the fight
    /// is barehanded.
    pub fn fight(&mut self, index: usize, use_weapon: bool) -> Result<(), GameError> {
        self.apply(Action::Fight { index, use_weapon })
    }

    /// Equip the weapon at `index`. A previously equipped weapon is discarded.
    pub fn equip(&mut self, index: usize) -> Result<(), GameError> {
        self.apply(Action::Equip { index })
    }

    /// Drink the potion at `index`.
    pub fn drink(&mut self, index: usize) -> Result<(), GameError> {
        self.apply(Action::Drink { index })
    }

    /// Sell the equipped weapon to the merchant at `index`.
    pub fn sell(&mut self, index: usize) -> Result<(), GameError> {
        self.apply(Action::Sell { index })
    }

    /// Run from the current room.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.apply(Action::Run)
    }

    /// Apply one action and record it in the history.
    ///
    /// Returns `Err` only when the action names a room slot that does not
    /// exist; nothing is changed or recorded in that case. A move the
    /// rules forbid returns `Ok` and only updates `last_action`.
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        let resolution = match action {
            Action::Fight { index, use_weapon } => self.resolve_fight(index, use_weapon)?,
            Action::Equip { index } => self.resolve_equip(index)?,
            Action::Drink { index } => self.resolve_drink(index)?,
            Action::Sell { index } => self.resolve_sell(index)?,
            Action::Run => self.resolve_run(),
        };
        self.record(action, resolution);
        Ok(())
    }

    fn record(&mut self, action: Action, resolution: Resolution) {
        let accepted = resolution == Resolution::Applied;
        if accepted {
            debug!(
                action = action.verb(),
                index = ?action.index(),
                health = self.state.health,
                room = self.state.room.len(),
                deck = self.state.deck.len(),
                "action applied"
            );
        } else {
            debug!(
                action = action.verb(),
                index = ?action.index(),
                reason = %self.state.last_action,
                "action rejected"
            );
        }

        let sequence = self.history.len();
        self.history.push(ActionRecord::new(
            sequence,
            action,
            accepted,
            self.state.last_action.clone(),
        ));
    }

    fn card_in_room(&self, index: usize) -> Result<Card, GameError> {
        let len = self.state.room.len();
        self.state.room.get(index).copied().ok_or_else(|| {
            warn!(index, len, "room index out of range");
            GameError::RoomIndexOutOfRange { index, len }
        })
    }

    fn reject(&mut self, message: String) -> Resolution {
        self.state.last_action = message;
        Resolution::Rejected
    }

    /// Take the card at `index` out of the room. Index already checked.
    fn take_from_room(&mut self, index: usize) -> Card {
        self.state.room.remove(index)
    }

    fn resolve_fight(&mut self, index: usize, use_weapon: bool) -> Result<Resolution, GameError> {
        let card = self.card_in_room(index)?;
        if !card.is_monster() {
            return Ok(self.reject(format!("Cannot fight {card}; it is not a monster.")));
        }
        let Some(value) = card.value() else {
            return Ok(self.reject(format!("Cannot fight {card}; it has no rank.")));
        };

        let weapon = if use_weapon && self.can_use_weapon_on(&card) {
            self.state.weapon
        } else {
            None
        };
        let block = weapon.and_then(|w| w.value());
        let taken = rules::damage(value, block);

        self.state.health -= taken;
        let slain = self.take_from_room(index);
        self.state.consumed.push(slain);

        let mut message = format!("Fought {card}");
        match weapon {
            Some(w) => {
                self.state.weapon_slain_values.push(value);
                message.push_str(&format!(" with {w} (blocked {})", block.unwrap_or(0)));
            }
            None => message.push_str(" barehanded"),
        }
        message.push_str(&format!(
            ". Took {taken} damage. Health = {}.",
            self.state.health
        ));
        self.state.last_action = message;

        self.refill_if_needed();
        Ok(Resolution::Applied)
    }

    fn resolve_equip(&mut self, index: usize) -> Result<Resolution, GameError> {
        let card = self.card_in_room(index)?;
        if !card.is_weapon() {
            return Ok(self.reject(format!("Cannot equip {card}; it is not a weapon.")));
        }

        if let Some(old) = self.state.weapon.take() {
            self.state.discard.push(old);
        }
        let weapon = self.take_from_room(index);
        self.state.weapon = Some(weapon);
        self.state.weapon_slain_values.clear();
        self.state.last_action = format!("Equipped {weapon}.");

        self.refill_if_needed();
        Ok(Resolution::Applied)
    }

    fn resolve_drink(&mut self, index: usize) -> Result<Resolution, GameError> {
        let card = self.card_in_room(index)?;
        if !card.is_potion() {
            return Ok(self.reject(format!("Cannot drink {card}; it is not a potion.")));
        }
        let Some(value) = card.value() else {
            return Ok(self.reject(format!("Cannot drink {card}; it has no rank.")));
        };

        let before = self.state.health;
        let after = self.state.heal(value);
        let potion = self.take_from_room(index);
        self.state.consumed.push(potion);
        self.state.last_action = format!("Drank {card}. Health: {before} -> {after}.");

        self.refill_if_needed();
        Ok(Resolution::Applied)
    }

    fn resolve_sell(&mut self, index: usize) -> Result<Resolution, GameError> {
        let card = self.card_in_room(index)?;
        if !card.is_merchant() {
            return Ok(self.reject(format!("Card {card} is not a Merchant.")));
        }
        let Some(weapon) = self.state.weapon else {
            return Ok(self.reject("Merchant appears but you have no weapon to sell.".to_string()));
        };

        let heal = rules::sell_value(&weapon, &self.state.weapon_slain_values);
        let before = self.state.health;
        let after = self.state.heal(heal);

        self.state.weapon = None;
        self.state.weapon_slain_values.clear();
        self.state.consumed.push(weapon);
        let merchant = self.take_from_room(index);
        self.state.consumed.push(merchant);
        self.state.last_action = format!(
            "Sold {weapon} to Merchant for {heal} HP. Health: {before} -> {after}."
        );

        self.refill_if_needed();
        Ok(Resolution::Applied)
    }

    fn resolve_run(&mut self) -> Resolution {
        if !self.state.can_run {
            return self.reject("You cannot run twice in a row!".to_string());
        }

        let state = &mut self.state;
        state.rng.shuffle(&mut state.room);
        state.deck.extend(state.room.drain(..));
        self.draw_room();
        self.state.can_run = false;
        self.state.last_action =
            "Ran from the room. A new room is drawn. You cannot run from the next room."
                .to_string();
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{Card, Rank, Suit};
    use crate::core::{Action, GameError};
    use crate::game::{Game, GameBuilder};

    fn monster(rank: Rank) -> Card {
        Card::standard(Suit::Clubs, rank)
    }

    fn weapon(rank: Rank) -> Card {
        Card::standard(Suit::Diamonds, rank)
    }

    fn potion(rank: Rank) -> Card {
        Card::standard(Suit::Hearts, rank)
    }

    fn stacked(deck: Vec<Card>) -> Game {
        GameBuilder::new().seed(1).stacked_deck(deck).build().unwrap()
    }

    #[test]
    fn test_fight_barehanded() {
        let mut game = stacked(vec![
            monster(Rank::Five),
            potion(Rank::Two),
            potion(Rank::Three),
            potion(Rank::Four),
        ]);

        game.fight(0, false).unwrap();

        assert_eq!(game.health(), 15);
        assert_eq!(game.room().len(), 3);
        assert_eq!(game.consumed(), &[monster(Rank::Five)]);
        assert_eq!(
            game.last_action(),
            "Fought 5 of clubs barehanded. Took 5 damage. Health = 15."
        );
    }

    #[test]
    fn test_fight_with_weapon() {
        let mut game = stacked(vec![
            weapon(Rank::Four),
            monster(Rank::Ten),
            potion(Rank::Two),
            potion(Rank::Three),
        ]);

        game.equip(0).unwrap();
        game.fight(0, true).unwrap();

        assert_eq!(game.health(), 14);
        assert_eq!(game.weapon_slain_values(), &[10]);
        assert_eq!(
            game.last_action(),
            "Fought 10 of clubs with 4 of diamonds (blocked 4). Took 6 damage. Health = 14."
        );
    }

    #[test]
    fn test_weapon_cannot_go_up() {
        let mut game = stacked(vec![
            weapon(Rank::Four),
            monster(Rank::Ten),
            monster(Rank::Queen),
            potion(Rank::Three),
        ]);

        game.equip(0).unwrap();
        game.fight(0, true).unwrap();
        let queen = game.room()[0];
        assert!(!game.can_use_weapon_on(&queen));

        game.fight(0, true).unwrap();

        // Falls back to barehanded: full 12 damage, no new kill recorded.
        assert_eq!(game.health(), 20 - 6 - 12);
        assert_eq!(game.weapon_slain_values(), &[10]);
        assert!(game.last_action().contains("barehanded"));
    }

    #[test]
    fn test_weapon_overblock_is_zero_damage() {
        let mut game = stacked(vec![
            weapon(Rank::Nine),
            monster(Rank::Three),
            potion(Rank::Two),
            potion(Rank::Four),
        ]);

        game.equip(0).unwrap();
        game.fight(0, true).unwrap();

        assert_eq!(game.health(), 20);
        assert_eq!(game.weapon_slain_values(), &[3]);
    }

    #[test]
    fn test_fight_non_monster_rejected() {
        let mut game = stacked(vec![potion(Rank::Five), monster(Rank::Two)]);

        game.fight(0, false).unwrap();

        assert_eq!(game.health(), 20);
        assert_eq!(game.room().len(), 2);
        assert_eq!(game.last_action(), "Cannot fight 5 of hearts; it is not a monster.");
        assert!(!game.history()[0].accepted);
    }

    #[test]
    fn test_rankless_cards_rejected_by_rank() {
        let mut game = stacked(vec![
            Card::new(Suit::Spades, None, None),
            Card::new(Suit::Hearts, None, None),
            monster(Rank::Two),
        ]);

        game.fight(0, false).unwrap();
        assert_eq!(game.last_action(), "Cannot fight card of spades; it has no rank.");

        game.drink(1).unwrap();
        assert_eq!(game.last_action(), "Cannot drink card of hearts; it has no rank.");

        assert_eq!(game.health(), 20);
        assert_eq!(game.room().len(), 3);
        assert!(game.history().iter().all(|r| !r.accepted));
        assert_eq!(
            game.legal_actions(),
            vec![Action::Fight { index: 2, use_weapon: false }, Action::Run]
        );
    }

    #[test]
    fn test_equip_replaces_weapon() {
        let mut game = stacked(vec![
            weapon(Rank::Four),
            monster(Rank::Six),
            weapon(Rank::Seven),
            potion(Rank::Two),
            potion(Rank::Three),
        ]);

        game.equip(0).unwrap();
        game.fight(0, true).unwrap();
        assert_eq!(game.weapon_slain_values(), &[6]);

        game.equip(0).unwrap();

        assert_eq!(game.weapon(), Some(&weapon(Rank::Seven)));
        assert!(game.weapon_slain_values().is_empty());
        assert_eq!(game.discard(), &[weapon(Rank::Four)]);
        assert_eq!(game.last_action(), "Equipped 7 of diamonds.");
    }

    #[test]
    fn test_equip_non_weapon_rejected() {
        let mut game = stacked(vec![monster(Rank::Six), weapon(Rank::Two)]);

        game.equip(0).unwrap();

        assert!(game.weapon().is_none());
        assert_eq!(game.last_action(), "Cannot equip 6 of clubs; it is not a weapon.");
    }

    #[test]
    fn test_drink_heals_and_caps() {
        let mut game = stacked(vec![
            monster(Rank::Four),
            potion(Rank::Three),
            potion(Rank::Nine),
            monster(Rank::Two),
        ]);

        game.fight(0, false).unwrap();
        game.drink(0).unwrap();
        assert_eq!(game.health(), 19);
        assert_eq!(game.last_action(), "Drank 3 of hearts. Health: 16 -> 19.");

        game.drink(0).unwrap();
        assert_eq!(game.health(), 20);
    }

    #[test]
    fn test_drink_non_potion_rejected() {
        let mut game = stacked(vec![Card::joker(1)]);

        game.drink(0).unwrap();

        assert_eq!(game.room().len(), 1);
        assert_eq!(game.last_action(), "Cannot drink Joker (1); it is not a potion.");
    }

    #[test]
    fn test_sell_used_weapon() {
        let mut game = stacked(vec![
            weapon(Rank::Six),
            monster(Rank::Ten),
            monster(Rank::Three),
            Card::joker(1),
            monster(Rank::Ace),
            monster(Rank::King),
        ]);

        game.equip(0).unwrap();
        game.fight(0, true).unwrap(); // 10 - 6 = 4 damage
        game.fight(0, true).unwrap(); // 3 - 6 -> 0 damage; refill draws AC, KC
        assert_eq!(game.health(), 16);
        assert_eq!(game.weapon_slain_values(), &[10, 3]);

        let merchant = game.room().iter().position(Card::is_merchant).unwrap();
        game.sell(merchant).unwrap();

        assert_eq!(game.health(), 19);
        assert!(game.weapon().is_none());
        assert!(game.weapon_slain_values().is_empty());
        assert!(game.consumed().contains(&weapon(Rank::Six)));
        assert!(game.consumed().contains(&Card::joker(1)));
        assert_eq!(
            game.last_action(),
            "Sold 6 of diamonds to Merchant for 3 HP. Health: 16 -> 19."
        );
    }

    #[test]
    fn test_sell_unused_weapon_for_face_value() {
        let mut game = stacked(vec![
            monster(Rank::Nine),
            weapon(Rank::Five),
            Card::joker(2),
            monster(Rank::Two),
            potion(Rank::Two),
        ]);

        game.fight(0, false).unwrap();
        game.equip(0).unwrap();
        game.sell(0).unwrap();

        assert_eq!(game.health(), 16);
        assert!(game.weapon().is_none());
    }

    #[test]
    fn test_sell_without_weapon_keeps_merchant() {
        let mut game = stacked(vec![Card::joker(1), monster(Rank::Two)]);

        game.sell(0).unwrap();

        assert_eq!(game.room().len(), 2);
        assert_eq!(
            game.last_action(),
            "Merchant appears but you have no weapon to sell."
        );
    }

    #[test]
    fn test_sell_to_non_merchant_rejected() {
        let mut game = stacked(vec![potion(Rank::Two)]);

        game.sell(0).unwrap();

        assert_eq!(game.last_action(), "Card 2 of hearts is not a Merchant.");
    }

    #[test]
    fn test_run_then_cooldown() {
        let deck: Vec<Card> = [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
        ]
        .into_iter()
        .map(monster)
        .collect();
        let mut game = stacked(deck);
        let first_room: Vec<Card> = game.room().to_vec();

        game.run().unwrap();

        assert!(!game.can_run());
        assert_eq!(
            game.room(),
            &[monster(Rank::Six), monster(Rank::Seven), monster(Rank::Eight), monster(Rank::Nine)]
        );
        let mut bottom: Vec<Card> = game.deck().iter().copied().collect();
        assert_eq!(bottom.len(), 4);
        bottom.sort_by_key(|c| c.value());
        assert_eq!(bottom, first_room);

        let room_before = game.room().to_vec();
        game.run().unwrap();

        assert_eq!(game.room(), &room_before[..]);
        assert_eq!(game.last_action(), "You cannot run twice in a row!");
        assert!(!game.history()[1].accepted);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut game = stacked(vec![monster(Rank::Two), potion(Rank::Two)]);
        let message = game.last_action().to_string();

        for action in [
            Action::Fight { index: 2, use_weapon: false },
            Action::Equip { index: 5 },
            Action::Drink { index: 2 },
            Action::Sell { index: 2 },
        ] {
            let err = game.apply(action).unwrap_err();
            assert!(matches!(err, GameError::RoomIndexOutOfRange { len: 2, .. }));
        }

        assert_eq!(game.last_action(), message);
        assert!(game.history().is_empty());
        assert_eq!(game.room().len(), 2);
    }

    #[test]
    fn test_history_records_messages() {
        let mut game = stacked(vec![monster(Rank::Two), potion(Rank::Two), monster(Rank::Three)]);

        game.drink(0).unwrap();
        game.fight(0, false).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence, 0);
        assert!(!history[0].accepted);
        assert_eq!(history[1].sequence, 1);
        assert!(history[1].accepted);
        assert_eq!(history[1].message, game.last_action());
    }
}
