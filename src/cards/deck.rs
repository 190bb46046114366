//! Dungeon deck composition.
//!
//! The dungeon is a standard deck plus two jokers, minus the red court
//! cards and red aces. Monster suits keep their full rank set; weapon and
//! potion suits keep only 2-10.

use super::card::Card;
use super::definition::{Category, Rank, Suit};

/// Number of cards in a freshly built dungeon: 13 + 13 + 9 + 9 + 2.
pub const DUNGEON_DECK_SIZE: usize = 46;

/// Build the unshuffled dungeon deck.
///
/// Order is suit by suit (hearts, diamonds, clubs, spades), ascending rank,
/// then joker 1 and joker 2. Callers shuffle it.
#[must_use]
pub fn dungeon_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DUNGEON_DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::NUMBERS {
            deck.push(Card::standard(suit, rank));
        }
        if suit.category() == Category::Monster {
            for rank in Rank::FACES {
                deck.push(Card::standard(suit, rank));
            }
        }
    }

    deck.push(Card::joker(1));
    deck.push(Card::joker(2));
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(deck: &[Card], category: Category) -> usize {
        deck.iter().filter(|c| c.category() == category).count()
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(dungeon_deck().len(), DUNGEON_DECK_SIZE);
    }

    #[test]
    fn test_deck_composition() {
        let deck = dungeon_deck();

        assert_eq!(count(&deck, Category::Monster), 26);
        assert_eq!(count(&deck, Category::Weapon), 9);
        assert_eq!(count(&deck, Category::Potion), 9);
        assert_eq!(count(&deck, Category::Merchant), 2);
    }

    #[test]
    fn test_no_red_faces() {
        let deck = dungeon_deck();
        let red_faces = deck.iter().filter(|c| {
            matches!(c.suit(), Suit::Hearts | Suit::Diamonds)
                && c.rank().map_or(false, Rank::is_face)
        });
        assert_eq!(red_faces.count(), 0);
    }

    #[test]
    fn test_monster_values() {
        let deck = dungeon_deck();
        let mut spades: Vec<i32> = deck
            .iter()
            .filter(|c| c.suit() == Suit::Spades)
            .filter_map(Card::value)
            .collect();
        spades.sort_unstable();
        assert_eq!(spades, (2..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_two_distinct_jokers() {
        let deck = dungeon_deck();
        let ids: Vec<_> = deck.iter().filter_map(Card::joker_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
