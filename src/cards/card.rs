//! A single physical card.
//!
//! `Card` is an immutable value. Its `value` and `category` are computed
//! once from suit and rank when the card is made and never change. Only
//! suit, rank and joker id are serialized; the derived fields are rebuilt
//! on deserialization.

use serde::{Deserialize, Serialize};

use super::definition::{Category, Rank, Suit};

/// One playing card.
///
/// ## Example
///
/// ```
/// use scoundrel::cards::{Card, Category, Rank, Suit};
///
/// let card = Card::standard(Suit::Diamonds, Rank::Ten);
/// assert_eq!(card.category(), Category::Weapon);
/// assert_eq!(card.value(), Some(10));
/// assert_eq!(card.short_name(), "10D");
/// assert_eq!(card.to_string(), "10 of diamonds");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CardFace", into = "CardFace")]
pub struct Card {
    suit: Suit,
    rank: Option<Rank>,
    joker_id: Option<u8>,
    value: Option<i32>,
    category: Category,
}

/// Wire form of a card: only the printed face.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct CardFace {
    suit: Suit,
    #[serde(default)]
    rank: Option<Rank>,
    #[serde(default)]
    joker_id: Option<u8>,
}

impl From<CardFace> for Card {
    fn from(face: CardFace) -> Self {
        Card::new(face.suit, face.rank, face.joker_id)
    }
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            joker_id: card.joker_id,
        }
    }
}

impl Card {
    /// Create a card from its printed face.
    ///
    /// Jokers never have a value, whatever rank is passed. A non-joker
    /// without a rank also has no value.
    #[must_use]
    pub fn new(suit: Suit, rank: Option<Rank>, joker_id: Option<u8>) -> Self {
        let value = match (suit, rank) {
            (Suit::Joker, _) => None,
            (_, Some(rank)) => Some(rank.value()),
            (_, None) => None,
        };
        Self {
            suit,
            rank,
            joker_id,
            value,
            category: suit.category(),
        }
    }

    /// Create a ranked card of one of the four standard suits.
    #[must_use]
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self::new(suit, Some(rank), None)
    }

    /// Create a joker. `id` only distinguishes the two joker faces.
    #[must_use]
    pub fn joker(id: u8) -> Self {
        Self::new(Suit::Joker, None, Some(id))
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    #[must_use]
    pub fn joker_id(&self) -> Option<u8> {
        self.joker_id
    }

    /// Combat/heal/equip value. `None` for jokers.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.category == Category::Monster
    }

    #[must_use]
    pub fn is_weapon(&self) -> bool {
        self.category == Category::Weapon
    }

    #[must_use]
    pub fn is_potion(&self) -> bool {
        self.category == Category::Potion
    }

    #[must_use]
    pub fn is_merchant(&self) -> bool {
        self.category == Category::Merchant
    }

    /// Short label such as "10D", "QS" or "Joker".
    #[must_use]
    pub fn short_name(&self) -> String {
        match (self.suit, self.rank) {
            (Suit::Joker, _) => "Joker".to_string(),
            (suit, Some(rank)) => format!("{}{}", rank.label(), suit.initial()),
            (suit, None) => suit.initial().to_string(),
        }
    }

    /// Artwork identifier for the presentation layer.
    ///
    /// `cards/10_diamonds.png`, `cards/queen_spades.png`, `cards/joker_2.png`.
    #[must_use]
    pub fn asset_path(&self) -> String {
        match (self.suit, self.rank) {
            (Suit::Joker, _) => format!("cards/joker_{}.png", self.joker_id.unwrap_or(1)),
            (suit, Some(rank)) => format!("cards/{}_{}.png", rank.asset_name(), suit.name()),
            (suit, None) => format!("cards/{}.png", suit.name()),
        }
    }
}

/// Full label: "10 of diamonds", "Joker (1)".
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.suit, self.rank) {
            (Suit::Joker, _) => match self.joker_id {
                Some(id) => write!(f, "Joker ({})", id),
                None => f.write_str("Joker"),
            },
            (suit, Some(rank)) => write!(f, "{} of {}", rank, suit),
            (suit, None) => write!(f, "card of {}", suit),
        }
    }
}
