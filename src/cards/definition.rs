//! Card definitions - suits, ranks and the categories they map to.
//!
//! Scoundrel reads a standard deck through a fixed lens: the suit decides
//! what a card *is* (monster, weapon, potion, merchant) and the rank decides
//! how strong it is. Nothing here is mutable or configurable.

use serde::{Deserialize, Serialize};

/// Card suit. Jokers are modelled as their own suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
}

impl Suit {
    /// The four standard suits, in deck-building order.
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Lowercase name, as used in display labels and asset paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Joker => "joker",
        }
    }

    /// Single-letter suffix for short labels ("10D").
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Joker => 'J',
        }
    }

    /// Category every card of this suit belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Suit::Clubs | Suit::Spades => Category::Monster,
            Suit::Diamonds => Category::Weapon,
            Suit::Hearts => Category::Potion,
            Suit::Joker => Category::Merchant,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank. Jokers carry no rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Number ranks, 2 through 10.
    pub const NUMBERS: [Rank; 9] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    /// Court cards and the ace.
    pub const FACES: [Rank; 4] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

    /// Combat value: pips for number cards, 11-14 for J/Q/K/A.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    /// Is this a J/Q/K/A?
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    /// Label used on the card face: "2".."10", "J", "Q", "K", "A".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Spelling used by the card artwork file names.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a card does when it shows up in a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Costs health to clear.
    Monster,
    /// Can be equipped to soften monster hits.
    Weapon,
    /// Restores health.
    Potion,
    /// Buys the equipped weapon for health.
    Merchant,
}

impl Category {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Monster => "monster",
            Category::Weapon => "weapon",
            Category::Potion => "potion",
            Category::Merchant => "merchant",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
