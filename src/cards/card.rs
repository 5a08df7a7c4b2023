//! Cards - identity plus placement state.
//!
//! A `Card` is one of the 52 (suit, rank) combinations. Identity never
//! changes; the only mutable state is the `placed` flag, which the engine
//! sets when it moves the card.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::asset::AssetHandle;

/// Card suit, in deck-building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// English name, as used in asset paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
}

impl Rank {
    /// All ranks in deck-building order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Short token: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
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
        }
    }

    /// 1 for Ace through 13 for King.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A rank token that matches no rank.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown rank token `{0}`")]
pub struct UnknownRank(pub String);

impl FromStr for Rank {
    type Err = UnknownRank;

    /// Parses tokens case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownRank(s.to_string()))
    }
}

/// Card identity. Unique across the 52-card universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardKey {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// A card on the board.
///
/// Cards are moved, never copied between areas, so `Card` is `Clone` but not
/// `Copy`. Use `key()` when only identity matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,

    /// Set once the card has been moved into a target area.
    pub placed: bool,

    /// Presentation asset, if the lookup found one.
    #[serde(default)]
    pub asset: Option<AssetHandle>,
}

impl Card {
    /// Create an unplaced card with no asset.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            placed: false,
            asset: None,
        }
    }

    /// Attach an asset handle.
    #[must_use]
    pub fn with_asset(mut self, asset: Option<AssetHandle>) -> Self {
        self.asset = asset;
        self
    }

    #[must_use]
    pub fn key(&self) -> CardKey {
        CardKey::new(self.suit, self.rank)
    }

    /// Mark the card as placed. The flag only ever goes one way.
    pub fn mark_placed(&mut self) {
        self.placed = true;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.key().fmt(f)
    }
}
