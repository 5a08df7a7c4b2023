//! Asset lookup seam.
//!
//! The engine never loads visuals. It asks an injected `AssetLookup` for an
//! opaque handle per (suit, rank) while building the deck and carries
//! whatever comes back on the card. A missing handle is not an error.

use serde::{Deserialize, Serialize};

use super::card::{Rank, Suit};

/// Opaque reference to a presentation resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a card face to a presentation resource.
pub trait AssetLookup {
    /// Returns `None` when no resource exists for this card.
    fn lookup(&self, suit: Suit, rank: Rank) -> Option<AssetHandle>;
}

impl<F> AssetLookup for F
where
    F: Fn(Suit, Rank) -> Option<AssetHandle>,
{
    fn lookup(&self, suit: Suit, rank: Rank) -> Option<AssetHandle> {
        self(suit, rank)
    }
}

/// Conventional resource path for a card: `Sprites/<Suit>/<rank token>`.
#[must_use]
pub fn sprite_path(suit: Suit, rank: Rank) -> String {
    format!("Sprites/{}/{}", suit.name(), rank.token())
}

/// Default lookup: every card maps to its conventional sprite path.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpritePaths;

impl AssetLookup for SpritePaths {
    fn lookup(&self, suit: Suit, rank: Rank) -> Option<AssetHandle> {
        Some(AssetHandle::new(sprite_path(suit, rank)))
    }
}

/// Lookup that never finds anything. Useful for headless sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAssets;

impl AssetLookup for NoAssets {
    fn lookup(&self, _suit: Suit, _rank: Rank) -> Option<AssetHandle> {
        None
    }
}
