//! Deck construction.

use tracing::warn;

use crate::cards::{sprite_path, AssetLookup, Card, Rank, Suit};

/// Cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// Build the 52-card deck in suit-major, rank-minor order.
///
/// Each card's asset comes from `assets`. A missing asset is logged and the
/// card is created without one.
pub fn build_deck(assets: &dyn AssetLookup) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let asset = assets.lookup(suit, rank);
            if asset.is_none() {
                warn!(%suit, %rank, path = %sprite_path(suit, rank), "No asset for card");
            }
            deck.push(Card::new(suit, rank).with_asset(asset));
        }
    }

    deck
}
