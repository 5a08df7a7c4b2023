//! A single board area: an ordered stack of cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::AreaIndex;

/// Position for inserting a card into an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackPosition {
    /// Add to top of the stack (drawn next).
    Top,
    /// Add to bottom of the stack (drawn last).
    Bottom,
}

/// An ordered stack of cards.
///
/// Index 0 is the bottom, last index is the top. Most areas hold a handful
/// of cards, so storage is inline up to eight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    index: AreaIndex,
    cards: SmallVec<[Card; 8]>,
}

impl Area {
    #[must_use]
    pub fn new(index: AreaIndex) -> Self {
        Self {
            index,
            cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn index(&self) -> AreaIndex {
        self.index
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that would be drawn next.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn insert(&mut self, card: Card, position: StackPosition) {
        match position {
            StackPosition::Top => self.cards.push(card),
            StackPosition::Bottom => self.cards.insert(0, card),
        }
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove every card, bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Non-empty and every card placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.placed)
    }
}
