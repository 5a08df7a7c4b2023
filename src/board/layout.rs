//! The board: a fixed row of areas.
//!
//! The `Board` owns every card in play. Cards move between areas by value,
//! so a card is always in exactly one area. It supports:
//! - Top/bottom insertion into any area
//! - Moving the top card of one area into another
//! - Card lookup by identity

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::area::{Area, StackPosition};
use crate::cards::{Card, CardKey};
use crate::core::{AreaIndex, BoardConfig, ConfigError};

/// Fixed-size collection of areas with a designated source area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    areas: Vec<Area>,
    source: AreaIndex,
}

impl Board {
    /// Create an empty board shaped by `config`.
    ///
    /// Fails when the config does not describe a usable board, so the
    /// source area always exists and every index fits an `AreaIndex`.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            areas: (0..config.area_count)
                .map(|i| Area::new(AreaIndex::new(i as u8)))
                .collect(),
            source: config.source_area(),
        })
    }

    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn source_index(&self) -> AreaIndex {
        self.source
    }

    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    #[must_use]
    pub fn area(&self, index: AreaIndex) -> Option<&Area> {
        self.areas.get(index.get())
    }

    pub fn area_mut(&mut self, index: AreaIndex) -> Option<&mut Area> {
        self.areas.get_mut(index.get())
    }

    /// The source (King) area.
    #[must_use]
    pub fn source(&self) -> &Area {
        &self.areas[self.source.get()]
    }

    pub fn source_mut(&mut self) -> &mut Area {
        &mut self.areas[self.source.get()]
    }

    /// Add a card to an area. Returns the card back if the area does not exist.
    pub fn place(&mut self, card: Card, index: AreaIndex, position: StackPosition) -> Result<(), Card> {
        match self.area_mut(index) {
            Some(area) => {
                area.insert(card, position);
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Move the top card of `from` into `to` at `position`.
    ///
    /// Returns the moved card in its new place, or `None` (nothing moved) if
    /// either area is missing or `from` is empty.
    pub fn move_top(&mut self, from: AreaIndex, to: AreaIndex, position: StackPosition) -> Option<&mut Card> {
        if self.area(to).is_none() {
            return None;
        }
        let card = self.area_mut(from)?.pop_top()?;
        let target = self.area_mut(to)?;
        target.insert(card, position);

        let slot = match position {
            StackPosition::Top => target.len() - 1,
            StackPosition::Bottom => 0,
        };
        target.cards_mut().get_mut(slot)
    }

    /// Deal `cards` in order round-robin across `targets`, one card per
    /// area per cycle, each onto the top of its area.
    ///
    /// Targets that are not on the board are skipped. With no usable target
    /// the cards stay together in the source area.
    pub fn deal_round_robin(&mut self, cards: Vec<Card>, targets: &[AreaIndex]) {
        let targets: Vec<usize> = targets
            .iter()
            .map(|a| a.get())
            .filter(|&i| i < self.areas.len())
            .collect();

        if targets.is_empty() {
            let source = self.source_mut();
            for card in cards {
                source.insert(card, StackPosition::Top);
            }
            return;
        }

        for (i, card) in cards.into_iter().enumerate() {
            self.areas[targets[i % targets.len()]].insert(card, StackPosition::Top);
        }
    }

    /// Remove every card from every area.
    pub fn clear(&mut self) {
        for area in &mut self.areas {
            area.clear();
        }
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.areas.iter().map(Area::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.iter().all(Area::is_empty)
    }

    /// Every card, area by area, bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.areas.iter().flat_map(|a| a.cards().iter())
    }

    /// Find which area holds a card.
    #[must_use]
    pub fn locate(&self, key: CardKey) -> Option<AreaIndex> {
        self.areas
            .iter()
            .find(|a| a.cards().iter().any(|c| c.key() == key))
            .map(Area::index)
    }

    /// Map every card to the areas holding it.
    ///
    /// On a consistent board each entry has exactly one area.
    #[must_use]
    pub fn census(&self) -> FxHashMap<CardKey, Vec<AreaIndex>> {
        let mut census: FxHashMap<CardKey, Vec<AreaIndex>> = FxHashMap::default();
        for area in &self.areas {
            for card in area.cards() {
                census.entry(card.key()).or_default().push(area.index());
            }
        }
        census
    }
}
