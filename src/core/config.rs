//! Board configuration types.
//!
//! The presentation layer configures the engine once, at session setup:
//! - `AreaIndex`: Identifies one of the board's areas
//! - `DealLayout`: Which areas the initial deal spreads across
//! - `BoardConfig`: Combines all configuration
//!
//! The standard board has 13 areas; area 12 is the source (King) area.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of areas on the standard board.
pub const STANDARD_AREA_COUNT: usize = 13;

/// Riffle passes applied to every fresh deck.
pub const DEFAULT_SHUFFLE_PASSES: usize = 3;

/// Area identifier. Index 0 is the Ace area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AreaIndex(pub u8);

impl AreaIndex {
    /// Create a new area index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the index as a `usize` for slice access.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AreaIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Area({})", self.0)
    }
}

/// Which areas receive cards during the deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealLayout {
    /// Round-robin over the rank areas only; the source area stays empty.
    #[default]
    RankAreas,
    /// Round-robin over every area, the source area included (13 piles of 4).
    AllAreas,
}

/// Complete board configuration.
///
/// ```
/// use rust_patience::core::{BoardConfig, DealLayout};
///
/// let config = BoardConfig::standard().with_deal_layout(DealLayout::AllAreas);
/// assert_eq!(config.area_count, 13);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of areas on the board.
    pub area_count: usize,

    /// The source (King) area. Must be the last area.
    pub source_area_index: usize,

    /// Riffle passes per fresh deck.
    pub shuffle_passes: usize,

    /// Deal target areas.
    pub deal_layout: DealLayout,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardConfig {
    /// Create a configuration for an arbitrary board.
    ///
    /// Not validated until `validate` (or the game builder) runs.
    #[must_use]
    pub fn new(area_count: usize, source_area_index: usize) -> Self {
        Self {
            area_count,
            source_area_index,
            shuffle_passes: DEFAULT_SHUFFLE_PASSES,
            deal_layout: DealLayout::default(),
        }
    }

    /// The standard 13-area board with area 12 as the source.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_AREA_COUNT, STANDARD_AREA_COUNT - 1)
    }

    /// Set the number of riffle passes.
    #[must_use]
    pub fn with_shuffle_passes(mut self, passes: usize) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Set the deal layout.
    #[must_use]
    pub fn with_deal_layout(mut self, layout: DealLayout) -> Self {
        self.deal_layout = layout;
        self
    }

    /// Check that the area count and source index describe a usable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.area_count < 2 || self.area_count > usize::from(u8::MAX) {
            return Err(ConfigError::AreaCount { count: self.area_count });
        }
        if self.source_area_index >= self.area_count {
            return Err(ConfigError::SourceOutOfRange {
                source_index: self.source_area_index,
                area_count: self.area_count,
            });
        }
        if self.source_area_index != self.rank_area_count() {
            return Err(ConfigError::SourceNotLast {
                source_index: self.source_area_index,
            });
        }
        Ok(())
    }

    /// The source area.
    #[must_use]
    pub fn source_area(&self) -> AreaIndex {
        AreaIndex::new(self.source_area_index as u8)
    }

    /// Number of rank areas (every area except the source).
    #[must_use]
    pub fn rank_area_count(&self) -> usize {
        self.area_count.saturating_sub(1)
    }

    /// Areas that receive cards during the deal, in round-robin order.
    #[must_use]
    pub fn deal_areas(&self) -> Vec<AreaIndex> {
        let end = match self.deal_layout {
            DealLayout::RankAreas => self.rank_area_count(),
            DealLayout::AllAreas => self.area_count,
        };
        (0..end).map(|i| AreaIndex::new(i as u8)).collect()
    }
}
