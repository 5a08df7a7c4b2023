//! Placement resolver: which area a card of a given rank goes to.
//!
//! | Rank      | Area            |
//! |-----------|-----------------|
//! | Ace       | 0               |
//! | 2..=10    | rank - 1        |
//! | Jack      | 10              |
//! | Queen     | 11              |
//! | King      | source area (12)|

use crate::cards::Rank;
use crate::core::{AreaIndex, BoardConfig, PlayError};

/// Table index for a rank on the standard board.
#[must_use]
pub const fn target_index(rank: Rank) -> usize {
    rank as usize
}

/// Resolves ranks to areas of a configured board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementResolver {
    source: AreaIndex,
}

impl PlacementResolver {
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            source: config.source_area(),
        }
    }

    /// Resolve a rank to its area.
    ///
    /// Kings always go to the source area. Other ranks fail when the board
    /// has no rank area at their table index.
    pub fn resolve(&self, rank: Rank) -> Result<AreaIndex, PlayError> {
        if rank == Rank::King {
            return Ok(self.source);
        }
        let index = target_index(rank);
        if index >= self.source.get() {
            return Err(PlayError::UnresolvableRank {
                token: rank.token().to_string(),
            });
        }
        Ok(AreaIndex::new(index as u8))
    }

    /// Resolve a textual rank token such as `"Q"` or `"7"`.
    pub fn resolve_token(&self, token: &str) -> Result<AreaIndex, PlayError> {
        let rank: Rank = token.parse().map_err(|_| PlayError::UnresolvableRank {
            token: token.to_string(),
        })?;
        self.resolve(rank)
    }
}
