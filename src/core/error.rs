//! Error types.
//!
//! Nothing here is fatal. A `PlayError` means the requested operation was a
//! no-op and left the session untouched; the game simply does not advance.

use thiserror::Error;

use super::config::AreaIndex;

/// Why a game operation did nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("a round is already in progress; restart first")]
    RoundInProgress,

    #[error("no round has been started")]
    RoundNotStarted,

    #[error("the round has already been dealt")]
    AlreadyDealt,

    #[error("cannot deal after cards have been drawn this round")]
    DealAfterDraw,

    #[error("the source area is empty and no card has been moved yet")]
    EmptySource,

    #[error("{area} has no cards to move")]
    EmptyArea { area: AreaIndex },

    #[error("rank `{token}` has no area on this board")]
    UnresolvableRank { token: String },
}

impl PlayError {
    /// Unresolvable ranks indicate bad data rather than a player action out of order.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, PlayError::UnresolvableRank { .. })
    }
}

/// Invalid board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs between 2 and 255 areas, got {count}")]
    AreaCount { count: usize },

    #[error("source area {source_index} is outside a board of {area_count} areas")]
    SourceOutOfRange { source_index: usize, area_count: usize },

    #[error("source area {source_index} must be the last area")]
    SourceNotLast { source_index: usize },
}
