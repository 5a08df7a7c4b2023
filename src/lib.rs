//! # rust-patience
//!
//! A deterministic engine for a single-player rank-clock patience game.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never renders. A presentation layer drives it
//!    through four operations and listens through a `GameObserver`.
//!
//! 2. **Nothing is fatal**: Every operation either succeeds or returns a
//!    `PlayError` having left the session untouched.
//!
//! 3. **Reproducible**: Shuffles come from a seeded, forkable ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Board configuration, errors, RNG
//! - `cards`: Suits, ranks, cards, asset lookup
//! - `deck`: Deck building and the riffle shuffle
//! - `board`: Areas and the board that owns every card
//! - `rules`: Placement resolver and win/loss evaluator
//! - `events`: Observer contract toward the presentation layer
//! - `engine`: The game session state machine

pub mod core;
pub mod cards;
pub mod deck;
pub mod board;
pub mod rules;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    AreaIndex, BoardConfig, DealLayout,
    ConfigError, PlayError,
    GameRng, GameRngState,
};

pub use crate::cards::{AssetHandle, AssetLookup, Card, CardKey, Rank, Suit, SpritePaths, NoAssets};

pub use crate::deck::{build_deck, riffle_shuffle, PacketSource, DECK_SIZE};

pub use crate::board::{Area, Board, StackPosition};

pub use crate::rules::{evaluate, BoardScan, Outcome, PlacementResolver};

pub use crate::events::{BackingSlot, EventLog, GameEvent, GameObserver, NullObserver};

pub use crate::engine::{CardMove, PatienceGame, PatienceGameBuilder, RoundPhase};
