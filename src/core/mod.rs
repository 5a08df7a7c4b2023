//! Core engine types: board configuration, errors, RNG.
//!
//! This module contains the building blocks every other module leans on.
//! The presentation layer configures the board via `BoardConfig` rather than
//! the engine hardcoding its shape.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{AreaIndex, BoardConfig, DealLayout, DEFAULT_SHUFFLE_PASSES, STANDARD_AREA_COUNT};
pub use error::{ConfigError, PlayError};
pub use rng::{GameRng, GameRngState};
