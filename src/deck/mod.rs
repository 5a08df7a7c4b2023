//! Deck building and shuffling.
//!
//! ## Pipeline
//!
//! `build_deck` produces the 52 cards in a fixed order; `riffle_shuffle`
//! reorders them. The engine runs both at the start of every round.

pub mod builder;
pub mod shuffle;

pub use builder::{build_deck, DECK_SIZE};
pub use shuffle::{riffle_pass, riffle_shuffle, PacketSource};
