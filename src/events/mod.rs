//! Observer contract between the engine and its presentation layer.
//!
//! The engine never reaches for a global event bus. It is handed a
//! `GameObserver` at construction and notifies it directly.

pub mod observer;

pub use observer::{BackingSlot, EventLog, GameEvent, GameObserver, NullObserver};
