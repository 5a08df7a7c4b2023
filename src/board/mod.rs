//! Board model: areas and the board that owns them.
//!
//! ## Key Types
//!
//! - `Area`: Ordered card stack (index 0 = bottom)
//! - `StackPosition`: Top or bottom insertion
//! - `Board`: Fixed row of areas with a designated source area

pub mod area;
pub mod layout;

pub use area::{Area, StackPosition};
pub use layout::Board;
