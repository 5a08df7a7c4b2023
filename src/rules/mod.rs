//! Game rules: where cards go and when the round is over.
//!
//! - `placement`: Rank → target area
//! - `evaluator`: Board → optional `Outcome`
//!
//! Both are pure functions of their inputs; the engine owns all mutation.

pub mod evaluator;
pub mod placement;

pub use evaluator::{evaluate, scan, BoardScan, Outcome};
pub use placement::{target_index, PlacementResolver};
