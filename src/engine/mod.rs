//! Game state engine.
//!
//! `PatienceGame` orchestrates a session: it builds and shuffles the deck,
//! deals, draws, and evaluates after every move. Collaborators (observer,
//! asset lookup, RNG seed) are injected through `PatienceGameBuilder`.
//!
//! ## Round lifecycle
//!
//! `Idle` → `start_round` → `Started` → `deal_round` → `Dealt`.
//! `draw_next` works in either started phase; `restart` returns to `Idle`.

mod session;

pub use session::{CardMove, PatienceGame, PatienceGameBuilder, RoundPhase};
