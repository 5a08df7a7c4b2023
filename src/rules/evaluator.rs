//! Win/loss evaluation.
//!
//! Runs after every move. Empty areas are ignored. An area is *complete*
//! when every card in it is placed.
//!
//! - Every card on the board placed: `Victory`
//! - Otherwise, any complete area: `Defeat`
//! - Otherwise the game continues
//!
//! Victory is checked first. An all-empty board counts as every card placed.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Result of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    #[must_use]
    pub fn is_victory(self) -> bool {
        self == Outcome::Victory
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Victory => f.write_str("victory"),
            Outcome::Defeat => f.write_str("defeat"),
        }
    }
}

/// The two facts the decision is made from, gathered in one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardScan {
    pub all_cards_placed: bool,
    pub any_area_complete: bool,
}

impl BoardScan {
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        if self.all_cards_placed {
            Some(Outcome::Victory)
        } else if self.any_area_complete {
            Some(Outcome::Defeat)
        } else {
            None
        }
    }
}

/// Scan every area of the board.
#[must_use]
pub fn scan(board: &Board) -> BoardScan {
    let mut all_cards_placed = true;
    let mut any_area_complete = false;

    for area in board.areas().iter().filter(|a| !a.is_empty()) {
        if area.is_complete() {
            any_area_complete = true;
        } else {
            all_cards_placed = false;
        }
    }

    BoardScan {
        all_cards_placed,
        any_area_complete,
    }
}

/// Decide the round's outcome, if any.
#[must_use]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    scan(board).outcome()
}
