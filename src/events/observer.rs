//! Outbound notifications to the presentation layer.
//!
//! The engine owns one `GameObserver` and calls it synchronously from inside
//! each operation. Every method has a no-op default, so a presentation layer
//! only implements what it reacts to.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKey};
use crate::core::AreaIndex;

/// Presentation-side cover drawn over an area until it is first drawn from.
///
/// Rank areas are numbered from 1 (`slot 1` covers area 0); the source area
/// uses `slot K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackingSlot {
    Area(u8),
    King,
}

impl BackingSlot {
    /// Slot covering `area` on a board whose source area is `source`.
    #[must_use]
    pub fn for_area(area: AreaIndex, source: AreaIndex) -> Self {
        if area == source {
            BackingSlot::King
        } else {
            BackingSlot::Area(area.0 + 1)
        }
    }
}

impl std::fmt::Display for BackingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackingSlot::Area(n) => write!(f, "slot {}", n),
            BackingSlot::King => f.write_str("slot K"),
        }
    }
}

/// Receives engine notifications.
pub trait GameObserver {
    /// A fresh deck sits in the source area; hide the start control.
    fn on_round_started(&mut self) {}

    /// The deck has been dealt; hide the deal control.
    fn on_dealt(&mut self) {}

    /// A card moved. `card` is the card in its new place (already flagged).
    fn on_card_moved(&mut self, _from: AreaIndex, _to: AreaIndex, _card: &Card) {}

    /// Hide the backing slot of the area a draw was taken from.
    fn on_backing_slot_should_hide(&mut self, _area: AreaIndex, _slot: BackingSlot) {}

    /// The round resolved.
    fn on_game_resolved(&mut self, _is_victory: bool) {}

    /// All state was discarded; show the start control again.
    fn on_restarted(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    Dealt,
    CardMoved {
        from: AreaIndex,
        to: AreaIndex,
        card: CardKey,
    },
    BackingSlotHidden {
        area: AreaIndex,
        slot: BackingSlot,
    },
    GameResolved {
        is_victory: bool,
    },
    Restarted,
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Resolution notifications, in order.
    #[must_use]
    pub fn resolutions(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GameResolved { is_victory } => Some(*is_victory),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameObserver for EventLog {
    fn on_round_started(&mut self) {
        self.events.push(GameEvent::RoundStarted);
    }

    fn on_dealt(&mut self) {
        self.events.push(GameEvent::Dealt);
    }

    fn on_card_moved(&mut self, from: AreaIndex, to: AreaIndex, card: &Card) {
        self.events.push(GameEvent::CardMoved {
            from,
            to,
            card: card.key(),
        });
    }

    fn on_backing_slot_should_hide(&mut self, area: AreaIndex, slot: BackingSlot) {
        self.events.push(GameEvent::BackingSlotHidden { area, slot });
    }

    fn on_game_resolved(&mut self, is_victory: bool) {
        self.events.push(GameEvent::GameResolved { is_victory });
    }

    fn on_restarted(&mut self) {
        self.events.push(GameEvent::Restarted);
    }
}
