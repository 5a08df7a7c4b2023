//! Riffle shuffle.
//!
//! Each pass cuts the deck into a left half (the first ⌊n/2⌋ cards) and a
//! right half (the rest, one longer for odd n), then interleaves them in
//! packets of 1 or 2 cards, left packet first. When one half runs out, the
//! rest of the other half follows in order.
//!
//! This is an interleave, not a uniform shuffle: cards from the same half
//! keep their relative order within a pass.

use tracing::debug;

use crate::core::GameRng;

/// Supplies riffle packet sizes.
///
/// Sizes outside `1..=2` are clamped into that range.
pub trait PacketSource {
    fn packet_size(&mut self) -> usize;
}

impl PacketSource for GameRng {
    fn packet_size(&mut self) -> usize {
        self.gen_range_inclusive(1..=2)
    }
}

/// Run one riffle pass.
pub fn riffle_pass<T, S>(mut cards: Vec<T>, source: &mut S) -> Vec<T>
where
    S: PacketSource + ?Sized,
{
    let total = cards.len();
    let right_half = cards.split_off(total / 2);

    let mut left = cards.into_iter().peekable();
    let mut right = right_half.into_iter().peekable();
    let mut out = Vec::with_capacity(total);

    while left.peek().is_some() && right.peek().is_some() {
        let take = source.packet_size().clamp(1, 2);
        out.extend(left.by_ref().take(take));

        let take = source.packet_size().clamp(1, 2);
        out.extend(right.by_ref().take(take));
    }

    out.extend(left);
    out.extend(right);
    out
}

/// Run `passes` riffle passes, each feeding the next.
pub fn riffle_shuffle<T, S>(mut cards: Vec<T>, passes: usize, source: &mut S) -> Vec<T>
where
    S: PacketSource + ?Sized,
{
    for pass in 0..passes {
        cards = riffle_pass(cards, source);
        debug!(pass = pass + 1, cards = cards.len(), "Riffle pass complete");
    }
    cards
}
