//! Win detection for the Tower of Hanoi.

use super::super::types::full_stack;
use super::super::{Disk, Peg, Towers};
use tracing::instrument;

/// The solved stack `[n, n-1, ..., 1]`, bottom-to-top.
#[instrument]
pub fn solved_tower(disk_count: u8) -> Vec<Disk> {
    full_stack(disk_count)
}

/// Checks whether the puzzle is solved.
///
/// Only pegs B and C are compared against the solved stack. Every game
/// starts with the full stack on A, so A never counts as a win.
#[instrument(skip(towers))]
pub fn is_solved(towers: &Towers) -> bool {
    let target = solved_tower(towers.disk_count().get());
    [Peg::B, Peg::C]
        .into_iter()
        .any(|peg| towers.peg(peg) == target.as_slice())
}

/// Fewest moves that solve a game of `disk_count` disks (`2^n - 1`).
///
/// Returns `None` when the count does not fit in a `u128` (128 disks or more).
pub fn minimum_moves(disk_count: u8) -> Option<u128> {
    1u128
        .checked_shl(u32::from(disk_count))
        .map(|power| power - 1)
}
