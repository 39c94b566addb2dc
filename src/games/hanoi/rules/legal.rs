//! Move legality for the Tower of Hanoi.

use super::super::{Disk, MoveError, Peg, Towers};
use tracing::{debug, instrument};

/// Decides whether the top disk of `from` may move onto `to`.
///
/// Checked in order:
/// 1. `from` must hold a disk, else [`MoveError::EmptySource`].
/// 2. Any disk may land on an empty peg.
/// 3. The destination's top disk must not be smaller than the moving disk,
///    else [`MoveError::SizeViolation`].
///
/// `from != to` is guaranteed by [`Move`](super::super::Move) and not
/// re-checked here.
#[instrument(skip(towers))]
pub fn validate_move(towers: &Towers, from: Peg, to: Peg) -> Result<(), MoveError> {
    let Some(moving) = towers.top(from) else {
        debug!(%from, "Source peg is empty");
        return Err(MoveError::EmptySource(from));
    };

    let Some(resting) = towers.top(to) else {
        return Ok(());
    };

    if fits_on(moving, resting) {
        Ok(())
    } else {
        debug!(%moving, %resting, "Disk too large for destination");
        Err(MoveError::SizeViolation { moving, resting })
    }
}

/// Whether `moving` may rest directly on `resting`.
fn fits_on(moving: Disk, resting: Disk) -> bool {
    resting >= moving
}
