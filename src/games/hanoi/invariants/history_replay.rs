//! History invariant: the towers are exactly what the move history produces.

use super::super::{GameInProgress, Towers};
use super::Invariant;

/// Invariant: replaying the history from the starting stack reproduces
/// the current towers, with every step legal.
pub struct HistoryReplayInvariant;

impl Invariant<GameInProgress> for HistoryReplayInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Towers::initialize(game.towers().disk_count());

        for mov in game.history() {
            if super::super::rules::validate_move(&reconstructed, mov.from(), mov.to()).is_err() {
                return false;
            }
            reconstructed.transfer(mov.from(), mov.to());
        }

        reconstructed == *game.towers()
    }

    fn description() -> &'static str {
        "Towers match a legal replay of the move history"
    }
}
