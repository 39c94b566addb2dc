//! Conservation invariant: disks are never created, lost, or duplicated.

use super::super::{GameInProgress, Peg, Towers};
use super::Invariant;

/// Invariant: the pegs together hold sizes `1..=n`, each exactly once.
pub struct DiskConservationInvariant;

impl DiskConservationInvariant {
    /// Checks conservation directly on a set of towers.
    pub fn holds_for(towers: &Towers) -> bool {
        let mut sizes: Vec<u8> = Peg::ALL
            .into_iter()
            .flat_map(|peg| towers.peg(peg).iter().map(|d| d.size()))
            .collect();
        sizes.sort_unstable();
        sizes.into_iter().eq(1..=towers.disk_count().get())
    }
}

impl Invariant<GameInProgress> for DiskConservationInvariant {
    fn holds(game: &GameInProgress) -> bool {
        Self::holds_for(game.towers())
    }

    fn description() -> &'static str {
        "Every disk 1..=n is on exactly one peg"
    }
}
