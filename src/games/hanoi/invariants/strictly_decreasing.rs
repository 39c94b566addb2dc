//! Ordering invariant: no disk ever rests on a smaller one.

use super::super::{GameInProgress, Peg, Towers};
use super::Invariant;

/// Invariant: every peg is strictly decreasing from bottom to top.
pub struct StrictlyDecreasingInvariant;

impl StrictlyDecreasingInvariant {
    /// Checks the ordering directly on a set of towers.
    pub fn holds_for(towers: &Towers) -> bool {
        Peg::ALL
            .into_iter()
            .all(|peg| towers.peg(peg).windows(2).all(|pair| pair[0] > pair[1]))
    }
}

impl Invariant<GameInProgress> for StrictlyDecreasingInvariant {
    fn holds(game: &GameInProgress) -> bool {
        Self::holds_for(game.towers())
    }

    fn description() -> &'static str {
        "Every peg is strictly decreasing bottom-to-top"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::test_support::disks;
    use crate::games::hanoi::{Disk, GameSetup};

    #[test]
    fn test_new_game_holds() {
        let game = GameSetup::new(disks(5)).start();
        assert!(StrictlyDecreasingInvariant::holds(&game));
    }

    #[test]
    fn test_equal_sizes_violate() {
        let mut game = GameSetup::new(disks(2)).start();
        game.towers.pegs[Peg::C.index()] = vec![Disk::new(2), Disk::new(2)];
        assert!(!StrictlyDecreasingInvariant::holds(&game));
    }

    #[test]
    fn test_larger_on_smaller_violates() {
        let mut game = GameSetup::new(disks(3)).start();
        game.towers.pegs[Peg::A.index()] = vec![Disk::new(3), Disk::new(1), Disk::new(2)];
        assert!(!StrictlyDecreasingInvariant::holds(&game));
    }
}
