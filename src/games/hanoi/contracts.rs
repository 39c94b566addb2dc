//! Contract-based validation for the Tower of Hanoi.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{HanoiInvariants, InvariantSet};
use super::typestate::GameInProgress;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the move obeys the stacking rules.
pub struct LegalMove;

impl LegalMove {
    /// Validates the move against the current towers.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        super::rules::validate_move(game.towers(), mov.from(), mov.to())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Source peg holds a disk
/// - Moving disk is not larger than the destination's top disk
///
/// Postconditions:
/// - Pegs stay strictly decreasing
/// - Disks are conserved
/// - Towers match a replay of the history
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected exactly one new move, history went from {} to {}",
                before.history().len(),
                after.history().len()
            )));
        }

        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::test_support::disks;
    use crate::games::hanoi::{Disk, GameResult, GameSetup, Peg};

    fn mv(token: &str) -> Move {
        Move::from_token(token).unwrap()
    }

    #[test]
    fn test_precondition_legal_move() {
        let game = GameSetup::new(disks(3)).start();
        assert!(MoveContract::pre(&game, &mv("AB")).is_ok());
    }

    #[test]
    fn test_precondition_empty_source() {
        let game = GameSetup::new(disks(3)).start();
        assert_eq!(
            MoveContract::pre(&game, &mv("BA")),
            Err(MoveError::EmptySource(Peg::B))
        );
    }

    #[test]
    fn test_precondition_size_violation() {
        let game = GameSetup::new(disks(3)).start();
        let Ok(GameResult::InProgress(game)) = game.make_move(mv("AB")) else {
            panic!("Expected in-progress game");
        };
        assert_eq!(
            MoveContract::pre(&game, &mv("AB")),
            Err(MoveError::SizeViolation {
                moving: Disk::new(2),
                resting: Disk::new(1),
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new(disks(3)).start();
        if let Ok(GameResult::InProgress(after)) = game.clone().make_move(mv("AC")) {
            assert!(MoveContract::post(&game, &after).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new(disks(3)).start();
        if let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(mv("AC")) {
            after.towers.pegs[Peg::B.index()].push(Disk::new(2));
            assert!(matches!(
                MoveContract::post(&game, &after),
                Err(MoveError::InvariantViolation(_))
            ));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_requires_one_new_move() {
        let game = GameSetup::new(disks(3)).start();
        assert!(MoveContract::post(&game, &game).is_err());
    }
}
