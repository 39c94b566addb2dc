//! Phase-specific typestate structs for the Tower of Hanoi.
//!
//! Each phase is its own type. A `GameSolved` has no `make_move`, so a
//! finished puzzle cannot be played further.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{Peg, Towers};
use std::num::NonZeroU8;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: every disk on peg A, nothing moved yet.
#[derive(Debug, Clone)]
pub struct GameSetup {
    towers: Towers,
}

impl GameSetup {
    /// Creates a new game with `disk_count` disks.
    #[instrument]
    pub fn new(disk_count: NonZeroU8) -> Self {
        Self {
            towers: Towers::initialize(disk_count),
        }
    }

    /// Returns the towers.
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Starts the game (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            towers: self.towers,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: accepts moves until the stack is rebuilt on B or C.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) towers: Towers,
    pub(super) history: Vec<Move>,
}

impl GameInProgress {
    /// Checks a move against the current towers without applying it.
    #[instrument(skip(self))]
    pub fn check_move(&self, action: &Move) -> Result<(), MoveError> {
        MoveContract::pre(self, action)
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.towers.transfer(action.from(), action.to());
        game.history.push(action);
        debug!(%action, moves = game.history.len(), "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        if super::rules::is_solved(&game.towers) {
            return Ok(GameResult::Solved(GameSolved {
                towers: game.towers,
                history: game.history,
            }));
        }

        Ok(GameResult::InProgress(game))
    }

    /// Returns the towers.
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns every move currently legal, in token order.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Move> {
        Peg::ALL
            .into_iter()
            .flat_map(|from| Peg::ALL.into_iter().filter_map(move |to| Move::between(from, to)))
            .filter(|action| self.check_move(action).is_ok())
            .collect()
    }

    /// Replays moves from the starting configuration.
    #[instrument]
    pub fn replay(disk_count: NonZeroU8, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(disk_count).start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Solved(g) => return Ok(GameResult::Solved(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Solved Phase
// ─────────────────────────────────────────────────────────────

/// Game solved: the full stack sits on peg B or C.
#[derive(Debug, Clone)]
pub struct GameSolved {
    towers: Towers,
    history: Vec<Move>,
}

impl GameSolved {
    /// Returns the final towers.
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves it took.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether the puzzle was solved in `2^n - 1` moves.
    pub fn is_optimal(&self) -> bool {
        super::rules::minimum_moves(self.towers.disk_count().get())
            == u128::try_from(self.move_count()).ok()
    }

    /// Restarts with the same number of disks.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.towers.disk_count())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Puzzle solved.
    Solved(GameSolved),
}
