mod action;
mod command;
mod contracts;
mod invariants;
mod render;
mod rules;
#[cfg(test)]
mod test_support;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use command::{normalize, parse_command, CommandReader, MalformedCommand, PlayerCommand, QUIT_KEYWORD};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{
    DiskConservationInvariant, HanoiInvariants, HistoryReplayInvariant, Invariant,
    InvariantSet, InvariantViolation, StrictlyDecreasingInvariant,
};
pub use render::{render, render_lines};
pub use rules::{is_solved, minimum_moves, solved_tower, validate_move};
pub use types::{Disk, Peg, Towers};
pub use typestate::{GameInProgress, GameResult, GameSetup, GameSolved};
