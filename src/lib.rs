//! Strictly Hanoi library - a type-safe Tower of Hanoi
//!
//! The puzzle: move a stack of graduated disks from peg A to another peg,
//! one disk per move, never resting a larger disk on a smaller one.
//!
//! # Architecture
//!
//! - **Games**: Tower of Hanoi state, rules, contracts and invariants
//! - **Session**: The interactive render / read / move / check loop
//! - **Config**: Disk count from the command line or a TOML file
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroU8;
//! use strictly_hanoi::{GameResult, GameSetup, Move};
//!
//! let game = GameSetup::new(NonZeroU8::MIN).start();
//! let action = Move::from_token("AC").expect("valid token");
//! match game.make_move(action) {
//!     Ok(GameResult::Solved(solved)) => assert_eq!(solved.move_count(), 1),
//!     other => panic!("one disk should be solved in one move: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, HanoiConfig, DEFAULT_DISKS, MAX_DISKS};

// Crate-level exports - Session
pub use session::{GameSession, SessionOutcome};

// Crate-level exports - Game types
pub use games::hanoi::{
    CommandReader, Contract, Disk, DiskConservationInvariant, GameInProgress, GameResult,
    GameSetup, GameSolved, HanoiInvariants, HistoryReplayInvariant, Invariant, InvariantSet,
    InvariantViolation, LegalMove, MalformedCommand, Move, MoveContract, MoveError, Peg,
    PlayerCommand, QUIT_KEYWORD, StrictlyDecreasingInvariant, Towers, is_solved, minimum_moves,
    normalize, parse_command, render, render_lines, solved_tower, validate_move,
};
