//! First-class action types for the Tower of Hanoi.
//!
//! A move names a source and destination peg. It is a domain event that
//! can be validated against a position before it is applied.

use super::{Disk, Peg};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single disk transfer from the top of one peg to the top of another.
///
/// The two pegs always differ; use [`Move::between`] or
/// [`Move::from_token`] to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Peg,
    to: Peg,
}

impl Move {
    /// Every legal move token, in the order they are listed to the player.
    pub const TOKENS: [&'static str; 6] = ["AB", "AC", "BA", "BC", "CA", "CB"];

    /// Creates a move between two distinct pegs.
    ///
    /// Returns `None` when `from == to`.
    #[instrument]
    pub fn between(from: Peg, to: Peg) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }

    /// Parses one of the six two-letter tokens (`"AB"`, `"CA"`, ...).
    ///
    /// The token must already be normalized to upper case with no
    /// surrounding whitespace.
    #[instrument]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (Some(from), Some(to), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        Self::between(Peg::from_label(from)?, Peg::from_label(to)?)
    }

    /// Source peg.
    pub fn from(&self) -> Peg {
        self.from
    }

    /// Destination peg.
    pub fn to(&self) -> Peg {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from.label(), self.to.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source peg has no disk to move.
    #[display("You selected a tower with no disks.")]
    EmptySource(Peg),

    /// The move would rest a larger disk on a smaller one.
    #[display("Can't put larger disks on top of smaller ones.")]
    SizeViolation {
        /// Disk being moved.
        moving: Disk,
        /// Top disk of the destination peg.
        resting: Disk,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
