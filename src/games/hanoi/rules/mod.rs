//! Game rules for the Tower of Hanoi.
//!
//! Pure functions over [`Towers`](super::Towers): move legality and the
//! win check. Nothing here mutates state.

pub mod legal;
pub mod win;

pub use legal::validate_move;
pub use win::{is_solved, minimum_moves, solved_tower};
