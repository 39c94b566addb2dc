//! Game implementations.

pub mod hanoi;
