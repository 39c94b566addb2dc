//! Core domain types for the Tower of Hanoi.

use super::invariants::{
    DiskConservationInvariant, Invariant, InvariantViolation, StrictlyDecreasingInvariant,
};
use super::GameInProgress;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the three pegs, left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Peg {
    /// Left peg; every game starts with all disks here.
    A,
    /// Middle peg.
    B,
    /// Right peg.
    C,
}

impl Peg {
    /// All pegs in display order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Index of this peg in left-to-right order (0-2).
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Single-letter label used on screen and in commands.
    pub fn label(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }

    /// Parses a peg from its letter (case-sensitive, upper case).
    #[instrument]
    pub fn from_label(c: char) -> Option<Peg> {
        Peg::iter().find(|peg| peg.label() == c)
    }
}

/// A disk, identified by its size (1 = smallest).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}", _0)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u8) -> Self {
        Self(size)
    }

    /// Returns the disk's size.
    pub fn size(self) -> u8 {
        self.0
    }
}

/// The three pegs and the disks stacked on them.
///
/// Each peg is stored bottom-to-top: the last element is the top disk,
/// the only one that can move.
///
/// Deserialized towers are checked: the disk count must be non-zero, the
/// pegs must hold exactly disks `1..=n`, and no disk may rest on a smaller one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TowersRepr")]
pub struct Towers {
    pub(super) pegs: [Vec<Disk>; 3],
    disk_count: NonZeroU8,
}

/// Unchecked wire form of [`Towers`].
#[derive(Deserialize)]
struct TowersRepr {
    pegs: [Vec<Disk>; 3],
    disk_count: NonZeroU8,
}

impl TryFrom<TowersRepr> for Towers {
    type Error = InvariantViolation;

    fn try_from(repr: TowersRepr) -> Result<Self, Self::Error> {
        let towers = Self {
            pegs: repr.pegs,
            disk_count: repr.disk_count,
        };
        if !StrictlyDecreasingInvariant::holds_for(&towers) {
            return Err(InvariantViolation::new(
                <StrictlyDecreasingInvariant as Invariant<GameInProgress>>::description(),
            ));
        }
        if !DiskConservationInvariant::holds_for(&towers) {
            return Err(InvariantViolation::new(
                <DiskConservationInvariant as Invariant<GameInProgress>>::description(),
            ));
        }
        Ok(towers)
    }
}

impl Towers {
    /// Builds the starting configuration: all disks on peg A, largest at the
    /// bottom, B and C empty.
    #[instrument]
    pub fn initialize(disk_count: NonZeroU8) -> Self {
        Self {
            pegs: [full_stack(disk_count.get()), Vec::new(), Vec::new()],
            disk_count,
        }
    }

    /// Total number of disks in play.
    pub fn disk_count(&self) -> NonZeroU8 {
        self.disk_count
    }

    /// Disks on `peg`, bottom-to-top.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Top (movable) disk on `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// Whether `peg` holds no disks.
    pub fn is_empty(&self, peg: Peg) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// Moves the top disk of `from` onto `to` without checking legality.
    ///
    /// Returns the moved disk, or `None` if `from` was empty.
    pub(super) fn transfer(&mut self, from: Peg, to: Peg) -> Option<Disk> {
        let disk = self.pegs[from.index()].pop()?;
        self.pegs[to.index()].push(disk);
        Some(disk)
    }
}

/// Disks `[n, n-1, ..., 1]`, bottom-to-top.
pub(super) fn full_stack(disk_count: u8) -> Vec<Disk> {
    (1..=disk_count).rev().map(Disk::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::test_support::disks;

    fn sizes(disks: &[Disk]) -> Vec<u8> {
        disks.iter().map(|d| d.size()).collect()
    }

    #[test]
    fn test_initialize_stacks_everything_on_a() {
        for n in 1..=8 {
            let towers = Towers::initialize(disks(n));
            let expected: Vec<u8> = (1..=n).rev().collect();
            assert_eq!(sizes(towers.peg(Peg::A)), expected);
            assert!(towers.is_empty(Peg::B));
            assert!(towers.is_empty(Peg::C));
            assert_eq!(towers.disk_count().get(), n);
        }
    }

    #[test]
    fn test_top_is_smallest_disk() {
        let towers = Towers::initialize(disks(5));
        assert_eq!(towers.top(Peg::A), Some(Disk::new(1)));
        assert_eq!(towers.top(Peg::B), None);
    }

    #[test]
    fn test_transfer_moves_top_disk() {
        let mut towers = Towers::initialize(disks(3));
        assert_eq!(towers.transfer(Peg::A, Peg::C), Some(Disk::new(1)));
        assert_eq!(sizes(towers.peg(Peg::A)), vec![3, 2]);
        assert_eq!(sizes(towers.peg(Peg::C)), vec![1]);
    }

    #[test]
    fn test_transfer_from_empty_peg_is_noop() {
        let mut towers = Towers::initialize(disks(3));
        let before = towers.clone();
        assert_eq!(towers.transfer(Peg::B, Peg::C), None);
        assert_eq!(towers, before);
    }

    #[test]
    fn test_deserialize_accepts_reachable_position() {
        let mut towers = Towers::initialize(disks(3));
        towers.transfer(Peg::A, Peg::C);
        let json = serde_json::to_string(&towers).unwrap();
        let restored: Towers = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, towers);
    }

    #[test]
    fn test_deserialize_rejects_zero_disks() {
        let json = r#"{"pegs":[[],[],[]],"disk_count":0}"#;
        assert!(serde_json::from_str::<Towers>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_small_under_large() {
        let json = r#"{"pegs":[[1,3],[2],[]],"disk_count":3}"#;
        let err = serde_json::from_str::<Towers>(json).unwrap_err();
        assert!(err.to_string().contains("strictly decreasing"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_missing_or_extra_disks() {
        for json in [
            r#"{"pegs":[[3,1],[],[]],"disk_count":3}"#,
            r#"{"pegs":[[3,2,1],[4],[]],"disk_count":3}"#,
            r#"{"pegs":[[2,1],[1],[]],"disk_count":2}"#,
        ] {
            let err = serde_json::from_str::<Towers>(json).unwrap_err();
            assert!(err.to_string().contains("exactly one peg"), "{json}: {err}");
        }
    }

    #[test]
    fn test_peg_labels_round_trip() {
        for peg in Peg::ALL {
            assert_eq!(Peg::from_label(peg.label()), Some(peg));
            assert_eq!(peg.to_string(), peg.label().to_string());
        }
        assert_eq!(Peg::from_label('D'), None);
        assert_eq!(Peg::from_label('a'), None);
    }
}
