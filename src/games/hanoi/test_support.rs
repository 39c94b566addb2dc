//! Shared helpers for unit tests.

use std::num::NonZeroU8;

/// Disk count for tests; panics on zero.
pub(crate) fn disks(n: u8) -> NonZeroU8 {
    NonZeroU8::new(n).expect("test disk count must be non-zero")
}
