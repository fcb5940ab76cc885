//! Addresses handed out by the allocator.
//!
//! An [`Address`] is the arena's base address plus a byte offset. Callers
//! hold addresses; the allocator translates them back to offsets on every
//! `free` and block lookup.

use std::fmt;

/// An absolute address inside (or, when forged, outside) an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct Address(pub usize);

impl Address {
    /// The address `offset` bytes past `self`, wrapping at `usize::MAX`.
    ///
    /// A wrapped address lies outside every arena, so lookups reject it.
    pub fn offset_by(self, offset: usize) -> Self {
        Self(self.0.wrapping_add(offset))
    }

    /// Byte distance from `base` to `self`, or `None` if `self` lies below `base`.
    pub fn offset_from(self, base: Address) -> Option<usize> {
        self.0.checked_sub(base.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for Address {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
