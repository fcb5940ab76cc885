//! Fixed-size backing storage.
//!
//! An [`Arena`] is a zero-initialised byte buffer allocated once at its
//! full capacity. It holds no bookkeeping of its own: which bytes are live
//! is decided entirely by the region table.

use crate::address::Address;

/// Contiguous, fixed-capacity byte storage addressed by offset.
///
/// The buffer is never resized, so its base address is stable for the
/// arena's lifetime even when the `Arena` value itself moves.
pub struct Arena {
    /// Backing storage. Allocated to full capacity at creation.
    data: Box<[u8]>,
}

impl Arena {
    /// Create a zero-initialised arena of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
        }
    }

    /// Address of the first byte.
    pub fn base(&self) -> Address {
        Address(self.data.as_ptr() as usize)
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Absolute address of `offset`.
    pub fn address_of(&self, offset: usize) -> Address {
        self.base().offset_by(offset)
    }

    /// Offset of `address`, or `None` if it lies outside the arena.
    pub fn offset_of(&self, address: Address) -> Option<usize> {
        address
            .offset_from(self.base())
            .filter(|&offset| offset < self.capacity())
    }

    /// Shared view of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the capacity.
    pub fn slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.data[offset..offset + len]
    }

    /// Mutable view of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the capacity.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.data[offset..offset + len]
    }
}
