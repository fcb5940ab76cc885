//! Benchmark profiles for the strata region allocator.
//!
//! - [`packed_profile`]: `n` equal blocks laid end to end, no gaps
//! - [`comb_profile`]: the packed layout with every other block freed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_arena::{Address, ArenaConfig, RegionAllocator};

/// Build an allocator holding `n` blocks of `size` bytes packed from the base.
///
/// The arena is sized to fit the blocks plus the same again as headroom,
/// and the table to `2 * n` regions.
pub fn packed_profile(n: usize, size: usize) -> (RegionAllocator, Vec<Address>) {
    let config = ArenaConfig::new(2 * n * size, 2 * n);
    let mut alloc = RegionAllocator::new(config).expect("profile config is non-zero");
    let blocks = (0..n)
        .map(|_| alloc.allocate(size).expect("profile fits its arena"))
        .collect();
    (alloc, blocks)
}

/// Build a packed profile and free every odd-indexed block.
///
/// Leaves `n / 2` gaps of exactly `size` bytes. Requests of `size` skip
/// them all and go to the tail; requests of `size - 1` take the first.
pub fn comb_profile(n: usize, size: usize) -> (RegionAllocator, Vec<Address>) {
    let (mut alloc, blocks) = packed_profile(n, size);
    let mut kept = Vec::with_capacity(n - n / 2);
    for (i, addr) in blocks.into_iter().enumerate() {
        if i % 2 == 1 {
            alloc.free(addr).expect("freeing a profile block");
        } else {
            kept.push(addr);
        }
    }
    (alloc, kept)
}
