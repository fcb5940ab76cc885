//! Test utilities and fixtures for strata development.
//!
//! Provides an invariant checker for the region table, the alphabet
//! fixture (26 five-byte blocks tagged `A`..`Z`), and a deterministic
//! churn workload for stress tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod churn;

pub use churn::{churn_workload, run_churn, ChurnOp, ChurnOutcome};

use strata_arena::{Address, Region, RegionAllocator};

/// Number of blocks in the alphabet fixture.
pub const ALPHABET_BLOCKS: usize = 26;

/// Size of each alphabet block in bytes.
pub const ALPHABET_BLOCK_SIZE: usize = 5;

/// Check that the table is sorted, disjoint, in bounds and within its cap.
///
/// Returns a description of the first violation found.
pub fn check_table_invariants(alloc: &RegionAllocator) -> Result<(), String> {
    let regions = alloc.table().as_slice();
    if regions.len() > alloc.max_regions() {
        return Err(format!(
            "{} live regions exceed max_regions {}",
            regions.len(),
            alloc.max_regions()
        ));
    }
    for (i, pair) in regions.windows(2).enumerate() {
        if pair[0].start() >= pair[1].start() {
            return Err(format!(
                "entries {i} and {} out of order: {} then {}",
                i + 1,
                pair[0],
                pair[1]
            ));
        }
        if pair[0].overlaps(&pair[1]) {
            return Err(format!(
                "entries {i} and {} overlap: {} and {}",
                i + 1,
                pair[0],
                pair[1]
            ));
        }
    }
    if let Some(zero) = regions.iter().find(|r| r.size() == 0) {
        return Err(format!("zero-sized region {zero}"));
    }
    let end = regions.last().map_or(0, Region::end);
    if end > alloc.capacity() {
        return Err(format!(
            "last region ends at {end}, past capacity {}",
            alloc.capacity()
        ));
    }
    Ok(())
}

/// Panic with a readable message if any table invariant is broken.
pub fn assert_table_invariants(alloc: &RegionAllocator) {
    if let Err(violation) = check_table_invariants(alloc) {
        panic!("region table invariant violated: {violation}\n{}", alloc.report());
    }
}

/// Allocate 26 five-byte blocks and tag the first byte of each `A`..`Z`.
pub fn alphabet_blocks(alloc: &mut RegionAllocator) -> Vec<Address> {
    (0..ALPHABET_BLOCKS)
        .map(|i| {
            let addr = alloc
                .allocate(ALPHABET_BLOCK_SIZE)
                .expect("empty default arena holds the alphabet");
            alloc.block_mut(addr).expect("just allocated")[0] = b'A' + i as u8;
            addr
        })
        .collect()
}

/// Offsets of every live region, for compact assertions.
pub fn offsets(alloc: &RegionAllocator) -> Vec<usize> {
    alloc.regions().map(Region::start).collect()
}
