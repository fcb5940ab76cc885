//! Integration test: the alphabet walk-through.
//!
//! Allocates 26 five-byte blocks, frees two in the middle, and re-allocates
//! two four-byte blocks. Checks addresses, table order, and that reused
//! bytes are handed back unzeroed.

use strata_arena::{Address, RegionAllocator};
use strata_test_utils::{alphabet_blocks, assert_table_invariants, offsets};

fn offset(alloc: &RegionAllocator, addr: Address) -> usize {
    addr.offset_from(alloc.base()).unwrap()
}

#[test]
fn alphabet_blocks_are_packed_from_base() {
    let mut alloc = RegionAllocator::default();
    let blocks = alphabet_blocks(&mut alloc);

    for (i, &addr) in blocks.iter().enumerate() {
        assert_eq!(offset(&alloc, addr), i * 5);
        assert_eq!(alloc.block(addr).unwrap()[0], b'A' + i as u8);
    }
    assert_eq!(alloc.region_count(), 26);
    assert_table_invariants(&alloc);
}

#[test]
fn freeing_two_blocks_leaves_sorted_table() {
    let mut alloc = RegionAllocator::default();
    let blocks = alphabet_blocks(&mut alloc);

    alloc.free(blocks[10]).unwrap();
    alloc.free(blocks[15]).unwrap();

    assert_eq!(alloc.region_count(), 24);
    assert_table_invariants(&alloc);
    let live = offsets(&alloc);
    assert!(!live.contains(&50));
    assert!(!live.contains(&75));
    assert!(live.contains(&45) && live.contains(&55));
}

#[test]
fn reallocation_fills_gaps_low_to_high() {
    let mut alloc = RegionAllocator::default();
    let blocks = alphabet_blocks(&mut alloc);
    alloc.free(blocks[10]).unwrap();
    alloc.free(blocks[15]).unwrap();

    let k = alloc.allocate(4).unwrap();
    assert_eq!(offset(&alloc, k), 50);

    // The 1-byte remainder at [54, 55) is too small; the next gap is at 75.
    let p = alloc.allocate(4).unwrap();
    assert_eq!(offset(&alloc, p), 75);

    assert_eq!(alloc.region_count(), 26);
    assert_table_invariants(&alloc);

    // Reused bytes still hold the letters written before the free.
    assert_eq!(alloc.block(k).unwrap()[0], b'K');
    assert_eq!(alloc.block(p).unwrap()[0], b'P');
    assert_eq!(alloc.block(k).unwrap().len(), 4);
}

#[test]
fn report_after_reallocation() {
    let mut alloc = RegionAllocator::default();
    let blocks = alphabet_blocks(&mut alloc);
    alloc.free(blocks[10]).unwrap();
    alloc.free(blocks[15]).unwrap();
    alloc.allocate(4).unwrap();
    alloc.allocate(4).unwrap();

    let report = alloc.report();
    assert_eq!(report.base(), alloc.base());
    assert_eq!(report.region_count(), 26);

    let text = report.to_string();
    assert!(text.contains("allocated regions: 26/128"));
    assert!(text.contains("11) start: 50  size: 4"));
    assert!(text.contains("16) start: 75  size: 4"));

    let stats = alloc.stats();
    assert_eq!(stats.used_bytes, 24 * 5 + 2 * 4);
    // [54, 55), [79, 80), and the tail.
    assert_eq!(stats.gap_count, 3);
    assert_eq!(stats.tail_free, 64_000 - 130);
}
