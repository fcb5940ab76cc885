//! Deterministic allocate/free workloads.
//!
//! [`churn_workload`] draws a sequence of operations from a ChaCha8 stream
//! seeded by the caller, so the same seed always replays the same
//! workload. [`run_churn`] drives an allocator through it.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_arena::{Address, AllocError, RegionAllocator};

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Allocate this many bytes.
    Allocate(usize),
    /// Free a live block, picked by this value modulo the live count.
    Free(usize),
}

/// What a churn run left behind.
#[derive(Clone, Debug, Default)]
pub struct ChurnOutcome {
    /// Addresses still allocated at the end, in allocation order.
    pub live: Vec<Address>,
    /// Allocations that succeeded.
    pub allocated: usize,
    /// Frees that were performed.
    pub freed: usize,
    /// Allocations refused with `CapacityExhausted`.
    pub refused: usize,
}

/// Generate `len` operations with allocation sizes in `1..=max_size`.
///
/// Roughly three allocations for every two frees, so the table fills over
/// time without ever emptying for long.
pub fn churn_workload(seed: u64, len: usize, max_size: usize) -> Vec<ChurnOp> {
    assert!(max_size > 0, "max_size must be positive");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let roll = rng.next_u64();
            if roll % 5 < 3 {
                ChurnOp::Allocate(1 + (rng.next_u64() % max_size as u64) as usize)
            } else {
                ChurnOp::Free(rng.next_u64() as usize)
            }
        })
        .collect()
}

/// Apply `ops` to `alloc`.
///
/// Frees on an empty live set are skipped. Any error other than
/// `CapacityExhausted` is a bug in the allocator and panics.
pub fn run_churn(alloc: &mut RegionAllocator, ops: &[ChurnOp]) -> ChurnOutcome {
    let mut outcome = ChurnOutcome::default();
    for op in ops {
        match *op {
            ChurnOp::Allocate(size) => match alloc.allocate(size) {
                Ok(addr) => {
                    outcome.live.push(addr);
                    outcome.allocated += 1;
                }
                Err(AllocError::CapacityExhausted { .. }) => outcome.refused += 1,
                Err(other) => panic!("unexpected allocation failure: {other}"),
            },
            ChurnOp::Free(pick) => {
                if outcome.live.is_empty() {
                    continue;
                }
                let addr = outcome.live.remove(pick % outcome.live.len());
                alloc
                    .free(addr)
                    .unwrap_or_else(|e| panic!("free of live block failed: {e}"));
                outcome.freed += 1;
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        assert_eq!(churn_workload(7, 100, 32), churn_workload(7, 100, 32));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(churn_workload(1, 100, 32), churn_workload(2, 100, 32));
    }

    #[test]
    fn sizes_stay_in_range() {
        for op in churn_workload(3, 500, 8) {
            if let ChurnOp::Allocate(size) = op {
                assert!((1..=8).contains(&size));
            }
        }
    }

    #[test]
    fn live_count_matches_allocator() {
        let mut alloc = RegionAllocator::default();
        let outcome = run_churn(&mut alloc, &churn_workload(11, 400, 64));
        assert_eq!(outcome.live.len(), alloc.region_count());
        assert_eq!(outcome.allocated - outcome.freed, outcome.live.len());
    }
}
