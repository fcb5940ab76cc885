//! Thread-safe handle to a [`RegionAllocator`].
//!
//! The allocator itself has no internal synchronisation. Every call through
//! [`SharedRegionAllocator`] holds one mutex for the whole scan-and-mutate
//! critical section, so concurrent callers never observe a half-updated
//! table.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::address::Address;
use crate::allocator::RegionAllocator;
use crate::config::ArenaConfig;
use crate::error::{AllocError, ConfigError};
use crate::report::{ArenaReport, ArenaStats};

/// A cloneable, lock-protected [`RegionAllocator`].
///
/// Clones share the same arena and table.
#[derive(Clone)]
pub struct SharedRegionAllocator {
    inner: Arc<Mutex<RegionAllocator>>,
}

impl SharedRegionAllocator {
    /// Create a shared allocator from a config.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        RegionAllocator::new(config).map(Self::from)
    }

    /// See [`RegionAllocator::allocate`].
    pub fn allocate(&self, size: usize) -> Result<Address, AllocError> {
        self.lock().allocate(size)
    }

    /// See [`RegionAllocator::free`].
    pub fn free(&self, address: Address) -> Result<(), AllocError> {
        self.lock().free(address)
    }

    /// Number of live regions.
    pub fn region_count(&self) -> usize {
        self.lock().region_count()
    }

    /// See [`RegionAllocator::report`].
    pub fn report(&self) -> ArenaReport {
        self.lock().report()
    }

    /// See [`RegionAllocator::stats`].
    pub fn stats(&self) -> ArenaStats {
        self.lock().stats()
    }

    /// Run `f` with exclusive access, e.g. to write into a block.
    pub fn with<R>(&self, f: impl FnOnce(&mut RegionAllocator) -> R) -> R {
        f(&mut *self.lock())
    }

    // Table mutations are single `Vec` insert/remove calls, so a panic in a
    // caller's `with` closure cannot leave the table half-updated.
    fn lock(&self) -> MutexGuard<'_, RegionAllocator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<RegionAllocator> for SharedRegionAllocator {
    fn from(allocator: RegionAllocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let shared = SharedRegionAllocator::new(ArenaConfig::default()).unwrap();
        let other = shared.clone();
        let addr = shared.allocate(16).unwrap();
        assert_eq!(other.region_count(), 1);
        other.free(addr).unwrap();
        assert_eq!(shared.region_count(), 0);
    }

    #[test]
    fn concurrent_allocations_never_overlap() {
        let shared = SharedRegionAllocator::new(ArenaConfig::new(64_000, 128)).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut mine = Vec::new();
                    for round in 0..200 {
                        if let Ok(addr) = shared.allocate(1 + round % 13) {
                            mine.push(addr);
                        }
                        if round % 3 == 0 {
                            if let Some(addr) = mine.pop() {
                                shared.free(addr).unwrap();
                            }
                        }
                    }
                    mine
                })
            })
            .collect();

        let live: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap().len())
            .sum();

        shared.with(|alloc| {
            assert_eq!(alloc.region_count(), live);
            for pair in alloc.table().as_slice().windows(2) {
                assert!(pair[0].end() <= pair[1].start());
            }
        });
    }

    #[test]
    fn with_gives_block_access() {
        let shared = SharedRegionAllocator::from(RegionAllocator::default());
        let addr = shared.allocate(3).unwrap();
        shared
            .with(|alloc| alloc.block_mut(addr).map(|b| b.copy_from_slice(b"xyz")))
            .unwrap();
        let read = shared.with(|alloc| alloc.block(addr).map(<[u8]>::to_vec));
        assert_eq!(read.unwrap(), b"xyz".to_vec());
    }
}
