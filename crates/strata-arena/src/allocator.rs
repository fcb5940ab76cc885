//! First-fit allocation over the region table.
//!
//! [`RegionAllocator`] owns one [`Arena`] and one [`RegionTable`]. It keeps
//! no other state: free space is whatever the table does not cover.
//!
//! # Placement
//!
//! `allocate(size)` scans adjacent pairs of live regions from low to high
//! addresses and takes the first gap strictly larger than `size`. With no
//! such gap the region is appended after the last live region. The scan
//! never looks at space before the first region, and a gap of exactly
//! `size` bytes is skipped.

use tracing::{debug, trace};

use crate::address::Address;
use crate::arena::Arena;
use crate::config::ArenaConfig;
use crate::error::{AllocError, ConfigError, Limit};
use crate::region::Region;
use crate::report::{ArenaReport, ArenaStats};
use crate::table::RegionTable;

/// Where a new region goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placement {
    /// Table index the region is inserted at.
    index: usize,
    /// Arena offset of its first byte.
    start: usize,
    /// Whether it fills a gap between two live regions.
    in_gap: bool,
}

/// A region-table allocator over a fixed-size byte arena.
///
/// All operations take `&mut self`; wrap in
/// [`SharedRegionAllocator`](crate::SharedRegionAllocator) for use from
/// several threads.
pub struct RegionAllocator {
    config: ArenaConfig,
    arena: Arena,
    table: RegionTable,
}

impl RegionAllocator {
    /// Create an allocator with a zeroed arena and an empty table.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::new(config.capacity);
        let table = RegionTable::new(config.max_regions);
        debug!(
            capacity = config.capacity,
            max_regions = config.max_regions,
            base = %arena.base(),
            "region allocator created"
        );
        Ok(Self {
            config,
            arena,
            table,
        })
    }

    /// Reserve `size` bytes and return the address of the first one.
    ///
    /// The returned bytes are not zeroed: a block reusing freed space keeps
    /// whatever was last written there.
    pub fn allocate(&mut self, size: usize) -> Result<Address, AllocError> {
        if size == 0 {
            debug!("refused zero-size allocation");
            return Err(AllocError::ZeroSize);
        }
        if self.table.is_full() {
            debug!(
                size,
                max_regions = self.table.max_regions(),
                "refused allocation: region table full"
            );
            return Err(AllocError::CapacityExhausted {
                requested: size,
                limit: Limit::RegionTable {
                    max_regions: self.table.max_regions(),
                },
            });
        }

        let placement = self.find_placement(size);
        let fits = placement
            .start
            .checked_add(size)
            .is_some_and(|end| end <= self.arena.capacity());
        if !fits {
            debug!(
                size,
                start = placement.start,
                capacity = self.arena.capacity(),
                "refused allocation: arena exhausted"
            );
            return Err(AllocError::CapacityExhausted {
                requested: size,
                limit: Limit::Arena {
                    capacity: self.arena.capacity(),
                },
            });
        }

        self.table
            .insert_at(placement.index, Region::new(placement.start, size))?;
        trace!(
            offset = placement.start,
            size,
            index = placement.index,
            in_gap = placement.in_gap,
            "allocated region"
        );
        Ok(self.arena.address_of(placement.start))
    }

    /// Release the region starting at `address`.
    ///
    /// Fails with [`AllocError::InvalidFree`] if no live region starts
    /// there; the table is left unchanged in that case.
    pub fn free(&mut self, address: Address) -> Result<(), AllocError> {
        let Some(index) = self.index_of(address) else {
            debug!(%address, "refused free of unknown address");
            return Err(AllocError::InvalidFree { address });
        };
        let region = self.table.remove_at(index)?;
        trace!(
            offset = region.start(),
            size = region.size(),
            index,
            "freed region"
        );
        Ok(())
    }

    /// First gap strictly larger than `size`, else the tail.
    fn find_placement(&self, size: usize) -> Placement {
        let regions = self.table.as_slice();
        let gap = regions.windows(2).enumerate().find_map(|(i, pair)| {
            let gap = pair[1].start() - pair[0].end();
            (gap > size).then(|| Placement {
                index: i + 1,
                start: pair[0].end(),
                in_gap: true,
            })
        });
        gap.unwrap_or_else(|| Placement {
            index: self.table.len(),
            start: self.table.last().map_or(0, |last| last.end()),
            in_gap: false,
        })
    }

    fn index_of(&self, address: Address) -> Option<usize> {
        let offset = self.arena.offset_of(address)?;
        self.table.position_of(offset)
    }

    /// The live region starting at `address`.
    pub fn region_at(&self, address: Address) -> Option<Region> {
        self.index_of(address).and_then(|i| self.table.get(i))
    }

    /// Whether `address` is the start of a live region.
    pub fn contains(&self, address: Address) -> bool {
        self.index_of(address).is_some()
    }

    /// Bytes of the live block starting at `address`.
    pub fn block(&self, address: Address) -> Result<&[u8], AllocError> {
        let region = self
            .region_at(address)
            .ok_or(AllocError::UnknownAddress { address })?;
        Ok(self.arena.slice(region.start(), region.size()))
    }

    /// Mutable bytes of the live block starting at `address`.
    pub fn block_mut(&mut self, address: Address) -> Result<&mut [u8], AllocError> {
        let region = self
            .region_at(address)
            .ok_or(AllocError::UnknownAddress { address })?;
        Ok(self.arena.slice_mut(region.start(), region.size()))
    }

    /// Drop every live region. Arena bytes are left as they are.
    pub fn reset(&mut self) {
        trace!(released = self.table.len(), "reset region table");
        self.table.clear();
    }

    /// Live regions in address order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.table.iter()
    }

    /// The underlying region table.
    pub fn table(&self) -> &RegionTable {
        &self.table
    }

    /// Number of live regions.
    pub fn region_count(&self) -> usize {
        self.table.len()
    }

    /// Whether no regions are live.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Address of the arena's first byte.
    pub fn base(&self) -> Address {
        self.arena.base()
    }

    /// Arena size in bytes.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Region table bound.
    pub fn max_regions(&self) -> usize {
        self.table.max_regions()
    }

    /// The configuration this allocator was built from.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Snapshot of the table for diagnostics.
    pub fn report(&self) -> ArenaReport {
        ArenaReport::new(
            self.base(),
            self.max_regions(),
            self.table.as_slice().to_vec(),
        )
    }

    /// Usage and fragmentation figures.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats::from_regions(self.table.as_slice(), self.capacity())
    }
}

impl Default for RegionAllocator {
    fn default() -> Self {
        let config = ArenaConfig::default();
        Self {
            arena: Arena::new(config.capacity),
            table: RegionTable::new(config.max_regions),
            config,
        }
    }
}
