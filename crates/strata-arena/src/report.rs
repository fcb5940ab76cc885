//! Diagnostic snapshots of allocator state.
//!
//! Neither type here feeds back into allocation. [`ArenaReport`] is a
//! human-readable dump of the region table; [`ArenaStats`] summarises usage
//! and fragmentation.

use std::fmt;

use crate::address::Address;
use crate::region::Region;

/// A copy of the region table at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaReport {
    base: Address,
    max_regions: usize,
    regions: Vec<Region>,
}

impl ArenaReport {
    pub(crate) fn new(base: Address, max_regions: usize, regions: Vec<Region>) -> Self {
        Self {
            base,
            max_regions,
            regions,
        }
    }

    /// Arena base address.
    pub fn base(&self) -> Address {
        self.base
    }

    /// Live regions in address order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of live regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base address: {}", self.base)?;
        writeln!(
            f,
            "allocated regions: {}/{}",
            self.regions.len(),
            self.max_regions
        )?;
        for (i, region) in self.regions.iter().enumerate() {
            writeln!(
                f,
                "  {}) start: {}  size: {}",
                i + 1,
                region.start(),
                region.size()
            )?;
        }
        Ok(())
    }
}

/// Usage and fragmentation figures for one arena.
///
/// A gap is any maximal free interval: before the first region, between
/// two adjacent regions, or after the last one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Bytes covered by live regions.
    pub used_bytes: usize,
    /// Bytes not covered by any live region.
    pub free_bytes: usize,
    /// Number of live regions.
    pub region_count: usize,
    /// Number of non-empty gaps.
    pub gap_count: usize,
    /// Size of the largest gap.
    pub largest_gap: usize,
    /// Free bytes after the last region (the whole arena when empty).
    pub tail_free: usize,
}

impl ArenaStats {
    /// Compute stats for `regions` (sorted, disjoint) in an arena of `capacity` bytes.
    pub fn from_regions(regions: &[Region], capacity: usize) -> Self {
        let used_bytes: usize = regions.iter().map(Region::size).sum();
        let tail_free = capacity - regions.last().map_or(0, Region::end);

        let leading = regions.first().map_or(0, Region::start);
        let interior = regions.windows(2).map(|pair| pair[1].start() - pair[0].end());
        let gaps: Vec<usize> = std::iter::once(leading)
            .chain(interior)
            .chain(std::iter::once(tail_free))
            .filter(|&gap| gap > 0)
            .collect();

        Self {
            used_bytes,
            free_bytes: capacity - used_bytes,
            region_count: regions.len(),
            gap_count: gaps.len(),
            largest_gap: gaps.iter().copied().max().unwrap_or(0),
            tail_free,
        }
    }

    /// Share of free bytes lying outside the largest gap, in `[0, 1]`.
    ///
    /// Zero when all free space is one interval (or there is none).
    pub fn fragmentation(&self) -> f64 {
        if self.free_bytes == 0 {
            return 0.0;
        }
        1.0 - self.largest_gap as f64 / self.free_bytes as f64
    }
}
