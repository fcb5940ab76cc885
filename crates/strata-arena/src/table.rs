//! The sorted, dense, capacity-bounded table of live regions.
//!
//! [`RegionTable`] is the allocator's only bookkeeping. Entries sit in a
//! dense prefix of the table's storage, ordered by ascending start offset.
//! Insertion shifts later entries up one slot and removal shifts them down,
//! so both run in time proportional to the number of entries moved.

use crate::error::{AllocError, Limit};
use crate::region::Region;

/// Ordered collection of at most `max_regions` live [`Region`]s.
///
/// Lookup by position is O(1); lookup by start offset is a binary search,
/// which the sort order makes valid at all times.
#[derive(Clone, Debug)]
pub struct RegionTable {
    /// Live entries, sorted by `start`. Pre-sized to `max_regions`.
    entries: Vec<Region>,
    max_regions: usize,
}

impl RegionTable {
    /// Create an empty table bounded at `max_regions` entries.
    pub fn new(max_regions: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_regions),
            max_regions,
        }
    }

    /// Insert `region` at `index`, shifting entries at `index..` up one slot.
    ///
    /// The caller picks `index` so that sort order is preserved. Fails with
    /// [`AllocError::CapacityExhausted`] when the table is full and with
    /// [`AllocError::NotFound`] when `index` lies past the live entries;
    /// neither failure touches the table.
    pub fn insert_at(&mut self, index: usize, region: Region) -> Result<(), AllocError> {
        if self.is_full() {
            return Err(AllocError::CapacityExhausted {
                requested: region.size(),
                limit: Limit::RegionTable {
                    max_regions: self.max_regions,
                },
            });
        }
        if index > self.entries.len() {
            return Err(AllocError::NotFound {
                index,
                count: self.entries.len(),
            });
        }
        debug_assert!(
            index == 0 || self.entries[index - 1].end() <= region.start(),
            "insert at {index} would overlap or reorder the previous entry"
        );
        debug_assert!(
            index == self.entries.len() || region.end() <= self.entries[index].start(),
            "insert at {index} would overlap or reorder the next entry"
        );
        self.entries.insert(index, region);
        Ok(())
    }

    /// Remove and return the entry at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Result<Region, AllocError> {
        if index >= self.entries.len() {
            return Err(AllocError::NotFound {
                index,
                count: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Index of the entry starting exactly at `start`.
    pub fn position_of(&self, start: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&start, Region::start)
            .ok()
    }

    /// Entry at `index`, if live.
    pub fn get(&self, index: usize) -> Option<Region> {
        self.entries.get(index).copied()
    }

    /// The highest-addressed entry.
    pub fn last(&self) -> Option<Region> {
        self.entries.last().copied()
    }

    /// Live entries in address order.
    pub fn as_slice(&self) -> &[Region] {
        &self.entries
    }

    /// Iterate over live entries in address order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.entries.iter()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether another insertion would exceed `max_regions`.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_regions
    }

    /// Upper bound on live entries.
    pub fn max_regions(&self) -> usize {
        self.max_regions
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
