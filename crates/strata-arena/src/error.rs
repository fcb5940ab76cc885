//! Allocation and configuration error types.

use std::error::Error;
use std::fmt;

use crate::address::Address;

/// Which hard limit refused an allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Every slot of the region table is occupied.
    RegionTable {
        /// Maximum number of live regions the table can hold.
        max_regions: usize,
    },
    /// The chosen placement would run past the end of the arena.
    Arena {
        /// Total arena capacity in bytes.
        capacity: usize,
    },
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionTable { max_regions } => {
                write!(f, "region table full ({max_regions} regions)")
            }
            Self::Arena { capacity } => write!(f, "arena capacity {capacity} bytes"),
        }
    }
}

/// Errors returned by region table and allocator operations.
///
/// Every error is reported before any mutation takes place: a failed
/// call leaves the region table exactly as it found it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// No room for the request, either in the table or in the arena.
    CapacityExhausted {
        /// Number of bytes requested.
        requested: usize,
        /// The limit that was hit.
        limit: Limit,
    },
    /// The address does not match the start of any live region.
    ///
    /// Covers addresses that were never handed out, addresses that were
    /// already freed, and addresses outside the arena altogether.
    InvalidFree {
        /// The rejected address.
        address: Address,
    },
    /// A table index past the dense prefix of live entries.
    NotFound {
        /// The rejected index.
        index: usize,
        /// Number of live entries at the time of the call.
        count: usize,
    },
    /// Block access through an address that is not a live region start.
    UnknownAddress {
        /// The rejected address.
        address: Address,
    },
    /// `allocate(0)`; sizes must be positive.
    ZeroSize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted { requested, limit } => {
                write!(
                    f,
                    "capacity exhausted: requested {requested} bytes, hit {limit}"
                )
            }
            Self::InvalidFree { address } => {
                write!(f, "invalid free: {address} is not a live allocation")
            }
            Self::NotFound { index, count } => {
                write!(f, "region index {index} out of range ({count} live)")
            }
            Self::UnknownAddress { address } => {
                write!(f, "no live region starts at {address}")
            }
            Self::ZeroSize => write!(f, "allocation size must be positive"),
        }
    }
}

impl Error for AllocError {}

/// Errors from validating an [`ArenaConfig`](crate::ArenaConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The arena must hold at least one byte.
    ZeroCapacity,
    /// The region table must hold at least one region.
    ZeroMaxRegions,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "arena capacity must be non-zero"),
            Self::ZeroMaxRegions => write!(f, "max_regions must be non-zero"),
        }
    }
}

impl Error for ConfigError {}
