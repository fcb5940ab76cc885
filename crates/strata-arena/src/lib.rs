//! Region-table allocation over a fixed-size byte arena.
//!
//! A [`RegionAllocator`] hands out byte blocks from one pre-allocated arena.
//! Bookkeeping lives out of band in a [`RegionTable`]: a dense array of
//! `(start, size)` records sorted by address. Blocks carry no headers, and
//! free space is never tracked on its own; it is whatever the table does
//! not cover.
//!
//! # Architecture
//!
//! ```text
//! RegionAllocator
//! ├── Arena          (Box<[u8]>, fixed capacity, zeroed once)
//! └── RegionTable    (Vec<Region>, sorted by start, ≤ max_regions)
//!
//! SharedRegionAllocator = Arc<Mutex<RegionAllocator>>
//! ```
//!
//! # Placement
//!
//! First-fit between live regions: the lowest gap strictly larger than the
//! request wins, otherwise the block is appended after the last region.
//! Failures are typed ([`AllocError`]) and never leave partial mutations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod allocator;
pub mod arena;
pub mod config;
pub mod error;
pub mod region;
pub mod report;
pub mod shared;
pub mod table;

// Public re-exports for the primary API surface.
pub use address::Address;
pub use allocator::RegionAllocator;
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::{AllocError, ConfigError, Limit};
pub use region::Region;
pub use report::{ArenaReport, ArenaStats};
pub use shared::SharedRegionAllocator;
pub use table::RegionTable;
