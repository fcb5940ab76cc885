//! Strata: a first-fit region allocator over a fixed-size byte arena.
//!
//! This is the top-level facade crate that re-exports the public API.
//! For most users, adding `strata` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut alloc = RegionAllocator::new(ArenaConfig::new(1024, 16)).unwrap();
//!
//! let a = alloc.allocate(10).unwrap();
//! let b = alloc.allocate(10).unwrap();
//! let _c = alloc.allocate(10).unwrap();
//! assert_eq!(b.offset_from(alloc.base()), Some(10));
//!
//! alloc.block_mut(a).unwrap().copy_from_slice(b"0123456789");
//!
//! // Freeing `b` opens a 10-byte gap; a 6-byte request lands in it.
//! alloc.free(b).unwrap();
//! let d = alloc.allocate(6).unwrap();
//! assert_eq!(d, b);
//!
//! // Freeing twice is reported, not fatal.
//! alloc.free(d).unwrap();
//! assert!(matches!(alloc.free(d), Err(AllocError::InvalidFree { .. })));
//!
//! println!("{}", alloc.report());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `strata-arena` | Allocator, region table, arena storage, errors, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Allocator, region table, and arena storage (`strata-arena`).
///
/// Most users only need [`arena::RegionAllocator`] and
/// [`arena::ArenaConfig`]; both are also in the [`prelude`].
pub use strata_arena as arena;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use strata_arena::{
        Address, AllocError, ArenaConfig, ArenaReport, ArenaStats, ConfigError, Limit, Region,
        RegionAllocator, SharedRegionAllocator,
    };
}
