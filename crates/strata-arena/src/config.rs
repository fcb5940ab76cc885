//! Arena configuration parameters.

use crate::error::ConfigError;

/// Configuration for a [`RegionAllocator`](crate::RegionAllocator).
///
/// Fixes the arena size and the region table bound. Validated at
/// construction; both values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the arena in bytes.
    ///
    /// Default: 64_000. The arena never grows past this.
    pub capacity: usize,

    /// Maximum number of simultaneously live regions.
    ///
    /// Default: 128. The region table is pre-sized to this bound.
    pub max_regions: usize,
}

impl ArenaConfig {
    /// Default arena size in bytes.
    pub const DEFAULT_CAPACITY: usize = 64_000;

    /// Default region table bound.
    pub const DEFAULT_MAX_REGIONS: usize = 128;

    /// Create a config with the given arena size and region bound.
    pub fn new(capacity: usize, max_regions: usize) -> Self {
        Self {
            capacity,
            max_regions,
        }
    }

    /// Check that both limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_regions == 0 {
            return Err(ConfigError::ZeroMaxRegions);
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_MAX_REGIONS)
    }
}
