//! A single live allocation.

use std::fmt;

/// The byte interval `[start, start + size)` of one live allocation.
///
/// Regions are created by `allocate` and dropped by `free`. They are never
/// resized in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    start: usize,
    size: usize,
}

impl Region {
    /// Create a region starting at `start` spanning `size` bytes.
    pub fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// Offset of the first byte.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Exclusive upper bound, `start + size`.
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Whether the two intervals share at least one byte.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Whether `offset` falls inside this region.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_exclusive() {
        let r = Region::new(10, 5);
        assert_eq!(r.end(), 15);
        assert!(!r.overlaps(&Region::new(15, 1)));
        assert!(r.overlaps(&Region::new(14, 1)));
    }

    #[test]
    fn adjacent_regions_do_not_overlap() {
        let a = Region::new(0, 5);
        let b = Region::new(5, 5);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn nested_regions_overlap() {
        let outer = Region::new(0, 20);
        let inner = Region::new(5, 2);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn display_shows_half_open_interval() {
        assert_eq!(Region::new(45, 5).to_string(), "[45, 50)");
    }
}
