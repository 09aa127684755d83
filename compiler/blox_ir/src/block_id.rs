//! Block IDs for the flat block arena.

use std::fmt;

/// Index into a [`BlockGraph`](crate::BlockGraph).
///
/// - Memory: 4 bytes
/// - Equality: O(1) integer compare
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BlockId(u32);

impl BlockId {
    /// Create a new `BlockId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        BlockId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}
