//! Identifier allocation.
//!
//! One [`IdAllocator`] is owned by a build run and threaded through the
//! scanners. Counters only move forward: an identifier is never handed out
//! twice within a run, and there is no compaction.

use crate::category::{AssetId, CATEGORY_CAPACITY, Category, compose_id};
use crate::error::{BuildError, Result};

/// Per-category counters for sprite identifiers.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: [u32; Category::ALL.len()],
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next identifier of `category` for `asset`.
    ///
    /// Fails once the category has no sequence numbers left, naming the asset
    /// that did not fit.
    pub fn allocate(&mut self, category: Category, asset: &str) -> Result<AssetId> {
        let slot = &mut self.next[category.tag() as usize];
        let sequence = *slot;
        if sequence >= CATEGORY_CAPACITY {
            return Err(BuildError::IdOverflow {
                category,
                asset: asset.to_string(),
                sequence,
                capacity: CATEGORY_CAPACITY,
            });
        }
        *slot += 1;
        Ok(compose_id(category, sequence))
    }

    /// Number of identifiers handed out so far for `category`.
    pub fn allocated(&self, category: Category) -> u32 {
        self.next[category.tag() as usize]
    }
}

/// Single running counter for audio groups, backgrounds and HUD files.
#[derive(Debug, Clone, Default)]
pub struct SequentialAllocator {
    next: u32,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn allocated(&self) -> u32 {
        self.next
    }
}
