//! The shared name → identifier resolution service.
//!
//! The minimal pass fills the registry; the flat table is a projection of it
//! and the full pass resolves pack asset names through it, so both outputs
//! carry the same identifier for the same name.

use crate::allocator::IdAllocator;
use crate::category::{AssetId, Category};
use crate::description::SpriteSize;
use crate::error::{BuildError, Result};
use std::collections::{HashMap, HashSet};

/// A classified sprite asset. Never mutated after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub name: String,
    pub category: Category,
    pub id: AssetId,
    pub size: SpriteSize,
}

impl AssetRecord {
    /// Stem used in generated constants, e.g. `PLAYER_1` for `ASSET_PLAYER_1_ID`.
    pub fn const_stem(&self) -> String {
        const_ident(&self.name)
    }
}

/// Registered assets in discovery order, indexed by name.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    records: Vec<AssetRecord>,
    by_name: HashMap<String, usize>,
    stems: HashSet<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an identifier for `name` and records it.
    ///
    /// Registering the same name twice, or two names that map to the same
    /// generated constant, is an error.
    pub fn register(
        &mut self,
        allocator: &mut IdAllocator,
        name: &str,
        category: Category,
        size: SpriteSize,
    ) -> Result<&AssetRecord> {
        let stem = const_ident(name);
        if self.by_name.contains_key(name) || self.stems.contains(&stem) {
            return Err(BuildError::Duplicate {
                kind: "asset",
                name: name.to_string(),
            });
        }

        let id = allocator.allocate(category, name)?;
        let index = self.records.len();
        self.records.push(AssetRecord {
            name: name.to_string(),
            category,
            id,
            size,
        });
        self.by_name.insert(name.to_string(), index);
        self.stems.insert(stem);

        Ok(&self.records[index])
    }

    pub fn get(&self, name: &str) -> Option<&AssetRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Turns an asset, group or file name into an upper-case identifier fragment.
///
/// Characters that cannot appear in a Rust identifier become `_`.
pub fn const_ident(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut allocator = IdAllocator::new();
        let mut registry = AssetRegistry::new();

        registry
            .register(
                &mut allocator,
                "Player_1",
                Category::Player,
                SpriteSize::new(32, 64),
            )
            .unwrap();
        let enemy = registry
            .register(
                &mut allocator,
                "Enemy_1",
                Category::Enemy,
                SpriteSize::default(),
            )
            .unwrap()
            .clone();

        assert_eq!(enemy.id, 16);
        assert_eq!(registry.get("Player_1").unwrap().size.height, 64);
        assert!(registry.get("Enemy_2").is_none());
        assert_eq!(registry.len(), 2);

        let names: Vec<&str> = registry.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Player_1", "Enemy_1"]);
    }

    #[test]
    fn test_duplicate_constant_is_rejected() {
        let mut allocator = IdAllocator::new();
        let mut registry = AssetRegistry::new();
        registry
            .register(
                &mut allocator,
                "Enemy_1-a",
                Category::Enemy,
                SpriteSize::default(),
            )
            .unwrap();

        let err = registry
            .register(
                &mut allocator,
                "Enemy_1_a",
                Category::Enemy,
                SpriteSize::default(),
            )
            .unwrap_err();
        assert!(matches!(err, BuildError::Duplicate { kind: "asset", .. }));
        // The rejected asset did not consume an identifier
        assert_eq!(allocator.allocated(Category::Enemy), 1);
    }

    #[test]
    fn test_const_ident() {
        assert_eq!(const_ident("Henchman_1_left"), "HENCHMAN_1_LEFT");
        assert_eq!(const_ident("boss theme-2"), "BOSS_THEME_2");
    }
}
