//! Asset categories and the bit layout of asset identifiers.
//!
//! An identifier packs the category tag above a per-category sequence number:
//!
//! ```text
//! 0001   0001
//! tag    sequence
//! ```
//!
//! so the category of any asset can be recovered with `id >> SID_BITS`.

use std::fmt;

/// Asset identifier as stored in generated tables and persisted levels.
pub type AssetId = u32;

/// Bits reserved for the sequence number inside a category.
pub const SID_BITS: u32 = 4;

/// Bits reserved for the category tag.
pub const PREFIX_BITS: u32 = 4;

/// Number of assets a single category can hold.
pub const CATEGORY_CAPACITY: u32 = 1 << SID_BITS;

/// Kind of sprite asset, recovered from the asset name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Player,
    Enemy,
    Boss,
    Henchman,
    Obstacle,
    Powerup,
    Bullet,
}

impl Category {
    /// Classification order. The first prefix that matches wins, and the
    /// position here must never change since tags are persisted in levels.
    pub const ALL: [Category; 7] = [
        Category::Player,
        Category::Enemy,
        Category::Boss,
        Category::Henchman,
        Category::Obstacle,
        Category::Powerup,
        Category::Bullet,
    ];

    /// Tag stored in the high bits of every identifier of this category.
    pub fn tag(self) -> u32 {
        match self {
            Category::Player => 0,
            Category::Enemy => 1,
            Category::Boss => 2,
            Category::Henchman => 3,
            Category::Obstacle => 4,
            Category::Powerup => 5,
            Category::Bullet => 6,
        }
    }

    /// Name prefix that assigns an asset to this category.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Player => "Player_",
            Category::Enemy => "Enemy_",
            Category::Boss => "Boss_",
            Category::Henchman => "Henchman_",
            Category::Obstacle => "Obstacle_",
            Category::Powerup => "Powerup_",
            Category::Bullet => "Bullet",
        }
    }

    /// Upper-case name used in generated `ASSET_<NAME>_TYPE` constants.
    pub fn const_name(self) -> &'static str {
        match self {
            Category::Player => "PLAYER",
            Category::Enemy => "ENEMY",
            Category::Boss => "BOSS",
            Category::Henchman => "HENCHMAN",
            Category::Obstacle => "OBSTACLE",
            Category::Powerup => "POWERUP",
            Category::Bullet => "BULLET",
        }
    }

    /// Category encoded in an identifier, if the tag is known.
    pub fn of_id(id: AssetId) -> Option<Category> {
        let tag = id >> SID_BITS;
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Player => "Player",
            Category::Enemy => "Enemy",
            Category::Boss => "Boss",
            Category::Henchman => "Henchman",
            Category::Obstacle => "Obstacle",
            Category::Powerup => "Powerup",
            Category::Bullet => "Bullet",
        };
        f.write_str(name)
    }
}

/// Finds the category of an asset name, or `None` if the entry should be skipped.
pub fn classify(name: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| name.starts_with(category.prefix()))
}

/// Builds an identifier from a category and its sequence number.
pub fn compose_id(category: Category, sequence: u32) -> AssetId {
    (category.tag() << SID_BITS) | sequence
}
