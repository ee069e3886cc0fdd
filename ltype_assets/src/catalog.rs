//! Runtime lookup over the full tables.
//!
//! The generated `pack_assets.rs` implements exactly these rules; keeping them
//! here as well lets them be exercised against real directory trees.

use crate::animation::State;
use crate::category::{AssetId, Category};
use crate::description::SpriteSize;
use crate::tables::{FullTables, PackAsset, PackTable};
use std::path::{Path, PathBuf};

/// A resolved sprite frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub id: AssetId,
    pub size: SpriteSize,
    pub path: String,
}

/// Full tables plus the current pack selection.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: FullTables,
    current: usize,
    blank_image: String,
    blank_audio: String,
    base_dir: Option<PathBuf>,
}

impl Catalog {
    pub fn new(tables: FullTables, blank_image: &str, blank_audio: &str) -> Self {
        Self {
            tables,
            current: 0,
            blank_image: blank_image.to_string(),
            blank_audio: blank_audio.to_string(),
            base_dir: None,
        }
    }

    /// Resolve existence checks against `dir` instead of the working directory.
    ///
    /// Returned paths stay exactly as emitted.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn pack_count(&self) -> usize {
        self.tables.packs.len()
    }

    /// Selects a pack; an out-of-range index selects the default pack.
    pub fn set_pack(&mut self, pack: usize) {
        self.current = if pack < self.pack_count() {
            pack
        } else {
            0
        };
    }

    pub fn current_pack(&self) -> usize {
        self.current
    }

    pub fn sprite_size(&self, id: AssetId) -> Option<SpriteSize> {
        self.locate(id).map(|(_, asset)| asset.size)
    }

    /// Resolves a frame of `id`.
    ///
    /// - an asset missing from the current pack is taken from the default pack
    /// - a state past the enumeration yields the blank image
    /// - a state without steps falls back to [`State::Idle`]
    /// - `step` wraps around the step count
    /// - an out-of-range `variant` becomes 0
    /// - a path missing on disk yields the blank image
    ///
    /// `None` only when no pack knows `id`.
    pub fn sprite(&self, id: AssetId, state: usize, step: usize, variant: usize) -> Option<Sprite> {
        let (pack, asset) = self.locate(id)?;
        let blank = || Sprite {
            id,
            size: asset.size,
            path: self.blank_image.clone(),
        };

        let Some(mut steps) = asset.animation.steps_at(state) else {
            return Some(blank());
        };
        if steps.is_empty() {
            steps = asset.animation.steps(State::Idle);
        }
        if steps.is_empty() {
            return Some(blank());
        }

        let variants = &steps[step % steps.len()];
        let Some(relative) = variants.get(variant).or_else(|| variants.first()) else {
            return Some(blank());
        };

        let path = self.existing_or(
            format!("{}assets/{}", pack.root, relative),
            &self.blank_image,
        );
        Some(Sprite {
            id,
            size: asset.size,
            path,
        })
    }

    /// Resolves one candidate of an audio group; `pick` wraps around the
    /// candidate count.
    pub fn audio(&self, id: u32, pick: usize) -> Option<String> {
        let group = self.tables.audio(id)?;
        if group.candidates.is_empty() {
            return Some(self.blank_audio.clone());
        }
        let relative = &group.candidates[pick % group.candidates.len()];
        Some(self.existing_or(
            format!("{}{}", self.current_root(), relative),
            &self.blank_audio,
        ))
    }

    /// Resolves a background or HUD file in the current pack.
    pub fn file(&self, id: u32) -> Option<String> {
        let file = self.tables.file(id)?;
        Some(self.existing_or(
            format!("{}{}", self.current_root(), file.path),
            &self.blank_image,
        ))
    }

    /// Idle first frame of every enemy, boss and obstacle, for the level editor.
    pub fn editable_entities(&self) -> Vec<Sprite> {
        let Some(default) = self.tables.packs.first() else {
            return Vec::new();
        };
        default
            .assets
            .iter()
            .filter(|asset| {
                matches!(
                    asset.category,
                    Category::Enemy | Category::Boss | Category::Obstacle
                )
            })
            .filter_map(|asset| self.sprite(asset.id, State::Idle.index(), 0, 0))
            .collect()
    }

    fn current_root(&self) -> &str {
        self.tables
            .packs
            .get(self.current)
            .map_or("", |pack| pack.root.as_str())
    }

    fn locate(&self, id: AssetId) -> Option<(&PackTable, &PackAsset)> {
        let current = self.tables.packs.get(self.current)?;
        if let Some(asset) = current.asset(id) {
            return Some((current, asset));
        }
        let default = self.tables.packs.first()?;
        default.asset(id).map(|asset| (default, asset))
    }

    fn existing_or(&self, path: String, fallback: &str) -> String {
        let exists = match &self.base_dir {
            Some(base) => base.join(&path).exists(),
            None => Path::new(&path).exists(),
        };
        if exists { path } else { fallback.to_string() }
    }
}
