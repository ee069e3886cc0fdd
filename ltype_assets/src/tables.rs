//! Output models: the flat table for the text client and the nested
//! per-pack tables for the graphical client.

use crate::animation::AnimationTable;
use crate::category::{AssetId, Category};
use crate::description::SpriteSize;
use crate::error::{BuildError, Result};
use crate::registry::{AssetRecord, AssetRegistry, const_ident};
use std::collections::HashSet;

/// Flat "ID + width + height" table, one entry per registered asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimalTable {
    entries: Vec<AssetRecord>,
}

impl MinimalTable {
    pub fn from_registry(registry: &AssetRegistry) -> Self {
        Self {
            entries: registry.records().to_vec(),
        }
    }

    /// Entries in discovery order (category order, then sorted names).
    pub fn entries(&self) -> &[AssetRecord] {
        &self.entries
    }

    pub fn get(&self, id: AssetId) -> Option<&AssetRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Looks up `<category>_<number>` ignoring ASCII case, as level layouts
    /// reference assets.
    pub fn find_numbered(&self, category: &str, number: &str) -> Option<&AssetRecord> {
        let wanted = format!("{}_{}", category, number);
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(&wanted))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One asset of one pack with its full animation listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackAsset {
    pub id: AssetId,
    pub name: String,
    pub category: Category,
    pub size: SpriteSize,
    pub animation: AnimationTable,
}

/// A content pack and the assets it provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackTable {
    pub name: String,
    /// Root path as emitted, always ending in `/`.
    pub root: String,
    pub assets: Vec<PackAsset>,
}

impl PackTable {
    pub fn asset(&self, id: AssetId) -> Option<&PackAsset> {
        self.assets.iter().find(|asset| asset.id == id)
    }
}

/// Interchangeable sound files; the runtime picks one at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioGroup {
    pub id: u32,
    pub name: String,
    /// Paths relative to the pack root, sorted.
    pub candidates: Vec<String>,
}

impl AudioGroup {
    pub fn const_stem(&self) -> String {
        format!("AUDIO_{}", const_ident(&self.name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Background,
    Hud,
}

impl FileKind {
    /// Directory of this kind inside the default pack.
    pub fn dir_name(self) -> &'static str {
        match self {
            FileKind::Background => "background",
            FileKind::Hud => "hud",
        }
    }

    fn const_prefix(self) -> &'static str {
        match self {
            FileKind::Background => "BACKGROUND",
            FileKind::Hud => "HUD",
        }
    }
}

/// A background or HUD image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleFileAsset {
    pub id: u32,
    pub kind: FileKind,
    /// File name without its last extension.
    pub stem: String,
    /// Path relative to the pack root.
    pub path: String,
}

impl SingleFileAsset {
    pub fn const_stem(&self) -> String {
        format!("{}_{}", self.kind.const_prefix(), const_ident(&self.stem))
    }
}

/// Everything the graphical client needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullTables {
    /// Packs with the default pack at index 0.
    pub packs: Vec<PackTable>,
    pub audios: Vec<AudioGroup>,
    pub files: Vec<SingleFileAsset>,
}

impl FullTables {
    pub fn pack_names(&self) -> Vec<&str> {
        self.packs.iter().map(|pack| pack.name.as_str()).collect()
    }

    pub fn audio(&self, id: u32) -> Option<&AudioGroup> {
        self.audios.iter().find(|group| group.id == id)
    }

    pub fn file(&self, id: u32) -> Option<&SingleFileAsset> {
        self.files.iter().find(|file| file.id == id)
    }
}

/// Accumulates full-pass scanner output.
///
/// Grouping only: entries keep the order they are added in. Every identifier
/// and every generated constant may appear at most once per table.
#[derive(Debug, Default)]
pub struct TableBuilder {
    tables: FullTables,
    pack_ids: HashSet<AssetId>,
    pack_names: HashSet<String>,
    shared_stems: HashSet<String>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new pack; subsequent assets are added to it.
    pub fn begin_pack(&mut self, name: &str, root: String) -> Result<()> {
        if !self.pack_names.insert(name.to_string()) {
            return Err(BuildError::Duplicate {
                kind: "pack",
                name: name.to_string(),
            });
        }
        self.tables.packs.push(PackTable {
            name: name.to_string(),
            root,
            assets: Vec::new(),
        });
        self.pack_ids.clear();
        Ok(())
    }

    pub fn add_asset(&mut self, asset: PackAsset) -> Result<()> {
        let Some(pack) = self.tables.packs.last_mut() else {
            return Err(BuildError::AssetOutsidePack(asset.name));
        };
        if !self.pack_ids.insert(asset.id) {
            return Err(BuildError::Duplicate {
                kind: "pack asset",
                name: format!("{}/{}", pack.name, asset.name),
            });
        }
        pack.assets.push(asset);
        Ok(())
    }

    pub fn add_audio(&mut self, group: AudioGroup) -> Result<()> {
        self.claim_stem(group.const_stem(), &group.name)?;
        self.tables.audios.push(group);
        Ok(())
    }

    pub fn add_file(&mut self, file: SingleFileAsset) -> Result<()> {
        self.claim_stem(file.const_stem(), &file.path)?;
        self.tables.files.push(file);
        Ok(())
    }

    pub fn finish(self) -> FullTables {
        self.tables
    }

    fn claim_stem(&mut self, stem: String, name: &str) -> Result<()> {
        if self.shared_stems.insert(stem) {
            Ok(())
        } else {
            Err(BuildError::Duplicate {
                kind: "pack constant",
                name: name.to_string(),
            })
        }
    }
}
