//! Build configuration.
//!
//! Defaults match the layout of the game repository, so a plain
//! `cargo xtask build-assets` from its root needs no arguments.

use crate::scan::slash_path;
use std::path::{Path, PathBuf};

pub const DEFAULT_SPRITES_DIR: &str = "include/client/cli/assets";
pub const DEFAULT_PACKS_DIR: &str = "static/packs";
pub const DEFAULT_PACK: &str = "StorWors";
pub const DEFAULT_BLANK_IMAGE: &str = "static/packs/blank.png";
pub const DEFAULT_BLANK_AUDIO: &str = "static/packs/blank.ogg";
pub const DEFAULT_OUT_DIR: &str = "generated";

/// Where to read content from and where generated modules go.
///
/// `sprites_dir`, `packs_dir` and `out_dir` are resolved against `root`.
/// `packs_dir` and the blank paths are also written verbatim into the
/// generated tables, so they should stay relative to the game's working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub root: PathBuf,
    pub sprites_dir: PathBuf,
    pub packs_dir: PathBuf,
    pub default_pack: String,
    pub blank_image: String,
    pub blank_audio: String,
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sprites_dir: PathBuf::from(DEFAULT_SPRITES_DIR),
            packs_dir: PathBuf::from(DEFAULT_PACKS_DIR),
            default_pack: DEFAULT_PACK.to_string(),
            blank_image: DEFAULT_BLANK_IMAGE.to_string(),
            blank_audio: DEFAULT_BLANK_AUDIO.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl BuildConfig {
    /// Default layout rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn sprites_path(&self) -> PathBuf {
        self.resolve(&self.sprites_dir)
    }

    pub fn packs_path(&self) -> PathBuf {
        self.resolve(&self.packs_dir)
    }

    pub fn out_path(&self) -> PathBuf {
        self.resolve(&self.out_dir)
    }

    /// Packs directory as written into the generated pack roots.
    pub fn emitted_packs_dir(&self) -> String {
        slash_path(&self.packs_dir)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
