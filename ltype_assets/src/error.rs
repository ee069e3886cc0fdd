//! Error types for asset table generation.

use crate::category::Category;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every way a build or level import can fail.
///
/// All of these abort the run: nothing is emitted unless the whole pipeline
/// succeeds.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("File name is not valid UTF-8: {}", .0.display())]
    InvalidName(PathBuf),
    #[error(
        "Identifier overflow in category {category}: asset '{asset}' would be #{sequence} but only {capacity} fit"
    )]
    IdOverflow {
        category: Category,
        asset: String,
        sequence: u32,
        capacity: u32,
    },
    #[error("Unknown state directory '{name}' in {}", path.display())]
    UnknownState { name: String, path: PathBuf },
    #[error("Default pack '{name}' not found in {}", packs_dir.display())]
    DefaultPackMissing { name: String, packs_dir: PathBuf },
    #[error("Asset '{asset}' in pack '{pack}' has no description resource")]
    UnregisteredAsset { pack: String, asset: String },
    #[error("Asset '{0}' added before any pack")]
    AssetOutsidePack(String),
    #[error("Duplicate {kind} '{name}'")]
    Duplicate { kind: &'static str, name: String },
    #[error("Level layout {} line {line}: {reason}", path.display())]
    LevelLayout {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("Level store error: {0}")]
    Store(#[from] csv::Error),
}

impl BuildError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        BuildError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
