//! End-to-end build: scan, allocate, build tables, render.
//!
//! Nothing here writes to disk. Callers get every generated module in memory
//! and decide how to persist it, so a failing run never leaves partial output.

use crate::allocator::IdAllocator;
use crate::catalog::Catalog;
use crate::config::BuildConfig;
use crate::emit::{GeneratedFile, Placeholders, render_all};
use crate::error::Result;
use crate::scan::minimal::scan_descriptions;
use crate::scan::packs::{PackLayout, scan_packs};
use crate::tables::{FullTables, MinimalTable};

/// Tables and rendered modules of one build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub minimal: MinimalTable,
    pub full: FullTables,
    pub files: Vec<GeneratedFile>,
}

impl BuildOutput {
    /// Runtime view over the full tables, rooted at the content root.
    pub fn catalog(&self, config: &BuildConfig) -> Catalog {
        Catalog::new(
            self.full.clone(),
            &config.blank_image,
            &config.blank_audio,
        )
        .with_base_dir(&config.root)
    }
}

/// Runs the minimal pass, then the full pass against the same registry, and
/// renders all outputs.
pub fn build(config: &BuildConfig) -> Result<BuildOutput> {
    let mut allocator = IdAllocator::new();
    let registry = scan_descriptions(&config.sprites_path(), &mut allocator)?;
    let minimal = MinimalTable::from_registry(&registry);

    let packs_dir = config.packs_path();
    let emitted_dir = config.emitted_packs_dir();
    let layout = PackLayout {
        packs_dir: &packs_dir,
        emitted_dir: &emitted_dir,
        default_pack: &config.default_pack,
    };
    let full = scan_packs(&layout, &registry)?;

    let files = render_all(
        &minimal,
        &full,
        Placeholders {
            image: &config.blank_image,
            audio: &config.blank_audio,
        },
    );

    log::info!(
        "Rendered {} modules for {} sprites",
        files.len(),
        minimal.len()
    );

    Ok(BuildOutput {
        minimal,
        full,
        files,
    })
}

/// Minimal pass only, for tools that only need identifiers and sizes.
pub fn build_minimal(config: &BuildConfig) -> Result<MinimalTable> {
    let mut allocator = IdAllocator::new();
    let registry = scan_descriptions(&config.sprites_path(), &mut allocator)?;
    Ok(MinimalTable::from_registry(&registry))
}
