//! `import-level`: append a level layout to the level store.

use anyhow::{Context, Result};
use ltype_assets::config::BuildConfig;
use ltype_assets::level::{CsvLevelStore, import_level};
use ltype_assets::pipeline::build_minimal;
use std::path::Path;

pub fn run_import(config: &BuildConfig, layout: &Path, creator: &str, store: &Path) -> Result<()> {
    println!("Importing level layout {}...", layout.display());

    // Identifiers come from the same scan the generated tables use
    let table = build_minimal(config).context("Failed to scan sprite descriptions")?;

    let store_dir = if store.is_absolute() {
        store.to_path_buf()
    } else {
        config.root.join(store)
    };
    let mut store = CsvLevelStore::new(store_dir);

    let summary = import_level(layout, creator, &table, &mut store)
        .with_context(|| format!("Failed to import {}", layout.display()))?;

    println!(
        "✅ Created level {} with {} entities in {}",
        summary.level,
        summary.rows,
        store.dir().display()
    );
    Ok(())
}
