//! Minimal pass: one description resource per sprite in a flat directory.

use crate::allocator::IdAllocator;
use crate::category::{CATEGORY_CAPACITY, Category, classify};
use crate::description::read_size;
use crate::error::Result;
use crate::registry::AssetRegistry;
use crate::scan::{list_files, strip_extension};
use std::path::Path;

/// Registers every classifiable description resource in `dir`.
///
/// Files are visited in sorted order, so identifiers are allocated in
/// category order by sorted name. Unclassifiable names are skipped without
/// consuming an identifier; missing size declarations default to 0.
pub fn scan_descriptions(dir: &Path, allocator: &mut IdAllocator) -> Result<AssetRegistry> {
    log::info!("Scanning description resources in {}", dir.display());
    let mut registry = AssetRegistry::new();

    for entry in list_files(dir)? {
        let name = strip_extension(&entry.name);
        let Some(category) = classify(name) else {
            log::debug!("Skipping unclassified entry {}", entry.name);
            continue;
        };

        let declared = read_size(&entry.path)?;
        if !declared.is_complete() {
            log::warn!(
                "{} does not declare both _width and _height; missing values default to 0",
                entry.path.display()
            );
        }

        let record = registry.register(allocator, name, category, declared.or_zero())?;
        log::debug!("{} -> {} ({})", record.name, record.id, record.category);
    }

    log::info!("Registered {} sprite assets", registry.len());
    for category in Category::ALL {
        log::debug!(
            "{}: {} of {} identifiers used",
            category,
            allocator.allocated(category),
            CATEGORY_CAPACITY
        );
    }
    Ok(registry)
}
