//! Full pass: per-pack animation listings plus the default pack's audio,
//! background and HUD files.
//!
//! ```text
//! <packs>/<pack>/assets/<asset>/<state>/<step>/<variant>
//! <packs>/<default>/audios/<group>/<file>
//! <packs>/<default>/background/<file>
//! <packs>/<default>/hud/<file>
//! ```

use crate::allocator::SequentialAllocator;
use crate::animation::{AnimationTable, State, Steps};
use crate::category::classify;
use crate::error::{BuildError, Result};
use crate::registry::{AssetRecord, AssetRegistry};
use crate::scan::{Entry, list_files, list_optional, list_subdirs, strip_extension};
use crate::tables::{
    AudioGroup, FileKind, FullTables, PackAsset, SingleFileAsset, TableBuilder,
};
use std::path::Path;

/// Where packs live on disk and how their roots are written in the output.
#[derive(Debug, Clone, Copy)]
pub struct PackLayout<'a> {
    /// Directory containing one sub-directory per pack.
    pub packs_dir: &'a Path,
    /// Packs directory as the consumers see it, `/`-separated.
    pub emitted_dir: &'a str,
    /// Pack promoted to index 0.
    pub default_pack: &'a str,
}

impl PackLayout<'_> {
    fn emitted_root(&self, pack: &str) -> String {
        let base = self.emitted_dir.trim_end_matches('/');
        if self.emitted_dir.is_empty() {
            format!("{}/", pack)
        } else {
            format!("{}/{}/", base, pack)
        }
    }
}

/// Moves `default` to the front, keeping the relative order of the rest.
///
/// Returns `None` when `default` is not in the list.
pub fn promote_default(mut packs: Vec<String>, default: &str) -> Option<Vec<String>> {
    let position = packs.iter().position(|name| name == default)?;
    let pack = packs.remove(position);
    packs.insert(0, pack);
    Some(packs)
}

/// Scans every pack and builds the nested tables.
///
/// Pack asset names are resolved through `registry`; the audio group and
/// file identifiers come from a fresh sequential counter.
pub fn scan_packs(layout: &PackLayout<'_>, registry: &AssetRegistry) -> Result<FullTables> {
    log::info!("Scanning packs in {}", layout.packs_dir.display());

    let names = list_subdirs(layout.packs_dir)?
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    let packs = promote_default(names, layout.default_pack).ok_or_else(|| {
        BuildError::DefaultPackMissing {
            name: layout.default_pack.to_string(),
            packs_dir: layout.packs_dir.to_path_buf(),
        }
    })?;

    let mut builder = TableBuilder::new();
    for pack in &packs {
        builder.begin_pack(pack, layout.emitted_root(pack))?;
        scan_pack_assets(&layout.packs_dir.join(pack), pack, registry, &mut builder)?;
    }

    let default_dir = layout.packs_dir.join(layout.default_pack);
    let mut counter = SequentialAllocator::new();
    scan_audios(&default_dir, &mut counter, &mut builder)?;
    scan_files(&default_dir, FileKind::Background, &mut counter, &mut builder)?;
    scan_files(&default_dir, FileKind::Hud, &mut counter, &mut builder)?;

    let tables = builder.finish();
    log::info!(
        "Built tables for {} packs, {} audio groups, {} files ({} shared identifiers)",
        tables.packs.len(),
        tables.audios.len(),
        tables.files.len(),
        counter.allocated()
    );
    Ok(tables)
}

fn scan_pack_assets(
    pack_dir: &Path,
    pack: &str,
    registry: &AssetRegistry,
    builder: &mut TableBuilder,
) -> Result<()> {
    let assets_dir = pack_dir.join("assets");
    for entry in list_optional(&assets_dir, true)? {
        let Some(record) = resolve_asset(registry, pack, &entry.name)? else {
            continue;
        };
        let animation = scan_animation(&entry)?;
        if animation.is_empty() {
            log::warn!("Asset {} in pack {} has no animation frames", entry.name, pack);
        }

        builder.add_asset(PackAsset {
            id: record.id,
            name: record.name.clone(),
            category: record.category,
            size: record.size,
            animation,
        })?;
    }
    Ok(())
}

fn resolve_asset<'r>(
    registry: &'r AssetRegistry,
    pack: &str,
    name: &str,
) -> Result<Option<&'r AssetRecord>> {
    if let Some(record) = registry.get(name) {
        return Ok(Some(record));
    }
    if classify(name).is_none() {
        log::warn!("Skipping unclassified asset {} in pack {}", name, pack);
        return Ok(None);
    }
    Err(BuildError::UnregisteredAsset {
        pack: pack.to_string(),
        asset: name.to_string(),
    })
}

/// Lists `<asset>/<state>/<step>/<variant>` into an animation table.
fn scan_animation(asset: &Entry) -> Result<AnimationTable> {
    let mut table = AnimationTable::new();

    for state_entry in list_subdirs(&asset.path)? {
        let state = State::from_dir_name(&state_entry.name).ok_or_else(|| {
            BuildError::UnknownState {
                name: state_entry.name.clone(),
                path: state_entry.path.clone(),
            }
        })?;

        let mut steps: Steps = Vec::new();
        for step_entry in list_subdirs(&state_entry.path)? {
            let variants = list_files(&step_entry.path)?
                .into_iter()
                .map(|variant| {
                    format!(
                        "{}/{}/{}/{}",
                        asset.name, state_entry.name, step_entry.name, variant.name
                    )
                })
                .collect();
            steps.push(variants);
        }
        table.set_steps(state, steps);
    }

    Ok(table)
}

fn scan_audios(
    default_dir: &Path,
    counter: &mut SequentialAllocator,
    builder: &mut TableBuilder,
) -> Result<()> {
    for group in list_optional(&default_dir.join("audios"), true)? {
        let candidates = list_files(&group.path)?
            .into_iter()
            .map(|file| format!("audios/{}/{}", group.name, file.name))
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            log::warn!("Audio group {} has no files", group.name);
        }

        builder.add_audio(AudioGroup {
            id: counter.allocate(),
            name: group.name,
            candidates,
        })?;
    }
    Ok(())
}

fn scan_files(
    default_dir: &Path,
    kind: FileKind,
    counter: &mut SequentialAllocator,
    builder: &mut TableBuilder,
) -> Result<()> {
    for file in list_optional(&default_dir.join(kind.dir_name()), false)? {
        builder.add_file(SingleFileAsset {
            id: counter.allocate(),
            kind,
            stem: strip_extension(&file.name).to_string(),
            path: format!("{}/{}", kind.dir_name(), file.name),
        })?;
    }
    Ok(())
}
