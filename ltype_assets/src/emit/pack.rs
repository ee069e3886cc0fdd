//! Nested pack tables and the resolution functions of the graphical client.
//!
//! The emitted functions follow the same rules as [`crate::catalog::Catalog`].

use super::{Placeholders, header, literal};
use crate::animation::{STATE_COUNT, State};
use crate::registry::const_ident;
use crate::tables::{FullTables, PackAsset};

const PRELUDE: &str = "use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

#[allow(unused_imports)]
use super::asset_ids::*;
#[allow(unused_imports)]
use super::pack_ids::*;

";

const TYPES: &str = "
/// Steps of one state; each step lists its variant paths.
pub type Steps = &'static [&'static [&'static str]];

#[derive(Debug)]
pub struct SpriteEntry {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub states: [Steps; STATE_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub path: String,
}

";

const RESOLUTION: &str = "
static CURRENT_PACK: AtomicUsize = AtomicUsize::new(0);

/// Selects a pack; an out-of-range index selects the default pack.
pub fn set_pack(pack: usize) {
    let pack = if pack < PACKS.len() { pack } else { 0 };
    CURRENT_PACK.store(pack, Ordering::Relaxed);
}

pub fn current_pack() -> usize {
    CURRENT_PACK.load(Ordering::Relaxed)
}

pub fn pack_count() -> usize {
    PACKS.len()
}

fn existing_or(path: String, fallback: &str) -> String {
    if Path::new(&path).exists() {
        path
    } else {
        fallback.to_string()
    }
}

fn locate(id: u32) -> Option<(usize, &'static SpriteEntry)> {
    let current = current_pack();
    if let Some(entry) = SPRITES
        .get(current)
        .and_then(|pack| pack.iter().find(|entry| entry.id == id))
    {
        return Some((current, entry));
    }
    SPRITES
        .first()?
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| (0, entry))
}

pub fn sprite_size(id: u32) -> Option<(u32, u32)> {
    locate(id).map(|(_, entry)| (entry.width, entry.height))
}

/// Resolves a frame of `id` in the current pack, falling back to the default
/// pack, the idle state, step wrap-around, variant 0 and finally the blank
/// image.
pub fn sprite(id: u32, state: usize, step: usize, variant: usize) -> Option<Sprite> {
    let (pack, entry) = locate(id)?;
    let make = |path: String| Sprite {
        id,
        width: entry.width,
        height: entry.height,
        path,
    };

    let mut steps = match entry.states.get(state) {
        Some(steps) => *steps,
        None => return Some(make(BLANK_IMAGE.to_string())),
    };
    if steps.is_empty() {
        steps = entry.states[IDLE_STATE];
    }
    if steps.is_empty() {
        return Some(make(BLANK_IMAGE.to_string()));
    }

    let variants = steps[step % steps.len()];
    let path = match variants.get(variant).or_else(|| variants.first()) {
        Some(relative) => existing_or(format!(\"{}assets/{}\", PACKS[pack], relative), BLANK_IMAGE),
        None => BLANK_IMAGE.to_string(),
    };
    Some(make(path))
}

/// Resolves one file of an audio group; `pick` wraps around the group size.
pub fn audio(id: u32, pick: usize) -> Option<String> {
    let (_, candidates) = AUDIOS.iter().find(|(audio, _)| *audio == id)?;
    if candidates.is_empty() {
        return Some(BLANK_AUDIO.to_string());
    }
    let relative = candidates[pick % candidates.len()];
    Some(existing_or(
        format!(\"{}{}\", PACKS[current_pack()], relative),
        BLANK_AUDIO,
    ))
}

/// Resolves a background or HUD file in the current pack.
pub fn file(id: u32) -> Option<String> {
    let (_, relative) = FILES.iter().find(|(file, _)| *file == id)?;
    Some(existing_or(
        format!(\"{}{}\", PACKS[current_pack()], relative),
        BLANK_IMAGE,
    ))
}

/// Idle first frame of every enemy, boss and obstacle, for the level editor.
pub fn editable_entities() -> Vec<Sprite> {
    let Some(default) = SPRITES.first() else {
        return Vec::new();
    };
    default
        .iter()
        .filter(|entry| {
            let kind = entry.id >> ASSET_LEN_SID;
            kind == ASSET_ENEMY_TYPE || kind == ASSET_BOSS_TYPE || kind == ASSET_OBSTACLE_TYPE
        })
        .filter_map(|entry| sprite(entry.id, IDLE_STATE, 0, 0))
        .collect()
}
";

/// `pack_assets.rs`: pack roots, nested sprite tables, audio and file tables,
/// and the fixed resolution functions.
pub fn render_pack_assets(tables: &FullTables, placeholders: Placeholders<'_>) -> String {
    let mut out = String::new();
    header(&mut out, "Pack tables and path resolution for the graphical client.");
    out.push_str(PRELUDE);

    out.push_str(&format!("pub const STATE_COUNT: usize = {};\n", STATE_COUNT));
    for state in State::ALL {
        out.push_str(&format!(
            "pub const {}_STATE: usize = {};\n",
            state.const_name(),
            state.index()
        ));
    }
    out.push_str(TYPES);

    out.push_str("pub static PACKS: &[&str] = &[\n");
    for pack in &tables.packs {
        out.push_str(&format!("    {},\n", literal(&pack.root)));
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "pub static BLANK_IMAGE: &str = {};\n",
        literal(placeholders.image)
    ));
    out.push_str(&format!(
        "pub static BLANK_AUDIO: &str = {};\n\n",
        literal(placeholders.audio)
    ));

    out.push_str("pub static AUDIOS: &[(u32, &[&str])] = &[\n");
    for group in &tables.audios {
        out.push_str(&format!(
            "    (PACK_{}_ID, &[{}]),\n",
            group.const_stem(),
            literal_list(&group.candidates)
        ));
    }
    out.push_str("];\n\n");

    out.push_str("pub static FILES: &[(u32, &str)] = &[\n");
    for file in &tables.files {
        out.push_str(&format!(
            "    (PACK_{}_ID, {}),\n",
            file.const_stem(),
            literal(&file.path)
        ));
    }
    out.push_str("];\n\n");

    out.push_str("pub static SPRITES: &[&[SpriteEntry]] = &[\n");
    for pack in &tables.packs {
        out.push_str(&format!("    // {}\n", pack.name));
        out.push_str("    &[\n");
        for asset in &pack.assets {
            render_sprite_entry(&mut out, asset);
        }
        out.push_str("    ],\n");
    }
    out.push_str("];\n");

    out.push_str(RESOLUTION);
    out
}

fn render_sprite_entry(out: &mut String, asset: &PackAsset) {
    let stem = const_ident(&asset.name);
    out.push_str("        SpriteEntry {\n");
    out.push_str(&format!("            id: ASSET_{}_ID,\n", stem));
    out.push_str(&format!("            width: ASSET_{}_WIDTH,\n", stem));
    out.push_str(&format!("            height: ASSET_{}_HEIGHT,\n", stem));
    out.push_str("            states: [\n");
    for (state, steps) in asset.animation.iter() {
        if steps.is_empty() {
            out.push_str(&format!("                &[], // {}\n", state));
            continue;
        }
        out.push_str(&format!("                // {}\n", state));
        out.push_str("                &[\n");
        for variants in steps {
            out.push_str(&format!(
                "                    &[{}],\n",
                literal_list(variants)
            ));
        }
        out.push_str("                ],\n");
    }
    out.push_str("            ],\n");
    out.push_str("        },\n");
}

fn literal_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| literal(value))
        .collect::<Vec<_>>()
        .join(", ")
}
