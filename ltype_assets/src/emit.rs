//! Rust source emitters for the generated client modules.
//!
//! Rendering is a pure function of the tables: the same tables always give
//! byte-identical output. The modules are meant to live side by side in one
//! `generated` module of the consuming crate:
//!
//! ```text
//! generated/asset_ids.rs    ASSET_* identifier constants
//! generated/text_assets.rs  flat table for the text client
//! generated/pack_ids.rs     PACK_* audio/background/HUD constants
//! generated/pack_assets.rs  nested pack tables and path resolution
//! ```

pub mod ids;
pub mod pack;
pub mod text;

use crate::tables::{FullTables, MinimalTable};

pub const ASSET_IDS_FILE: &str = "asset_ids.rs";
pub const TEXT_ASSETS_FILE: &str = "text_assets.rs";
pub const PACK_IDS_FILE: &str = "pack_ids.rs";
pub const PACK_ASSETS_FILE: &str = "pack_assets.rs";

/// Every file a build writes, in write order.
pub const GENERATED_FILES: [&str; 4] = [
    ASSET_IDS_FILE,
    TEXT_ASSETS_FILE,
    PACK_IDS_FILE,
    PACK_ASSETS_FILE,
];

/// Rendered content of one generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub content: String,
}

/// Paths returned when a resolved file is missing on disk.
#[derive(Debug, Clone, Copy)]
pub struct Placeholders<'a> {
    pub image: &'a str,
    pub audio: &'a str,
}

/// Renders all generated modules.
pub fn render_all(
    minimal: &MinimalTable,
    full: &FullTables,
    placeholders: Placeholders<'_>,
) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile {
            name: ASSET_IDS_FILE,
            content: ids::render_asset_ids(minimal),
        },
        GeneratedFile {
            name: TEXT_ASSETS_FILE,
            content: text::render_text_assets(minimal),
        },
        GeneratedFile {
            name: PACK_IDS_FILE,
            content: ids::render_pack_ids(full),
        },
        GeneratedFile {
            name: PACK_ASSETS_FILE,
            content: pack::render_pack_assets(full, placeholders),
        },
    ]
}

fn header(out: &mut String, doc: &str) {
    out.push_str("// @generated by `cargo xtask build-assets`. Do not edit by hand.\n");
    out.push_str(&format!("//! {}\n\n", doc));
}

/// Rust string literal for `value`.
fn literal(value: &str) -> String {
    format!("{:?}", value)
}
