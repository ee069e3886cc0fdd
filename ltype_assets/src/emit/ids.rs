//! Identifier constant modules.

use super::header;
use crate::category::{Category, PREFIX_BITS, SID_BITS};
use crate::tables::{FullTables, MinimalTable};

/// `asset_ids.rs`: bit layout, category tags and one id/width/height triple
/// per sprite.
pub fn render_asset_ids(table: &MinimalTable) -> String {
    let mut out = String::new();
    header(
        &mut out,
        "Sprite identifiers shared by the text and graphical clients.",
    );

    out.push_str(&format!("pub const ASSET_LEN_PREFIX: u32 = {};\n", PREFIX_BITS));
    out.push_str(&format!("pub const ASSET_LEN_SID: u32 = {};\n\n", SID_BITS));

    for category in Category::ALL {
        out.push_str(&format!(
            "pub const ASSET_{}_TYPE: u32 = {};\n",
            category.const_name(),
            category.tag()
        ));
    }

    for record in table.entries() {
        let stem = record.const_stem();
        out.push('\n');
        out.push_str(&format!("pub const ASSET_{}_ID: u32 = {};\n", stem, record.id));
        out.push_str(&format!(
            "pub const ASSET_{}_WIDTH: u32 = {};\n",
            stem, record.size.width
        ));
        out.push_str(&format!(
            "pub const ASSET_{}_HEIGHT: u32 = {};\n",
            stem, record.size.height
        ));
    }

    out
}

/// `pack_ids.rs`: audio channel count plus audio, background and HUD ids.
pub fn render_pack_ids(tables: &FullTables) -> String {
    let mut out = String::new();
    header(&mut out, "Audio, background and HUD identifiers.");

    out.push_str(&format!(
        "pub const PACK_AUDIO_CHANNELS: usize = {};\n",
        tables.audios.len()
    ));

    if !tables.audios.is_empty() || !tables.files.is_empty() {
        out.push('\n');
    }
    for group in &tables.audios {
        out.push_str(&format!(
            "pub const PACK_{}_ID: u32 = {};\n",
            group.const_stem(),
            group.id
        ));
    }
    for file in &tables.files {
        out.push_str(&format!(
            "pub const PACK_{}_ID: u32 = {};\n",
            file.const_stem(),
            file.id
        ));
    }

    out
}
