//! Flat sprite table for the text client.

use super::{header, literal};
use crate::tables::MinimalTable;

pub fn render_text_assets(table: &MinimalTable) -> String {
    let mut out = String::new();
    header(&mut out, "Sprite registry for the text client.");

    out.push_str(
        "#[allow(unused_imports)]
use super::asset_ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteInfo {
    pub id: u32,
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

",
    );

    out.push_str("pub static SPRITES: &[SpriteInfo] = &[\n");
    for record in table.entries() {
        let stem = record.const_stem();
        out.push_str(&format!(
            "    SpriteInfo {{ id: ASSET_{stem}_ID, name: {}, width: ASSET_{stem}_WIDTH, height: ASSET_{stem}_HEIGHT }},\n",
            literal(&record.name),
        ));
    }
    out.push_str("];\n");

    out.push_str(
        "
pub fn sprite(id: u32) -> Option<&'static SpriteInfo> {
    SPRITES.iter().find(|sprite| sprite.id == id)
}

pub fn sprite_size(id: u32) -> Option<(u32, u32)> {
    sprite(id).map(|sprite| (sprite.width, sprite.height))
}
",
    );

    out
}
