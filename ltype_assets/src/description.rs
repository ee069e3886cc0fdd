//! Sprite size extraction from description resources.
//!
//! A description resource is a text file that declares the sprite size in two
//! assignment lines somewhere in its body, e.g.
//!
//! ```text
//! class Player_1: public Sprite {
//!   // _height = 2
//!   // _width = 2
//! ```

use crate::error::{BuildError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*_width\s*=\s*(\d+)\s*$").expect("valid width pattern"));
static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*_height\s*=\s*(\d+)\s*$").expect("valid height pattern"));

/// Width and height of a sprite, in the unit its renderer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Size fields as declared; either may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl DeclaredSize {
    pub fn is_complete(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Missing fields become 0.
    pub fn or_zero(&self) -> SpriteSize {
        SpriteSize {
            width: self.width.unwrap_or(0),
            height: self.height.unwrap_or(0),
        }
    }
}

/// Scans `content` line by line; the first declaration of each field wins.
pub fn parse_size(content: &str) -> DeclaredSize {
    let mut size = DeclaredSize::default();

    for line in content.lines() {
        if size.width.is_none() {
            size.width = capture_number(&WIDTH_RE, line);
        }
        if size.height.is_none() {
            size.height = capture_number(&HEIGHT_RE, line);
        }
        if size.is_complete() {
            break;
        }
    }

    size
}

/// Reads a description resource from disk and parses its size declarations.
pub fn read_size(path: &Path) -> Result<DeclaredSize> {
    let content = std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    Ok(parse_size(&content))
}

fn capture_number(re: &Regex, line: &str) -> Option<u32> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
