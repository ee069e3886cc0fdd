//! Content tree fixture shared by the integration tests.

#![allow(dead_code)]

use ltype_assets::BuildConfig;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

pub fn describe(root: &Path, name: &str, width: u32, height: u32) {
    let dir = root.join("include/client/cli/assets");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{}.txt", name)),
        format!(
            "{name}_width = {width}\n{name}_height = {height}\n",
            name = name.to_lowercase()
        ),
    )
    .unwrap();
}

/// Sprites Player_1, Enemy_1, Enemy_2 and Obstacle_1; packs A and B with B
/// as the default pack.
pub fn content_tree() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    describe(root, "Player_1", 32, 64);
    describe(root, "Enemy_1", 3, 2);
    describe(root, "Enemy_2", 4, 4);
    describe(root, "Obstacle_1", 8, 1);
    fs::write(root.join("include/client/cli/assets/README.md"), "notes").unwrap();

    let packs = root.join("static/packs");
    for file in [
        "B/assets/Enemy_1/idle/0/a.png",
        "B/assets/Enemy_1/idle/1/a.png",
        "B/assets/Enemy_1/idle/1/b.png",
        "B/assets/Enemy_1/die/0/x.png",
        "B/assets/Enemy_2/idle/0/a.png",
        "B/assets/Obstacle_1/idle/0/rock.png",
        "B/assets/Player_1/idle/0/p.png",
        "B/audios/shoot/1.ogg",
        "B/audios/shoot/2.ogg",
        "B/background/space.png",
        "B/hud/life.png",
        "A/assets/Enemy_1/idle/0/alt.png",
    ] {
        touch(&packs.join(file));
    }
    touch(&packs.join("blank.png"));
    touch(&packs.join("blank.ogg"));
    dir
}

pub fn config(root: &Path) -> BuildConfig {
    BuildConfig {
        default_pack: "B".to_string(),
        ..BuildConfig::with_root(root)
    }
}
