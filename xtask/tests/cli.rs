use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Minimal game tree: two sprites and a default pack named StorWors.
fn content_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let sprites = root.join("include/client/cli/assets");
    fs::create_dir_all(&sprites).unwrap();
    fs::write(
        sprites.join("Player_1.txt"),
        "player_1_width = 32\nplayer_1_height = 64\n",
    )
    .unwrap();
    fs::write(
        sprites.join("Enemy_1.txt"),
        "enemy_1_width = 3\nenemy_1_height = 2\n",
    )
    .unwrap();

    let pack = root.join("static/packs/StorWors");
    touch(&pack.join("assets/Enemy_1/idle/0/a.png"));
    touch(&pack.join("audios/shoot/1.ogg"));
    touch(&pack.join("hud/life.png"));
    dir
}

fn xtask(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xtask"));
    cmd.current_dir(root)
        .env_remove("LTYPE_ROOT")
        .env_remove("LTYPE_OUT_DIR")
        .env_remove("LTYPE_DEFAULT_PACK");
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xtask"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Development automation scripts"))
        .stdout(predicates::str::contains("build-assets"))
        .stdout(predicates::str::contains("import-level"));
}

#[test]
fn test_build_assets_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xtask"));
    cmd.arg("build-assets")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("--default-pack"))
        .stdout(predicates::str::contains("StorWors"));
}

#[test]
fn test_build_assets_writes_modules() {
    let dir = content_tree();

    xtask(dir.path())
        .arg("build-assets")
        .assert()
        .success()
        .stdout(predicates::str::contains("2 sprites, 1 packs"))
        .stdout(predicates::str::contains("Wrote"));

    let out = dir.path().join("generated");
    for name in [
        "asset_ids.rs",
        "text_assets.rs",
        "pack_ids.rs",
        "pack_assets.rs",
    ] {
        assert!(out.join(name).exists(), "missing {}", name);
    }
    let ids = fs::read_to_string(out.join("asset_ids.rs")).unwrap();
    assert!(ids.contains("pub const ASSET_PLAYER_1_ID: u32 = 0;"));
    assert!(ids.contains("pub const ASSET_ENEMY_1_ID: u32 = 16;"));

    // Second run backs up and reproduces the same bytes
    xtask(dir.path())
        .arg("build-assets")
        .assert()
        .success()
        .stdout(predicates::str::contains("Backed up existing file"));
    assert_eq!(
        fs::read_to_string(out.join("asset_ids.rs.bak")).unwrap(),
        ids
    );
    assert_eq!(fs::read_to_string(out.join("asset_ids.rs")).unwrap(), ids);
}

#[test]
fn test_build_assets_with_root_argument() {
    let dir = content_tree();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xtask"));
    cmd.arg("build-assets")
        .arg("--root")
        .arg(dir.path())
        .arg("--out-dir")
        .arg("out")
        .assert()
        .success();

    let pack_assets = fs::read_to_string(dir.path().join("out/pack_assets.rs")).unwrap();
    assert!(pack_assets.contains("\"static/packs/StorWors/\""));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = content_tree();

    xtask(dir.path())
        .arg("build-assets")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicates::str::contains("pub const PACK_AUDIO_SHOOT_ID: u32 = 0;"))
        .stdout(predicates::str::contains("pub const PACK_HUD_LIFE_ID: u32 = 1;"));

    assert!(!dir.path().join("generated").exists());
}

#[test]
fn test_check_detects_stale_output() {
    let dir = content_tree();

    xtask(dir.path())
        .arg("build-assets")
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicates::str::contains("out of date"));

    xtask(dir.path()).arg("build-assets").assert().success();
    xtask(dir.path())
        .arg("build-assets")
        .arg("--check")
        .assert()
        .success()
        .stdout(predicates::str::contains("up to date"));

    // A new sprite invalidates the generated sources
    fs::write(
        dir.path().join("include/client/cli/assets/Enemy_2.txt"),
        "enemy_2_width = 1\nenemy_2_height = 1\n",
    )
    .unwrap();
    xtask(dir.path())
        .arg("build-assets")
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicates::str::contains("asset_ids.rs"));
}

#[test]
fn test_missing_default_pack_fails_without_output() {
    let dir = content_tree();

    xtask(dir.path())
        .arg("build-assets")
        .arg("--default-pack")
        .arg("Nope")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Default pack 'Nope' not found"));

    assert!(!dir.path().join("generated").exists());
}

#[test]
fn test_default_pack_from_env() {
    let dir = content_tree();
    fs::rename(
        dir.path().join("static/packs/StorWors"),
        dir.path().join("static/packs/Classic"),
    )
    .unwrap();

    xtask(dir.path())
        .env("LTYPE_DEFAULT_PACK", "Classic")
        .arg("build-assets")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicates::str::contains("\"static/packs/Classic/\""));
}

#[test]
fn test_import_level() {
    let dir = content_tree();
    fs::write(dir.path().join("level1.csv"), "3,Enemy_1_X,120\n").unwrap();

    xtask(dir.path())
        .arg("import-level")
        .arg("level1.csv")
        .arg("--creator")
        .arg("tijl")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created level 1 with 1 entities"));

    let rows = fs::read_to_string(dir.path().join("static/levels/level_entities.csv")).unwrap();
    assert!(rows.contains("1,3,16,120,0,3,2,0,0"));
}

#[test]
fn test_import_level_unknown_asset() {
    let dir = content_tree();
    fs::write(dir.path().join("level1.csv"), "3,Boss_4,120\n").unwrap();

    xtask(dir.path())
        .arg("import-level")
        .arg("level1.csv")
        .arg("--creator")
        .arg("tijl")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown asset 'Boss_4'"));

    assert!(!dir.path().join("static/levels").exists());
}

#[test]
fn test_clean_keeps_unknown_files() {
    let dir = content_tree();
    xtask(dir.path()).arg("build-assets").assert().success();
    xtask(dir.path()).arg("build-assets").assert().success();

    let out = dir.path().join("generated");
    fs::write(out.join("mod.rs"), "pub mod asset_ids;\n").unwrap();

    xtask(dir.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed 8 generated files"))
        .stdout(predicates::str::contains("Skipping unknown file").and(
            predicates::str::contains("mod.rs"),
        ));

    assert!(out.join("mod.rs").exists());
    assert!(!out.join("asset_ids.rs").exists());
    assert!(!out.join("pack_assets.rs.bak").exists());
}

#[test]
fn test_clean_without_output() {
    let dir = tempfile::tempdir().unwrap();
    xtask(dir.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to clean"));
}
