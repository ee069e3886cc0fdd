mod common;

use common::{config, content_tree};
use ltype_assets::emit::{ASSET_IDS_FILE, GENERATED_FILES, PACK_ASSETS_FILE, PACK_IDS_FILE};
use ltype_assets::level::{CsvLevelStore, import_level};
use ltype_assets::pipeline::build_minimal;
use ltype_assets::{BuildConfig, BuildError, Category, build};
use std::fs;

#[test]
fn test_identifiers_follow_category_and_sorted_order() {
    let dir = content_tree();
    let output = build(&config(dir.path())).unwrap();

    let ids: Vec<(&str, u32)> = output
        .minimal
        .entries()
        .iter()
        .map(|record| (record.name.as_str(), record.id))
        .collect();
    assert_eq!(
        ids,
        [
            ("Player_1", 0),
            ("Enemy_1", 16),
            ("Enemy_2", 17),
            ("Obstacle_1", 64)
        ]
    );

    let asset_ids = &output.files[0];
    assert_eq!(asset_ids.name, ASSET_IDS_FILE);
    assert!(asset_ids.content.contains("pub const ASSET_PLAYER_1_ID: u32 = 0;\n"));
    assert!(asset_ids.content.contains("pub const ASSET_PLAYER_1_WIDTH: u32 = 32;\n"));
    assert!(asset_ids.content.contains("pub const ASSET_PLAYER_1_HEIGHT: u32 = 64;\n"));
    assert!(asset_ids.content.contains("pub const ASSET_ENEMY_1_ID: u32 = 16;\n"));
    assert!(asset_ids.content.contains("pub const ASSET_ENEMY_2_ID: u32 = 17;\n"));
    assert_eq!(Category::of_id(64), Some(Category::Obstacle));
}

#[test]
fn test_default_pack_is_promoted() {
    let dir = content_tree();
    let output = build(&config(dir.path())).unwrap();

    assert_eq!(output.full.pack_names(), ["B", "A"]);
    assert_eq!(output.full.packs[0].root, "static/packs/B/");

    let pack_assets = output
        .files
        .iter()
        .find(|file| file.name == PACK_ASSETS_FILE)
        .unwrap();
    assert!(
        pack_assets
            .content
            .contains("    \"static/packs/B/\",\n    \"static/packs/A/\",\n")
    );
}

#[test]
fn test_shared_counter_for_audio_and_files() {
    let dir = content_tree();
    let output = build(&config(dir.path())).unwrap();

    let pack_ids = output
        .files
        .iter()
        .find(|file| file.name == PACK_IDS_FILE)
        .unwrap();
    assert!(pack_ids.content.contains("pub const PACK_AUDIO_CHANNELS: usize = 1;\n"));
    assert!(pack_ids.content.contains("pub const PACK_AUDIO_SHOOT_ID: u32 = 0;\n"));
    assert!(pack_ids.content.contains("pub const PACK_BACKGROUND_SPACE_ID: u32 = 1;\n"));
    assert!(pack_ids.content.contains("pub const PACK_HUD_LIFE_ID: u32 = 2;\n"));
    assert_eq!(
        output.full.audio(0).unwrap().candidates,
        ["audios/shoot/1.ogg", "audios/shoot/2.ogg"]
    );
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = content_tree();
    let first = build(&config(dir.path())).unwrap();
    let second = build(&config(dir.path())).unwrap();

    let names: Vec<&str> = first.files.iter().map(|file| file.name).collect();
    assert_eq!(names, GENERATED_FILES);
    assert_eq!(first.files, second.files);
}

#[test]
fn test_nested_ids_match_flat_ids() {
    let dir = content_tree();
    let output = build(&config(dir.path())).unwrap();

    for pack in &output.full.packs {
        for asset in &pack.assets {
            let record = output.minimal.get(asset.id).unwrap();
            assert_eq!(record.name, asset.name);
            assert_eq!(record.size, asset.size);
        }
    }
}

#[test]
fn test_catalog_over_built_tables() {
    let dir = content_tree();
    let config = config(dir.path());
    let output = build(&config).unwrap();
    let mut catalog = output.catalog(&config);

    // Default pack, second idle step
    let sprite = catalog.sprite(16, 0, 1, 0).unwrap();
    assert_eq!(sprite.path, "static/packs/B/assets/Enemy_1/idle/1/a.png");

    // Pack A overrides Enemy_1 and falls back to B for Enemy_2
    catalog.set_pack(1);
    assert_eq!(
        catalog.sprite(16, 0, 0, 0).unwrap().path,
        "static/packs/A/assets/Enemy_1/idle/0/alt.png"
    );
    assert_eq!(
        catalog.sprite(17, 0, 0, 0).unwrap().path,
        "static/packs/B/assets/Enemy_2/idle/0/a.png"
    );
    // Audio resolves under pack A, which has none
    assert_eq!(catalog.audio(0, 3).unwrap(), "static/packs/blank.ogg");

    catalog.set_pack(0);
    assert_eq!(catalog.audio(0, 3).unwrap(), "static/packs/B/audios/shoot/2.ogg");

    let editable: Vec<u32> = catalog
        .editable_entities()
        .iter()
        .map(|sprite| sprite.id)
        .collect();
    assert_eq!(editable, [16, 17, 64]);
}

#[test]
fn test_failed_build_reports_error() {
    let dir = content_tree();
    fs::create_dir_all(dir.path().join("static/packs/B/assets/Enemy_1/jump")).unwrap();

    let err = build(&config(dir.path())).unwrap_err();
    assert!(matches!(err, BuildError::UnknownState { ref name, .. } if name == "jump"));
    assert!(!dir.path().join("generated").exists());
}

#[test]
fn test_missing_default_pack() {
    let dir = content_tree();
    let config = BuildConfig {
        default_pack: "StorWors".to_string(),
        ..BuildConfig::with_root(dir.path())
    };

    let err = build(&config).unwrap_err();
    assert!(matches!(err, BuildError::DefaultPackMissing { .. }));
}

#[test]
fn test_level_import_against_built_ids() {
    let dir = content_tree();
    let table = build_minimal(&config(dir.path())).unwrap();
    let layout = dir.path().join("level.csv");
    fs::write(&layout, "3,Enemy_1_X,120\n7,Obstacle_1,40\n").unwrap();

    let mut store = CsvLevelStore::new(dir.path().join("store"));
    let summary = import_level(&layout, "tijl", &table, &mut store).unwrap();
    assert_eq!(summary.rows, 2);

    let rows = store.entities().unwrap();
    assert_eq!((rows[0].progress, rows[0].entity, rows[0].x_pos), (3, 16, 120));
    assert_eq!((rows[0].x_size, rows[0].y_size), (3, 2));
    assert_eq!((rows[1].entity, rows[1].x_size, rows[1].y_size), (64, 8, 1));
}
