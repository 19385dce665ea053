//! Level image decoding through the public API.

mod common;

use canyonrun::level::{LevelDecoder, LevelError};
use canyonrun::objects::{GameObject, ObjectKind};

use common::{catalog, image_from_rows};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn test_two_terrain_pixels_then_spawn() {
    let catalog = catalog();
    let img = image_from_rows(&["GGS"]);
    let level = LevelDecoder::new(&catalog).decode(&img, "tiny").unwrap();

    assert_eq!(level.terrain().len(), 1);
    assert_eq!(level.terrain()[0].length(), 2);
    assert_eq!(level.terrain()[0].transform().position.x, 0.0);

    let player = level.player().expect("spawn pixel builds a player");
    assert_eq!(player.transform().position.x, 2.0);
    // height 1, row 0: (1 - 0) - 3
    assert!(approx_eq(player.transform().position.y, -2.0));
}

#[test]
fn test_spawn_height_counts_from_the_bottom() {
    let catalog = catalog();
    let img = image_from_rows(&["....", ".S..", "....", "GGGG"]);
    let level = LevelDecoder::new(&catalog).decode(&img, "spawn").unwrap();
    let spawn = level.player().unwrap().spawn_point();
    assert_eq!(spawn.x, 1.0);
    // height 4, row 1
    assert!(approx_eq(spawn.y, 3.0 - 3.0));
}

#[test]
fn test_level_without_spawn_still_decodes() {
    let catalog = catalog();
    let img = image_from_rows(&["..C.", "GGGG"]);
    let level = LevelDecoder::new(&catalog).decode(&img, "nospawn").unwrap();
    assert!(level.player().is_none());
    assert_eq!(level.coins().len(), 1);
}

#[test]
fn test_same_seed_same_level() {
    let catalog = catalog();
    let img = image_from_rows(&[
        "....C.C..F....",
        "..S.......R...",
        "GGGGGG..GGGGGG",
    ]);
    let decoder = LevelDecoder::new(&catalog).with_seed(42);
    let a = decoder.decode(&img, "seeded").unwrap();
    let b = decoder.decode(&img, "seeded").unwrap();

    let describe = |level: &canyonrun::level::Level| {
        level
            .objects()
            .map(|o| (o.kind(), o.transform().position.x, o.transform().position.y))
            .collect::<Vec<_>>()
    };
    assert_eq!(describe(&a), describe(&b));
    let phases_a: Vec<f32> = a.coins().iter().map(|c| c.state_time()).collect();
    let phases_b: Vec<f32> = b.coins().iter().map(|c| c.state_time()).collect();
    assert_eq!(phases_a, phases_b);
    let clouds_a: Vec<f32> = a.clouds().clouds().iter().map(|c| c.position.y).collect();
    let clouds_b: Vec<f32> = b.clouds().clouds().iter().map(|c| c.position.y).collect();
    assert_eq!(clouds_a, clouds_b);
}

#[test]
fn test_objects_enumerate_every_kind() {
    let catalog = catalog();
    let img = image_from_rows(&["S.C.F.R", "GGGGGGG"]);
    let level = LevelDecoder::new(&catalog).decode(&img, "all").unwrap();
    let kinds: Vec<ObjectKind> = level.objects().map(|o| o.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ObjectKind::Terrain,
            ObjectKind::GoldCoin,
            ObjectKind::Feather,
            ObjectKind::Goal,
            ObjectKind::Player,
        ]
    );
}

#[test]
fn test_missing_asset_names_the_key() {
    let mut catalog = catalog();
    catalog.remove_region("feather");
    let img = image_from_rows(&["GGS"]);
    match LevelDecoder::new(&catalog).decode(&img, "broken") {
        Err(LevelError::MissingAsset(key)) => assert_eq!(key, "feather"),
        other => panic!("expected a missing asset error, got {:?}", other.map(|l| l.name().to_string())),
    }
}

#[test]
fn test_unreadable_image_is_an_error() {
    let catalog = catalog();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-a-level.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    let result = LevelDecoder::new(&catalog).load(&path);
    assert!(matches!(result, Err(LevelError::Image(_))));

    let missing = LevelDecoder::new(&catalog).load(dir.path().join("absent.png"));
    assert!(matches!(missing, Err(LevelError::Image(_))));
}

#[test]
fn test_png_on_disk_matches_in_memory_decode() {
    let catalog = catalog();
    let img = image_from_rows(&["..S...C..", "GGGG..GGG"]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level-07.png");
    img.save(&path).unwrap();

    let from_disk = LevelDecoder::new(&catalog).with_seed(3).load(&path).unwrap();
    let in_memory = LevelDecoder::new(&catalog).with_seed(3).decode(&img, "level-07").unwrap();
    assert_eq!(from_disk.name(), "level-07");
    assert_eq!(from_disk.size(), (9, 2));
    assert_eq!(from_disk.terrain().len(), in_memory.terrain().len());
    assert_eq!(from_disk.coins().len(), 1);
    assert_eq!(
        from_disk.player().unwrap().spawn_point().x,
        in_memory.player().unwrap().spawn_point().x
    );
}
