//! Fixtures shared by unit tests.

use image::{Rgba, RgbaImage};
use raylib::prelude::Rectangle;

use crate::level::blocktype::BlockType;
use crate::objects::sprites;
use crate::resources::animationstore::{AnimationClip, PlayMode};
use crate::resources::assetcatalog::{AssetCatalog, TextureRegion};

/// Catalog holding every key a level and the HUD look up.
pub fn complete_catalog() -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    catalog.add_texture("atlas", "atlas.png");
    let mut keys = vec![
        sprites::ROCK_EDGE,
        sprites::ROCK_MIDDLE,
        sprites::FEATHER,
        sprites::CARROT,
        sprites::GOAL,
        sprites::BUNNY_HEAD,
        sprites::MOUNTAIN_LEFT,
        sprites::MOUNTAIN_RIGHT,
        sprites::WATER_OVERLAY,
        sprites::GOLD_COIN,
    ];
    keys.extend(sprites::CLOUDS);
    for (i, key) in keys.iter().enumerate() {
        let source = Rectangle::new(i as f32 * 32.0, 0.0, 32.0, 32.0);
        catalog.add_region(*key, TextureRegion::new("atlas", source));
    }
    let frames = (0..3)
        .map(|i| TextureRegion::new("atlas", Rectangle::new(i as f32 * 32.0, 64.0, 32.0, 32.0)))
        .collect();
    catalog.add_animation(
        sprites::ANIM_GOLD_COIN,
        AnimationClip::new(frames, 0.1, PlayMode::LoopPingPong),
    );
    catalog
}

/// Build a level image from rows of characters:
/// `.` empty, `G` terrain, `S` spawn, `F` feather, `C` coin, `R` goal.
pub fn image_from_rows(rows: &[&str]) -> RgbaImage {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let kind = match ch {
                'G' => BlockType::Terrain,
                'S' => BlockType::PlayerSpawn,
                'F' => BlockType::Feather,
                'C' => BlockType::GoldCoin,
                'R' => BlockType::Goal,
                _ => BlockType::Empty,
            };
            let [r, g, b] = kind.rgb();
            img.put_pixel(x as u32, y as u32, Rgba([r, g, b, 255]));
        }
    }
    img
}
