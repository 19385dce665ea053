//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use raylib::prelude::Rectangle;

use canyonrun::level::blocktype::BlockType;
use canyonrun::objects::sprites;
use canyonrun::resources::animationstore::{AnimationClip, PlayMode};
use canyonrun::resources::assetcatalog::{AssetCatalog, TextureRegion};

/// Width of every region cell in the fixture atlas; the cell index of a
/// region is `source.x / CELL`.
pub const CELL: f32 = 32.0;

/// Region keys in atlas cell order.
pub fn region_keys() -> Vec<&'static str> {
    let mut keys = vec![
        sprites::MOUNTAIN_LEFT,
        sprites::MOUNTAIN_RIGHT,
        sprites::GOAL,
        sprites::ROCK_EDGE,
        sprites::ROCK_MIDDLE,
        sprites::GOLD_COIN,
        sprites::FEATHER,
        sprites::CARROT,
        sprites::BUNNY_HEAD,
        sprites::WATER_OVERLAY,
    ];
    keys.extend(sprites::CLOUDS);
    keys
}

/// Catalog with every key a level and the HUD look up. Coin frames live on
/// a second row so they can be told apart from plain regions.
pub fn catalog() -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    catalog.add_texture("atlas", "atlas.png");
    for (i, key) in region_keys().iter().enumerate() {
        let source = Rectangle::new(i as f32 * CELL, 0.0, CELL, CELL);
        catalog.add_region(*key, TextureRegion::new("atlas", source));
    }
    let frames = (0..3)
        .map(|i| TextureRegion::new("atlas", Rectangle::new(i as f32 * CELL, CELL, CELL, CELL)))
        .collect();
    catalog.add_animation(
        sprites::ANIM_GOLD_COIN,
        AnimationClip::new(frames, 0.1, PlayMode::LoopPingPong),
    );
    catalog
}

/// Key of the region a draw call used. Coin frames report `gold_coin`.
pub fn key_of(region: &TextureRegion) -> &'static str {
    if region.source.y >= CELL {
        return sprites::GOLD_COIN;
    }
    region_keys()[(region.source.x / CELL) as usize]
}

/// Level image from rows of characters:
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
