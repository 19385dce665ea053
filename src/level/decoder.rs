//! Raster level decoder.
//!
//! The image is scanned row by row, top to bottom and left to right. Each
//! pixel is classified by [`BlockType`] and turned into an object whose
//! position is derived from the pixel column and its height above the
//! image bottom (`base_height = image_height - row`).
//!
//! Horizontal runs of terrain pixels collapse into a single
//! [`TerrainSegment`]. The run check compares against the previously
//! scanned pixel in raster order, so by default a run ending at the right
//! edge continues into a terrain pixel at the start of the next row. Use
//! [`LevelDecoder::reset_run_per_row`] to break runs at row boundaries.

use std::path::Path;

use fastrand::Rng;
use image::RgbaImage;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::level::blocktype::{BlockType, pack};
use crate::level::{Level, LevelError};
use crate::objects::GameObject;
use crate::objects::feather::Feather;
use crate::objects::goal::Goal;
use crate::objects::goldcoin::GoldCoin;
use crate::objects::player::Player;
use crate::objects::sprites::LevelSprites;
use crate::objects::terrain::TerrainSegment;
use crate::resources::assetcatalog::AssetProvider;

const TERRAIN_HEIGHT_FACTOR: f32 = 0.25;
const TERRAIN_OFFSET_Y: f32 = -2.5;
const SPAWN_OFFSET_Y: f32 = -3.0;
const PICKUP_OFFSET_Y: f32 = -1.5;
const GOAL_OFFSET_Y: f32 = -7.0;

pub struct LevelDecoder<'a> {
    assets: &'a dyn AssetProvider,
    seed: Option<u64>,
    reset_run_per_row: bool,
}

impl<'a> LevelDecoder<'a> {
    pub fn new(assets: &'a dyn AssetProvider) -> Self {
        Self {
            assets,
            seed: None,
            reset_run_per_row: false,
        }
    }

    /// Fix the random source used for coin phases and cloud layout.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// When set, a terrain run never continues across a row boundary.
    pub fn reset_run_per_row(mut self, reset: bool) -> Self {
        self.reset_run_per_row = reset;
        self
    }

    /// Open an image file and decode it. The level is named after the file stem.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Level, LevelError> {
        let path = path.as_ref();
        let pixels = image::open(path)?.to_rgba8();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.decode(&pixels, &name)
    }

    pub fn decode(&self, pixels: &RgbaImage, name: &str) -> Result<Level, LevelError> {
        let sprites = LevelSprites::resolve(self.assets)?;
        let mut rng = match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        let clouds_rng = Rng::with_seed(rng.u64(..));

        let (width, height) = pixels.dimensions();
        let mut level = Level::empty(name, width, height, sprites, clouds_rng);

        let mut last_pixel: Option<u32> = None;
        for y in 0..height {
            if self.reset_run_per_row {
                last_pixel = None;
            }
            let base_height = (height - y) as f32;
            for x in 0..width {
                let [r, g, b, a] = pixels.get_pixel(x, y).0;
                let current = pack(r, g, b);
                let column = x as f32;

                match BlockType::classify(current) {
                    Some(BlockType::Empty) => {}
                    Some(BlockType::Terrain) => {
                        if last_pixel == Some(current) {
                            if let Some(rock) = level.terrain.last_mut() {
                                rock.increase_length(1);
                            }
                        } else {
                            let mut rock = TerrainSegment::new(
                                level.sprites.rock_edge.clone(),
                                level.sprites.rock_middle.clone(),
                            );
                            let dim_y = rock.transform().dimension.y;
                            rock.transform_mut().set_position(
                                column,
                                base_height * dim_y * TERRAIN_HEIGHT_FACTOR + TERRAIN_OFFSET_Y,
                            );
                            level.terrain.push(rock);
                        }
                    }
                    Some(BlockType::PlayerSpawn) => {
                        if level.player.is_some() {
                            warn!(
                                "level '{}': extra player spawn at x<{}> y<{}> replaces the previous one",
                                name, x, y
                            );
                        }
                        // the player's dimension is 1x1
                        let spawn = Vector2 {
                            x: column,
                            y: base_height + SPAWN_OFFSET_Y,
                        };
                        level.player = Some(Player::new(level.sprites.bunny_head.clone(), spawn));
                    }
                    Some(BlockType::Feather) => {
                        let mut feather = Feather::new(level.sprites.feather.clone());
                        let dim_y = feather.transform().dimension.y;
                        feather
                            .transform_mut()
                            .set_position(column, base_height * dim_y + PICKUP_OFFSET_Y);
                        level.feathers.push(feather);
                    }
                    Some(BlockType::GoldCoin) => {
                        let mut coin = GoldCoin::new(level.sprites.gold_coin.clone(), rng.f32());
                        let dim_y = coin.transform().dimension.y;
                        coin.transform_mut()
                            .set_position(column, base_height * dim_y + PICKUP_OFFSET_Y);
                        level.coins.push(coin);
                    }
                    Some(BlockType::Goal) => {
                        if level.goal.is_some() {
                            warn!(
                                "level '{}': extra goal at x<{}> y<{}> replaces the previous one",
                                name, x, y
                            );
                        }
                        let mut goal = Goal::new(level.sprites.goal.clone());
                        goal.transform_mut()
                            .set_position(column, base_height + GOAL_OFFSET_Y);
                        level.goal = Some(goal);
                    }
                    None => {
                        warn!(
                            "unknown object at x<{}> y<{}>: r<{}> g<{}> b<{}> a<{}>",
                            x, y, r, g, b, a
                        );
                    }
                }
                last_pixel = Some(current);
            }
        }

        if level.player.is_none() {
            warn!("level '{}' has no player spawn point", name);
        }
        debug!(
            "level '{}' loaded: {} terrain, {} coins, {} feathers, goal: {}",
            name,
            level.terrain.len(),
            level.coins.len(),
            level.feathers.len(),
            level.goal.is_some()
        );
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{complete_catalog, image_from_rows};
    use image::Rgba;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_run_merges_into_one_segment() {
        let catalog = complete_catalog();
        let img = image_from_rows(&["GGGG.G"]);
        let level = LevelDecoder::new(&catalog).decode(&img, "runs").unwrap();
        assert_eq!(level.terrain().len(), 2);
        assert_eq!(level.terrain()[0].length(), 4);
        assert_eq!(level.terrain()[1].length(), 1);
        assert_eq!(level.terrain()[1].transform().position.x, 5.0);
    }

    #[test]
    fn test_terrain_height_from_row() {
        let catalog = complete_catalog();
        let img = image_from_rows(&["...", "G..", "..."]);
        let level = LevelDecoder::new(&catalog).decode(&img, "h").unwrap();
        // base height 2, dimension.y 1.5
        let y = level.terrain()[0].transform().position.y;
        assert!(approx_eq(y, 2.0 * 1.5 * 0.25 - 2.5));
    }

    #[test]
    fn test_run_crosses_row_boundary_by_default() {
        let catalog = complete_catalog();
        let img = image_from_rows(&["..G", "G.."]);
        let merged = LevelDecoder::new(&catalog).decode(&img, "x").unwrap();
        assert_eq!(merged.terrain().len(), 1);
        assert_eq!(merged.terrain()[0].length(), 2);

        let split = LevelDecoder::new(&catalog)
            .reset_run_per_row(true)
            .decode(&img, "x")
            .unwrap();
        assert_eq!(split.terrain().len(), 2);
    }

    #[test]
    fn test_object_offsets() {
        let catalog = complete_catalog();
        let img = image_from_rows(&["F.C.R", ".....", "..S.."]);
        let level = LevelDecoder::new(&catalog).decode(&img, "o").unwrap();

        let feather = level.feathers()[0].transform().position;
        assert!(approx_eq(feather.x, 0.0));
        assert!(approx_eq(feather.y, 3.0 * 0.5 - 1.5));

        let coin = level.coins()[0].transform().position;
        assert!(approx_eq(coin.x, 2.0));
        assert!(approx_eq(coin.y, 3.0 * 0.5 - 1.5));

        let goal = level.goal().unwrap().transform().position;
        assert!(approx_eq(goal.x, 4.0));
        assert!(approx_eq(goal.y, 3.0 - 7.0));

        let player = level.player().unwrap().transform().position;
        assert!(approx_eq(player.x, 2.0));
        assert!(approx_eq(player.y, 1.0 - 3.0));
    }

    #[test]
    fn test_last_spawn_wins() {
        let catalog = complete_catalog();
        let img = image_from_rows(&["S..", "..S"]);
        let level = LevelDecoder::new(&catalog).decode(&img, "dup").unwrap();
        assert_eq!(level.player().unwrap().spawn_point().x, 2.0);
    }

    #[test]
    fn test_unknown_colors_are_skipped() {
        let catalog = complete_catalog();
        let mut img = image_from_rows(&["G.G"]);
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        let level = LevelDecoder::new(&catalog).decode(&img, "u").unwrap();
        // the unknown pixel still breaks the run
        assert_eq!(level.terrain().len(), 2);
        assert_eq!(level.objects().count(), 2);
    }

    #[test]
    fn test_missing_asset_fails_whole_load() {
        let mut catalog = complete_catalog();
        catalog.remove_region("rock_middle");
        let img = image_from_rows(&["GS"]);
        match LevelDecoder::new(&catalog).decode(&img, "m") {
            Err(LevelError::MissingAsset(key)) => assert_eq!(key, "rock_middle"),
            other => panic!("unexpected {:?}", other.map(|l| l.terrain().len())),
        }
    }
}
