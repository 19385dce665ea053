//! Texture regions needed to build a level.
//!
//! Resolving every key before the first pixel is scanned means a missing
//! asset fails the whole load instead of leaving a half-built scene.

use std::sync::Arc;

use crate::resources::animationstore::AnimationClip;
use crate::resources::assetcatalog::{
    AssetError, AssetProvider, TextureRegion, require_animation, require_region,
};

pub const ROCK_EDGE: &str = "rock_edge";
pub const ROCK_MIDDLE: &str = "rock_middle";
pub const GOLD_COIN: &str = "gold_coin";
pub const ANIM_GOLD_COIN: &str = "anim_gold_coin";
pub const FEATHER: &str = "feather";
pub const CARROT: &str = "carrot";
pub const GOAL: &str = "goal";
pub const BUNNY_HEAD: &str = "bunny_head";
pub const MOUNTAIN_LEFT: &str = "mountain_left";
pub const MOUNTAIN_RIGHT: &str = "mountain_right";
pub const WATER_OVERLAY: &str = "water_overlay";
pub const CLOUDS: [&str; 3] = ["cloud01", "cloud02", "cloud03"];

#[derive(Debug, Clone)]
pub struct LevelSprites {
    pub rock_edge: TextureRegion,
    pub rock_middle: TextureRegion,
    pub gold_coin: Arc<AnimationClip>,
    pub feather: TextureRegion,
    pub carrot: TextureRegion,
    pub goal: TextureRegion,
    pub bunny_head: TextureRegion,
    pub mountain_left: TextureRegion,
    pub mountain_right: TextureRegion,
    pub water_overlay: TextureRegion,
    pub clouds: Vec<TextureRegion>,
}

impl LevelSprites {
    pub fn resolve(assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        let clouds = CLOUDS
            .iter()
            .map(|key| require_region(assets, key))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rock_edge: require_region(assets, ROCK_EDGE)?,
            rock_middle: require_region(assets, ROCK_MIDDLE)?,
            gold_coin: require_animation(assets, ANIM_GOLD_COIN)?,
            feather: require_region(assets, FEATHER)?,
            carrot: require_region(assets, CARROT)?,
            goal: require_region(assets, GOAL)?,
            bunny_head: require_region(assets, BUNNY_HEAD)?,
            mountain_left: require_region(assets, MOUNTAIN_LEFT)?,
            mountain_right: require_region(assets, MOUNTAIN_RIGHT)?,
            water_overlay: require_region(assets, WATER_OVERLAY)?,
            clouds,
        })
    }
}
