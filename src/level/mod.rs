//! Level scene container and the image decoder that builds it.
//!
//! A [`Level`] owns every object decoded from one level image plus the
//! decoration layers sized to it. Apart from collected flags, motion state
//! and the carrots dropped at the goal, its content never changes after
//! decoding.
//!
//! Submodules overview:
//! - [`blocktype`] – pixel color to object kind table
//! - [`decoder`] – raster scan that populates a [`Level`]
//! - [`error`] – [`LevelError`]

pub mod blocktype;
pub mod decoder;
pub mod error;

use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::objects::carrot::Carrot;
use crate::objects::clouds::Clouds;
use crate::objects::feather::Feather;
use crate::objects::goal::Goal;
use crate::objects::goldcoin::GoldCoin;
use crate::objects::mountains::Mountains;
use crate::objects::player::Player;
use crate::objects::sprites::LevelSprites;
use crate::objects::terrain::TerrainSegment;
use crate::objects::wateroverlay::WaterOverlay;
use crate::objects::{GameObject, ObjectRef};
use crate::render::surface::Surface;

pub use decoder::LevelDecoder;
pub use error::LevelError;

/// How far from the goal, horizontally, carrots may land.
const CARROT_SPREAD: f32 = 3.5;

#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    width: u32,
    height: u32,
    sprites: LevelSprites,
    player: Option<Player>,
    goal: Option<Goal>,
    terrain: Vec<TerrainSegment>,
    coins: Vec<GoldCoin>,
    feathers: Vec<Feather>,
    carrots: Vec<Carrot>,
    mountains: Mountains,
    water: WaterOverlay,
    clouds: Clouds,
}

impl Level {
    /// Empty scene with decoration layers sized to a `width` pixel wide image.
    fn empty(name: &str, width: u32, height: u32, sprites: LevelSprites, clouds_rng: Rng) -> Self {
        let mut mountains = Mountains::new(
            sprites.mountain_left.clone(),
            sprites.mountain_right.clone(),
            width,
        );
        mountains.transform_mut().set_position(-1.0, 1.0);

        let mut clouds = Clouds::new(sprites.clouds.clone(), width, clouds_rng);
        clouds.transform_mut().set_position(0.0, 2.0);

        let mut water = WaterOverlay::new(sprites.water_overlay.clone(), width);
        water.transform_mut().set_position(0.0, -3.75);

        Self {
            name: name.to_string(),
            width,
            height,
            sprites,
            player: None,
            goal: None,
            terrain: Vec::new(),
            coins: Vec::new(),
            feathers: Vec::new(),
            carrots: Vec::new(),
            mountains,
            water,
            clouds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source image size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    pub fn terrain(&self) -> &[TerrainSegment] {
        &self.terrain
    }

    pub fn coins(&self) -> &[GoldCoin] {
        &self.coins
    }

    pub fn feathers(&self) -> &[Feather] {
        &self.feathers
    }

    pub fn carrots(&self) -> &[Carrot] {
        &self.carrots
    }

    pub fn mountains(&self) -> &Mountains {
        &self.mountains
    }

    pub fn mountains_mut(&mut self) -> &mut Mountains {
        &mut self.mountains
    }

    pub fn clouds(&self) -> &Clouds {
        &self.clouds
    }

    pub fn water(&self) -> &WaterOverlay {
        &self.water
    }

    /// Mutable player together with the collidable objects, for collision passes.
    pub(crate) fn split_for_collisions(&mut self) -> Option<CollisionView<'_>> {
        let player = self.player.as_mut()?;
        Some(CollisionView {
            player,
            terrain: &self.terrain,
            coins: &mut self.coins,
            feathers: &mut self.feathers,
            goal: self.goal.as_ref(),
        })
    }

    /// Every gameplay object, each collection in scan order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectRef<'_>> {
        self.terrain
            .iter()
            .map(ObjectRef::Terrain)
            .chain(self.coins.iter().map(ObjectRef::GoldCoin))
            .chain(self.feathers.iter().map(ObjectRef::Feather))
            .chain(self.carrots.iter().map(ObjectRef::Carrot))
            .chain(self.goal.iter().map(ObjectRef::Goal))
            .chain(self.player.iter().map(ObjectRef::Player))
    }

    /// Scatter `count` carrots above the goal. They fall onto its ground line.
    pub fn spawn_carrots(&mut self, rng: &mut Rng, count: usize) {
        let Some(goal) = &self.goal else {
            return;
        };
        let foot = goal.transform().position;
        for _ in 0..count {
            let x = foot.x + (rng.f32() * 2.0 - 1.0) * CARROT_SPREAD;
            let y = foot.y + 5.0 + rng.f32() * 5.0;
            let rotation = (rng.f32() * 2.0 - 1.0) * 90.0;
            self.carrots.push(Carrot::new(
                self.sprites.carrot.clone(),
                Vector2 { x, y },
                rotation,
                foot.y,
            ));
        }
    }

    pub fn update(&mut self, delta: f32) {
        if let Some(player) = &mut self.player {
            player.update(delta);
        }
        for rock in &mut self.terrain {
            rock.update(delta);
        }
        for coin in &mut self.coins {
            coin.update(delta);
        }
        for feather in &mut self.feathers {
            feather.update(delta);
        }
        for carrot in &mut self.carrots {
            carrot.update(delta);
        }
        if let Some(goal) = &mut self.goal {
            goal.update(delta);
        }
        self.mountains.update(delta);
        self.water.update(delta);
        self.clouds.update(delta);
    }

    /// Back to front. Later draws cover earlier ones.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.mountains.render(surface);
        if let Some(goal) = &self.goal {
            goal.render(surface);
        }
        for rock in &self.terrain {
            rock.render(surface);
        }
        for coin in &self.coins {
            coin.render(surface);
        }
        for feather in &self.feathers {
            feather.render(surface);
        }
        for carrot in &self.carrots {
            carrot.render(surface);
        }
        if let Some(player) = &self.player {
            player.render(surface);
        }
        self.water.render(surface);
        self.clouds.render(surface);
    }
}

/// Disjoint borrows of a [`Level`] used while resolving player collisions.
pub(crate) struct CollisionView<'a> {
    pub player: &'a mut Player,
    pub terrain: &'a [TerrainSegment],
    pub coins: &'a mut [GoldCoin],
    pub feathers: &'a mut [Feather],
    pub goal: Option<&'a Goal>,
}
