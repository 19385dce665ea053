//! Game object model.
//!
//! Every object decoded from a level, and every decoration layer, carries a
//! [`Transform2D`] and implements [`GameObject`]: it can be advanced by a
//! frame delta and drawn onto a [`Surface`]. The concrete kinds are plain
//! structs; [`ObjectRef`] is the tagged view used to enumerate a scene
//! without caring about the kind.
//!
//! Submodules overview:
//! - [`terrain`] – rock segment that grows as a horizontal run is decoded
//! - [`goldcoin`] – animated collectible worth 100 points
//! - [`feather`] – collectible worth 250 points that grants the power-up
//! - [`carrot`] – reward dropped around the goal once it is reached
//! - [`goal`] – end-of-level marker
//! - [`player`] – the controllable character and its jump state machine
//! - [`mountains`], [`clouds`], [`wateroverlay`] – decoration layers
//! - [`sprites`] – texture regions every kind needs, resolved up front

pub mod carrot;
pub mod clouds;
pub mod feather;
pub mod goal;
pub mod goldcoin;
pub mod mountains;
pub mod player;
pub mod sprites;
pub mod terrain;
pub mod wateroverlay;

use crate::components::transform::Transform2D;
use crate::render::surface::Surface;

use carrot::Carrot;
use feather::Feather;
use goal::Goal;
use goldcoin::GoldCoin;
use player::Player;
use terrain::TerrainSegment;

/// Capability set shared by all scene objects.
pub trait GameObject {
    fn transform(&self) -> &Transform2D;
    fn transform_mut(&mut self) -> &mut Transform2D;
    fn update(&mut self, delta: f32);
    fn render(&self, surface: &mut dyn Surface);
}

/// Plain tag naming each gameplay object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Terrain,
    GoldCoin,
    Feather,
    Carrot,
    Goal,
    Player,
}

/// Borrowed view of one gameplay object, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum ObjectRef<'a> {
    Terrain(&'a TerrainSegment),
    GoldCoin(&'a GoldCoin),
    Feather(&'a Feather),
    Carrot(&'a Carrot),
    Goal(&'a Goal),
    Player(&'a Player),
}

impl<'a> ObjectRef<'a> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectRef::Terrain(_) => ObjectKind::Terrain,
            ObjectRef::GoldCoin(_) => ObjectKind::GoldCoin,
            ObjectRef::Feather(_) => ObjectKind::Feather,
            ObjectRef::Carrot(_) => ObjectKind::Carrot,
            ObjectRef::Goal(_) => ObjectKind::Goal,
            ObjectRef::Player(_) => ObjectKind::Player,
        }
    }

    pub fn object(&self) -> &'a dyn GameObject {
        match *self {
            ObjectRef::Terrain(o) => o,
            ObjectRef::GoldCoin(o) => o,
            ObjectRef::Feather(o) => o,
            ObjectRef::Carrot(o) => o,
            ObjectRef::Goal(o) => o,
            ObjectRef::Player(o) => o,
        }
    }

    pub fn transform(&self) -> &'a Transform2D {
        self.object().transform()
    }
}
