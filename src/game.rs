//! Screen enter hooks.
//!
//! These are one-shot systems registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game state observer when the matching state is entered.
//!
//! - [`setup`] loads the atlas and its textures, then goes to the menu
//! - [`enter_menu`] drops the running game
//! - [`enter_play`] decodes the level and builds the controller and renderer
//! - [`quit_game`] logs; the frame loop stops on the `Quitting` state

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{error, info};
use raylib::prelude::{RaylibHandle, RaylibThread};

use crate::level::{LevelDecoder, LevelError};
use crate::render::worldrenderer::WorldRenderer;
use crate::resources::assetcatalog::AssetCatalog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::world::controller::WorldController;

pub fn setup(
    mut commands: Commands,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextGameState>,
) {
    let catalog = match AssetCatalog::load_from_file(&config.atlas_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{}", e);
            next_state.set(GameStates::Quitting);
            return;
        }
    };
    let textures = match TextureStore::load_from_catalog(&mut rl, &th, &catalog) {
        Ok(textures) => textures,
        Err(e) => {
            error!("{}", e);
            next_state.set(GameStates::Quitting);
            return;
        }
    };
    commands.insert_resource(catalog);
    commands.insert_resource(textures);
    next_state.set(GameStates::Menu);
}

pub fn enter_menu(mut commands: Commands) {
    commands.remove_resource::<WorldController>();
    commands.remove_resource::<WorldRenderer>();
}

/// Build the world for the configured level. Any failure is logged and
/// leads back to the menu.
pub fn enter_play(
    mut commands: Commands,
    catalog: Option<Res<AssetCatalog>>,
    config: Res<GameConfig>,
    window: Res<WindowSize>,
    mut next_state: ResMut<NextGameState>,
) {
    let Some(catalog) = catalog else {
        error!("cannot start a game before the assets are loaded");
        next_state.set(GameStates::Menu);
        return;
    };
    match build_world(&catalog, &config) {
        Ok((controller, mut renderer)) => {
            renderer.resize(window.w as f32, window.h as f32);
            commands.insert_resource(controller);
            commands.insert_resource(renderer);
        }
        Err(e) => {
            error!("cannot start level {}: {}", config.level_path.display(), e);
            next_state.set(GameStates::Menu);
        }
    }
}

/// Decode the configured level and wrap it in a controller and a renderer.
pub fn build_world(
    catalog: &AssetCatalog,
    config: &GameConfig,
) -> Result<(WorldController, WorldRenderer), LevelError> {
    let level = LevelDecoder::new(catalog)
        .with_seed_opt(config.seed)
        .load(&config.level_path)?;
    let rng = match config.seed {
        Some(seed) => Rng::with_seed(seed.wrapping_add(1)),
        None => Rng::new(),
    };
    let controller = WorldController::new(level, rng)?;
    let renderer = WorldRenderer::new(catalog)?;
    info!("level '{}' started", controller.level().name());
    Ok((controller, renderer))
}

pub fn quit_game() {
    info!("Quitting game");
}
