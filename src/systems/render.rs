//! Frame drawing.
//!
//! Opens raylib's drawing scope, wraps it in a
//! [`RaylibSurface`](crate::render::raylibsurface::RaylibSurface) and hands
//! it to the renderer for the current screen.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::render::menuscreen::{menu_camera, render_menu};
use crate::render::raylibsurface::RaylibSurface;
use crate::render::worldrenderer::WorldRenderer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::shaderstore::ShaderStore;
use crate::resources::texturestore::TextureStore;
use crate::world::controller::WorldController;

/// Sky color behind the world.
pub const CLEAR_COLOR: Color = Color {
    r: 0x64,
    g: 0x95,
    b: 0xed,
    a: 0xff,
};

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    state: Res<GameState>,
    config: Res<GameConfig>,
    textures: Option<Res<TextureStore>>,
    shaders: Option<NonSend<ShaderStore>>,
    controller: Option<Res<WorldController>>,
    renderer: Option<ResMut<WorldRenderer>>,
) {
    let fps = rl.get_fps();
    let mut d = rl.begin_drawing(&th);

    let Some(textures) = textures else {
        d.clear_background(Color::BLACK);
        return;
    };
    let shaders = shaders.as_deref();

    match state.get() {
        GameStates::Playing => {
            d.clear_background(CLEAR_COLOR);
            if let (Some(controller), Some(mut renderer)) = (controller, renderer) {
                let mut surface = RaylibSurface::new(&mut d, &textures, shaders);
                renderer.render(&mut surface, &controller, &*config, fps);
            }
        }
        GameStates::Menu => {
            d.clear_background(Color::BLACK);
            let mut surface = RaylibSurface::new(&mut d, &textures, shaders);
            render_menu(&mut surface, &menu_camera(), &*config);
        }
        _ => d.clear_background(Color::BLACK),
    }
}
