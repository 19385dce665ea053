//! World and HUD renderer.
//!
//! Two cameras: a y-up world camera five units tall whose horizontal extent
//! follows the window's aspect ratio, and a y-down GUI camera 480 units tall
//! with its origin at the top-left corner. The world pass draws the level
//! through the camera helper's position and zoom; the GUI pass draws the
//! HUD on top. Nothing here writes to the [`WorldController`].

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::{Color, Vector2};

use crate::objects::sprites;
use crate::render::camera::OrthoCamera;
use crate::render::surface::{Quad, Surface, TextAlign, WHITE, rgba};
use crate::resources::assetcatalog::{AssetError, AssetProvider, TextureRegion, require_region};
use crate::resources::gameconfig::PreferencesProvider;
use crate::world::controller::{LIVES_START, WorldController};

pub const VIEWPORT_WIDTH: f32 = 5.0;
pub const VIEWPORT_HEIGHT: f32 = 5.0;
pub const VIEWPORT_GUI_WIDTH: f32 = 800.0;
pub const VIEWPORT_GUI_HEIGHT: f32 = 480.0;

const FONT_SMALL: f32 = 15.0;
const FONT_NORMAL: f32 = 20.0;
const FONT_BIG: f32 = 32.0;

const HUD_ICON_SCALE: f32 = 0.35;
const SHAKE_DISTANCE: f32 = 1.5;

const GAME_OVER_COLOR: Color = Color {
    r: 255,
    g: 191,
    b: 64,
    a: 255,
};

/// Regions drawn by the HUD.
#[derive(Debug, Clone)]
pub struct HudSprites {
    pub gold_coin: TextureRegion,
    pub feather: TextureRegion,
    pub bunny_head: TextureRegion,
}

impl HudSprites {
    pub fn resolve(assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        Ok(Self {
            gold_coin: require_region(assets, sprites::GOLD_COIN)?,
            feather: require_region(assets, sprites::FEATHER)?,
            bunny_head: require_region(assets, sprites::BUNNY_HEAD)?,
        })
    }
}

#[derive(Resource, Debug)]
pub struct WorldRenderer {
    camera: OrthoCamera,
    camera_gui: OrthoCamera,
    hud: HudSprites,
}

impl WorldRenderer {
    pub fn new(assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        let camera = OrthoCamera::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let mut camera_gui = OrthoCamera::new(VIEWPORT_GUI_WIDTH, VIEWPORT_GUI_HEIGHT);
        camera_gui.set_to_ortho(true);
        Ok(Self {
            camera,
            camera_gui,
            hud: HudSprites::resolve(assets)?,
        })
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn camera_gui(&self) -> &OrthoCamera {
        &self.camera_gui
    }

    /// Fit both cameras to a window of `width` x `height` pixels.
    ///
    /// Heights stay fixed; widths follow the aspect ratio. Non-positive sizes
    /// (a minimized window) leave the cameras untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            debug!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.camera.viewport_width = VIEWPORT_HEIGHT / height * width;

        self.camera_gui.viewport_height = VIEWPORT_GUI_HEIGHT;
        self.camera_gui.viewport_width = VIEWPORT_GUI_HEIGHT / height * width;
        self.camera_gui.position = Vector2 {
            x: self.camera_gui.viewport_width / 2.0,
            y: self.camera_gui.viewport_height / 2.0,
        };
    }

    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        world: &WorldController,
        prefs: &dyn PreferencesProvider,
        fps: u32,
    ) {
        self.render_world(surface, world, prefs);
        self.render_gui(surface, world, prefs, fps);
    }

    fn render_world(
        &mut self,
        surface: &mut dyn Surface,
        world: &WorldController,
        prefs: &dyn PreferencesProvider,
    ) {
        world.camera_helper().apply_to(&mut self.camera);
        surface.begin(&self.camera);
        let monochrome = prefs.use_monochrome_shader();
        if monochrome {
            surface.set_monochrome(true);
        }
        world.level().render(surface);
        if monochrome {
            surface.set_monochrome(false);
        }
        surface.end();
    }

    fn render_gui(
        &self,
        surface: &mut dyn Surface,
        world: &WorldController,
        prefs: &dyn PreferencesProvider,
        fps: u32,
    ) {
        surface.begin(&self.camera_gui);
        self.render_gui_score(surface, world);
        self.render_gui_feather_powerup(surface, world);
        self.render_gui_extra_lives(surface, world);
        if prefs.show_fps_counter() {
            self.render_gui_fps_counter(surface, fps);
        }
        self.render_gui_game_over(surface, world);
        surface.end();
    }

    fn render_gui_score(&self, surface: &mut dyn Surface, world: &WorldController) {
        let x = -15.0;
        let y = -15.0;
        let mut offset = Vector2 { x: 50.0, y: 50.0 };
        if world.score_visual() < world.score() as f32 {
            let shake_alpha = ((world.elapsed() * 1000.0) as u64 % 360) as f32;
            offset.x += (shake_alpha * 2.2).to_radians().sin() * SHAKE_DISTANCE;
            offset.y += (shake_alpha * 2.9).to_radians().sin() * SHAKE_DISTANCE;
        }
        let icon = Quad::new(x, y, 100.0, 100.0)
            .with_origin(offset.x, offset.y)
            .with_scale(HUD_ICON_SCALE, HUD_ICON_SCALE);
        surface.draw_region(&self.hud.gold_coin, &icon);
        surface.draw_text(
            &(world.score_visual() as u32).to_string(),
            Vector2 {
                x: x + 75.0,
                y: y + 37.0,
            },
            FONT_BIG,
            WHITE,
            TextAlign::Left,
        );
    }

    fn render_gui_feather_powerup(&self, surface: &mut dyn Surface, world: &WorldController) {
        let x = -15.0;
        let y = 30.0;
        let time_left = world.time_left_feather_powerup();
        if time_left <= 0.0 {
            return;
        }
        // blink five times a second during the last four seconds
        if time_left < 4.0 && (time_left * 5.0) as i32 % 2 != 0 {
            surface.set_tint(rgba(1.0, 1.0, 1.0, 0.5));
        }
        let icon = Quad::new(x, y, 100.0, 100.0)
            .with_origin(50.0, 50.0)
            .with_scale(HUD_ICON_SCALE, HUD_ICON_SCALE);
        surface.draw_region(&self.hud.feather, &icon);
        surface.set_tint(WHITE);
        surface.draw_text(
            &(time_left as u32).to_string(),
            Vector2 {
                x: x + 60.0,
                y: y + 57.0,
            },
            FONT_SMALL,
            WHITE,
            TextAlign::Left,
        );
    }

    fn render_gui_extra_lives(&self, surface: &mut dyn Surface, world: &WorldController) {
        let x = self.camera_gui.viewport_width - 25.0 - LIVES_START as f32 * 50.0;
        let y = -15.0;
        let lives = world.lives();
        for i in 0..LIVES_START {
            if lives <= i {
                surface.set_tint(rgba(0.5, 0.5, 0.5, 0.5));
            }
            let head = Quad::new(x + i as f32 * 50.0, y, 120.0, 100.0)
                .with_origin(50.0, 50.0)
                .with_scale(HUD_ICON_SCALE, HUD_ICON_SCALE);
            surface.draw_region(&self.hud.bunny_head, &head);
            surface.set_tint(WHITE);
        }

        let lives_visual = world.lives_visual();
        if lives >= 0 && lives_visual > lives as f32 {
            let alpha_color = (lives_visual - lives as f32 - 0.5).max(0.0);
            let alpha_scale = HUD_ICON_SCALE * (2.0 + lives as f32 - lives_visual) * 2.0;
            let alpha_rotate = -45.0 * alpha_color;
            surface.set_tint(rgba(1.0, 0.7, 0.7, alpha_color));
            let head = Quad::new(x + lives as f32 * 50.0, y, 120.0, 100.0)
                .with_origin(50.0, 50.0)
                .with_scale(alpha_scale, alpha_scale)
                .with_rotation(alpha_rotate);
            surface.draw_region(&self.hud.bunny_head, &head);
            surface.set_tint(WHITE);
        }
    }

    fn render_gui_fps_counter(&self, surface: &mut dyn Surface, fps: u32) {
        let position = Vector2 {
            x: self.camera_gui.viewport_width - 55.0,
            y: self.camera_gui.viewport_height - 15.0,
        };
        let color = fps_color(fps);
        surface.draw_text(
            &format!("FPS: {}", fps),
            position,
            FONT_NORMAL,
            color,
            TextAlign::Left,
        );
    }

    fn render_gui_game_over(&self, surface: &mut dyn Surface, world: &WorldController) {
        if !world.is_game_over() {
            return;
        }
        let center = Vector2 {
            x: self.camera_gui.viewport_width / 2.0,
            y: self.camera_gui.viewport_height / 2.0,
        };
        surface.draw_text("GAME OVER", center, FONT_BIG, GAME_OVER_COLOR, TextAlign::Center);
    }
}

/// Green from 45 frames per second, yellow from 30, red below.
pub fn fps_color(fps: u32) -> Color {
    if fps >= 45 {
        rgba(0.0, 1.0, 0.0, 1.0)
    } else if fps >= 30 {
        rgba(1.0, 1.0, 0.0, 1.0)
    } else {
        rgba(1.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::complete_catalog;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_resize_follows_aspect() {
        let mut renderer = WorldRenderer::new(&complete_catalog()).unwrap();
        renderer.resize(1600.0, 800.0);
        assert!(approx_eq(renderer.camera().viewport_width, 10.0));
        assert!(approx_eq(renderer.camera().viewport_height, 5.0));
        assert!(approx_eq(renderer.camera_gui().viewport_width, 960.0));
        assert!(approx_eq(renderer.camera_gui().position.x, 480.0));
        assert!(approx_eq(renderer.camera_gui().position.y, 240.0));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut renderer = WorldRenderer::new(&complete_catalog()).unwrap();
        renderer.resize(1024.0, 768.0);
        let once = (*renderer.camera(), *renderer.camera_gui());
        renderer.resize(1024.0, 768.0);
        assert_eq!(once, (*renderer.camera(), *renderer.camera_gui()));
    }

    #[test]
    fn test_degenerate_resize_is_ignored() {
        let mut renderer = WorldRenderer::new(&complete_catalog()).unwrap();
        renderer.resize(800.0, 480.0);
        let before = (*renderer.camera(), *renderer.camera_gui());
        renderer.resize(800.0, 0.0);
        renderer.resize(0.0, 480.0);
        renderer.resize(-5.0, -5.0);
        assert_eq!(before, (*renderer.camera(), *renderer.camera_gui()));
        assert!(renderer.camera().viewport_width.is_finite());
        assert!(renderer.camera().is_valid());
    }

    #[test]
    fn test_fps_color_thresholds() {
        assert_eq!(fps_color(60).g, 255);
        assert_eq!(fps_color(60).r, 0);
        assert_eq!(fps_color(30).r, 255);
        assert_eq!(fps_color(30).g, 255);
        assert_eq!(fps_color(29).g, 0);
    }

    #[test]
    fn test_gui_camera_is_y_down() {
        let renderer = WorldRenderer::new(&complete_catalog()).unwrap();
        assert!(renderer.camera_gui().y_down);
        assert!(!renderer.camera().y_down);
    }
}
