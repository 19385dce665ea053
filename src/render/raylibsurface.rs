//! [`Surface`] backed by a raylib drawing scope.
//!
//! Camera units are projected to window pixels here, so objects never see
//! raylib's pixel space. Quads pivot around `position + origin`; in a y-up
//! camera the vertical origin offset is measured from the quad's bottom edge
//! and rotations turn counter-clockwise.

use std::ffi::CString;

use log::warn;
use raylib::ffi;
use raylib::prelude::*;

use crate::render::camera::OrthoCamera;
use crate::render::surface::{Quad, Surface, TextAlign, WHITE};
use crate::resources::assetcatalog::TextureRegion;
use crate::resources::shaderstore::{MONOCHROME, ShaderStore};
use crate::resources::texturestore::TextureStore;

pub struct RaylibSurface<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a TextureStore,
    shaders: Option<&'a ShaderStore>,
    screen: Vector2,
    camera: Option<OrthoCamera>,
    tint: Color,
    shader_active: bool,
}

impl<'a, 'b> RaylibSurface<'a, 'b> {
    pub fn new(
        d: &'a mut RaylibDrawHandle<'b>,
        textures: &'a TextureStore,
        shaders: Option<&'a ShaderStore>,
    ) -> Self {
        let screen = Vector2 {
            x: d.get_screen_width() as f32,
            y: d.get_screen_height() as f32,
        };
        Self {
            d,
            textures,
            shaders,
            screen,
            camera: None,
            tint: WHITE,
            shader_active: false,
        }
    }

    fn end_shader(&mut self) {
        if self.shader_active {
            unsafe { ffi::EndShaderMode() };
            self.shader_active = false;
        }
    }
}

/// Width in pixels of `text` drawn with raylib's default font.
fn measure_text(text: &str, font_size: i32) -> i32 {
    match CString::new(text) {
        Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) },
        Err(_) => 0,
    }
}

impl Surface for RaylibSurface<'_, '_> {
    fn begin(&mut self, camera: &OrthoCamera) {
        self.camera = Some(*camera);
        self.tint = WHITE;
    }

    fn end(&mut self) {
        self.end_shader();
        self.camera = None;
    }

    fn draw_region(&mut self, region: &TextureRegion, quad: &Quad) {
        let Some(camera) = self.camera else {
            return;
        };
        if !camera.is_valid() {
            return;
        }
        let Some(texture) = self.textures.get(&*region.texture) else {
            warn!("texture '{}' not loaded", region.texture);
            return;
        };

        let ppu = camera.pixels_per_unit(self.screen.x, self.screen.y);
        let pivot = Vector2 {
            x: quad.position.x + quad.origin.x,
            y: quad.position.y + quad.origin.y,
        };
        let pivot_px = camera.world_to_screen(pivot, self.screen.x, self.screen.y);

        let sx = quad.scale.x.abs();
        let sy = quad.scale.y.abs();
        let flip_x = quad.flip_x ^ (quad.scale.x < 0.0);
        let flip_y = quad.flip_y ^ (quad.scale.y < 0.0);

        let mut source = region.source;
        if flip_x {
            source.width = -source.width;
        }
        if flip_y {
            source.height = -source.height;
        }

        let dest = Rectangle {
            x: pivot_px.x,
            y: pivot_px.y,
            width: quad.dimension.x * sx * ppu.x,
            height: quad.dimension.y * sy * ppu.y,
        };
        let (origin, rotation) = if camera.y_down {
            (
                Vector2 {
                    x: quad.origin.x * sx * ppu.x,
                    y: quad.origin.y * sy * ppu.y,
                },
                quad.rotation,
            )
        } else {
            (
                Vector2 {
                    x: quad.origin.x * sx * ppu.x,
                    y: (quad.dimension.y - quad.origin.y) * sy * ppu.y,
                },
                -quad.rotation,
            )
        };

        self.d
            .draw_texture_pro(texture, source, dest, origin, rotation, self.tint);
    }

    fn draw_text(&mut self, text: &str, position: Vector2, size: f32, color: Color, align: TextAlign) {
        let Some(camera) = self.camera else {
            return;
        };
        let ppu = camera.pixels_per_unit(self.screen.x, self.screen.y);
        let font_size = (size * ppu.y).round() as i32;
        if font_size <= 0 {
            return;
        }
        let mut px = camera.world_to_screen(position, self.screen.x, self.screen.y);
        if align == TextAlign::Center {
            px.x -= measure_text(text, font_size) as f32 / 2.0;
            px.y -= font_size as f32 / 2.0;
        }
        self.d
            .draw_text(text, px.x as i32, px.y as i32, font_size, color);
    }

    fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    fn set_monochrome(&mut self, enabled: bool) {
        if !enabled {
            self.end_shader();
            return;
        }
        if self.shader_active {
            return;
        }
        if let Some(shader) = self.shaders.and_then(|s| s.get(MONOCHROME)) {
            unsafe { ffi::BeginShaderMode(**shader) };
            self.shader_active = true;
        }
    }
}

impl Drop for RaylibSurface<'_, '_> {
    fn drop(&mut self) {
        self.end_shader();
    }
}
