//! Drawing target abstraction.
//!
//! Game objects and the HUD draw through [`Surface`], never through raylib
//! directly. The live game uses
//! [`RaylibSurface`](crate::render::raylibsurface::RaylibSurface); headless
//! runs and tests use [`RecordingSurface`], which keeps every call.

use raylib::prelude::{Color, Vector2};

use crate::render::camera::OrthoCamera;
use crate::resources::assetcatalog::TextureRegion;

/// Placement of a textured quad in camera units.
///
/// `position` is the corner nearest the camera's origin axis (bottom-left in
/// a y-up camera, top-left in a y-down one). Scaling and rotation pivot
/// around `position + origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub position: Vector2,
    pub origin: Vector2,
    pub dimension: Vector2,
    pub scale: Vector2,
    /// Degrees, counter-clockwise in a y-up camera.
    pub rotation: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Quad {
    /// Unscaled, unrotated quad with the pivot at its corner.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            origin: Vector2 { x: 0.0, y: 0.0 },
            dimension: Vector2 {
                x: width,
                y: height,
            },
            scale: Vector2 { x: 1.0, y: 1.0 },
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vector2 { x, y };
        self
    }

    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Vector2 { x: sx, y: sy };
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn flipped_x(mut self, flip: bool) -> Self {
        self.flip_x = flip;
        self
    }
}

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Something textured quads and text can be drawn onto.
///
/// Draw calls between [`Surface::begin`] and [`Surface::end`] are expressed
/// in the units of the camera passed to `begin`.
pub trait Surface {
    fn begin(&mut self, camera: &OrthoCamera);
    fn end(&mut self);
    fn draw_region(&mut self, region: &TextureRegion, quad: &Quad);
    fn draw_text(&mut self, text: &str, position: Vector2, size: f32, color: Color, align: TextAlign);
    /// Color multiplied into every following draw until changed.
    fn set_tint(&mut self, tint: Color);
    /// Toggle the grayscale effect for following draws.
    fn set_monochrome(&mut self, enabled: bool);
}

/// Build a [`Color`] from normalized channels.
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a: channel(a),
    }
}

pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone)]
pub enum DrawCall {
    Begin(OrthoCamera),
    End,
    Region {
        region: TextureRegion,
        quad: Quad,
        tint: Color,
    },
    Text {
        text: String,
        position: Vector2,
        color: Color,
        align: TextAlign,
    },
    Monochrome(bool),
}

/// Surface that records instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    tint: Option<Color>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture regions drawn, in order.
    pub fn regions(&self) -> impl Iterator<Item = (&TextureRegion, &Quad, Color)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Region { region, quad, tint } => Some((region, quad, *tint)),
            _ => None,
        })
    }

    /// Text runs drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn region_count(&self) -> usize {
        self.regions().count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.tint = None;
    }
}

impl Surface for RecordingSurface {
    fn begin(&mut self, camera: &OrthoCamera) {
        self.calls.push(DrawCall::Begin(*camera));
    }

    fn end(&mut self) {
        self.calls.push(DrawCall::End);
    }

    fn draw_region(&mut self, region: &TextureRegion, quad: &Quad) {
        self.calls.push(DrawCall::Region {
            region: region.clone(),
            quad: *quad,
            tint: self.tint.unwrap_or(WHITE),
        });
    }

    fn draw_text(&mut self, text: &str, position: Vector2, _size: f32, color: Color, align: TextAlign) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            color,
            align,
        });
    }

    fn set_tint(&mut self, tint: Color) {
        self.tint = Some(tint);
    }

    fn set_monochrome(&mut self, enabled: bool) {
        self.calls.push(DrawCall::Monochrome(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    #[test]
    fn test_rgba_rounds_and_clamps() {
        let c = rgba(1.0, 0.5, -1.0, 2.0);
        assert_eq!((c.r, c.g, c.b, c.a), (255, 128, 0, 255));
    }

    #[test]
    fn test_recording_surface_applies_tint() {
        let mut surface = RecordingSurface::new();
        let region = TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 8.0, 8.0));
        surface.draw_region(&region, &Quad::new(0.0, 0.0, 1.0, 1.0));
        surface.set_tint(rgba(0.5, 0.5, 0.5, 0.5));
        surface.draw_region(&region, &Quad::new(1.0, 0.0, 1.0, 1.0));
        let tints: Vec<u8> = surface.regions().map(|(_, _, t)| t.a).collect();
        assert_eq!(tints, vec![255, 128]);
    }
}
