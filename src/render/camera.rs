//! Orthographic 2D camera.
//!
//! Unlike raylib's `Camera2D`, which works in screen pixels, an
//! [`OrthoCamera`] describes its view in its own units: a viewport size and
//! the position of the viewport's center. Mapping to a surface of any pixel
//! size happens in [`OrthoCamera::world_to_screen`].
//!
//! Two orientations are supported: y-up for the game world and y-down
//! (origin at top-left) for the GUI overlay.

use raylib::prelude::Vector2;

/// Orthographic projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    /// Center of the view in camera units.
    pub position: Vector2,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Values above 1 show more of the world.
    pub zoom: f32,
    /// When set, y grows downward.
    pub y_down: bool,
}

impl OrthoCamera {
    /// y-up camera centered on the origin.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            viewport_width,
            viewport_height,
            zoom: 1.0,
            y_down: false,
        }
    }

    /// Point the axis as requested and move the view so its corner sits on
    /// the origin.
    pub fn set_to_ortho(&mut self, y_down: bool) {
        self.y_down = y_down;
        self.zoom = 1.0;
        self.position = Vector2 {
            x: self.viewport_width / 2.0,
            y: self.viewport_height / 2.0,
        };
    }

    /// Width of the visible area in camera units.
    pub fn visible_width(&self) -> f32 {
        self.viewport_width * self.zoom
    }

    /// Height of the visible area in camera units.
    pub fn visible_height(&self) -> f32 {
        self.viewport_height * self.zoom
    }

    /// Whether projecting through this camera yields finite coordinates.
    pub fn is_valid(&self) -> bool {
        let w = self.visible_width();
        let h = self.visible_height();
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }

    /// Surface pixels per camera unit on each axis.
    pub fn pixels_per_unit(&self, screen_width: f32, screen_height: f32) -> Vector2 {
        if !self.is_valid() {
            return Vector2 { x: 0.0, y: 0.0 };
        }
        Vector2 {
            x: screen_width / self.visible_width(),
            y: screen_height / self.visible_height(),
        }
    }

    /// Map a point in camera units to surface pixels (top-left origin).
    pub fn world_to_screen(&self, point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
        let ppu = self.pixels_per_unit(screen_width, screen_height);
        let left = self.position.x - self.visible_width() / 2.0;
        let x = (point.x - left) * ppu.x;
        let y = if self.y_down {
            let top = self.position.y - self.visible_height() / 2.0;
            (point.y - top) * ppu.y
        } else {
            let bottom = self.position.y - self.visible_height() / 2.0;
            screen_height - (point.y - bottom) * ppu.y
        };
        Vector2 { x, y }
    }

    /// Inverse of [`OrthoCamera::world_to_screen`].
    pub fn screen_to_world(&self, pixel: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
        let ppu = self.pixels_per_unit(screen_width, screen_height);
        if ppu.x == 0.0 || ppu.y == 0.0 {
            return self.position;
        }
        let left = self.position.x - self.visible_width() / 2.0;
        let bottom_or_top = self.position.y - self.visible_height() / 2.0;
        let x = left + pixel.x / ppu.x;
        let y = if self.y_down {
            bottom_or_top + pixel.y / ppu.y
        } else {
            bottom_or_top + (screen_height - pixel.y) / ppu.y
        };
        Vector2 { x, y }
    }
}
