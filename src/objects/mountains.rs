//! Parallax mountain backdrop.

use raylib::prelude::Vector2;

use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::{Quad, Surface, WHITE, rgba};
use crate::resources::assetcatalog::TextureRegion;

/// One strip of alternating left/right mountain pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainLayer {
    pub offset: Vector2,
    /// Gray level of the tint.
    pub shade: f32,
    /// Fraction of the camera's horizontal movement the layer follows.
    pub parallax: f32,
}

/// Back to front.
pub const LAYERS: [MountainLayer; 3] = [
    MountainLayer {
        offset: Vector2 { x: 0.5, y: 0.5 },
        shade: 0.5,
        parallax: 0.8,
    },
    MountainLayer {
        offset: Vector2 { x: 0.25, y: 0.25 },
        shade: 0.7,
        parallax: 0.5,
    },
    MountainLayer {
        offset: Vector2 { x: 0.0, y: 0.0 },
        shade: 0.4,
        parallax: 0.3,
    },
];

#[derive(Debug, Clone)]
pub struct Mountains {
    transform: Transform2D,
    left: TextureRegion,
    right: TextureRegion,
    length: f32,
}

impl Mountains {
    /// `length` is the level width in world units.
    pub fn new(left: TextureRegion, right: TextureRegion, length: u32) -> Self {
        let mut transform = Transform2D::new(10.0, 2.0);
        transform.origin.x = -transform.dimension.x * 2.0;
        let length = length as f32 + transform.dimension.x * 2.0;
        Self {
            transform,
            left,
            right,
            length,
        }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Follow the camera horizontally; each layer scales this by its parallax.
    pub fn update_scroll_position(&mut self, camera_position: Vector2) {
        self.transform.position.x = camera_position.x;
    }

    /// Number of left/right pairs drawn for a layer.
    pub fn pieces_in_layer(&self, layer: &MountainLayer) -> u32 {
        let dim = self.transform.dimension;
        let mut count = (self.length / (2.0 * dim.x) * (1.0 - layer.parallax)).ceil();
        count += (0.5 + layer.offset.x).ceil();
        count.max(0.0) as u32
    }

    fn draw_layer(&self, surface: &mut dyn Surface, layer: &MountainLayer) {
        let t = &self.transform;
        surface.set_tint(rgba(layer.shade, layer.shade, layer.shade, 1.0));
        let mut x_rel = t.dimension.x * layer.offset.x;
        let y_rel = t.dimension.y * layer.offset.y;
        for _ in 0..self.pieces_in_layer(layer) {
            for region in [&self.left, &self.right] {
                let quad = Quad::new(
                    t.origin.x + x_rel + t.position.x * layer.parallax,
                    t.origin.y + y_rel + t.position.y,
                    t.dimension.x,
                    t.dimension.y,
                )
                .with_origin(t.origin.x, t.origin.y)
                .with_scale(t.scale.x, t.scale.y)
                .with_rotation(t.rotation);
                surface.draw_region(region, &quad);
                x_rel += t.dimension.x;
            }
        }
        surface.set_tint(WHITE);
    }
}

impl GameObject for Mountains {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, _delta: f32) {}

    fn render(&self, surface: &mut dyn Surface) {
        for layer in &LAYERS {
            self.draw_layer(surface, layer);
        }
    }
}
