//! Rock terrain segment.
//!
//! A segment starts one unit wide and is lengthened in place while the
//! decoder walks a horizontal run of terrain pixels. Its position is the
//! left end of the run and never moves.

use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::{Quad, Surface};
use crate::resources::assetcatalog::TextureRegion;

const WIDTH: f32 = 1.0;
const HEIGHT: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct TerrainSegment {
    transform: Transform2D,
    edge: TextureRegion,
    middle: TextureRegion,
    length: u32,
}

impl TerrainSegment {
    pub fn new(edge: TextureRegion, middle: TextureRegion) -> Self {
        let mut segment = Self {
            transform: Transform2D::new(WIDTH, HEIGHT),
            edge,
            middle,
            length: 1,
        };
        segment.set_length(1);
        segment
    }

    /// Number of unit pieces in the run.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Collision and visual width in world units.
    pub fn width(&self) -> f32 {
        self.transform.dimension.x * self.length as f32
    }

    pub fn set_length(&mut self, length: u32) {
        self.length = length;
        self.transform.bounds.size.x = self.transform.dimension.x * length as f32;
        self.transform.bounds.size.y = self.transform.dimension.y;
    }

    pub fn increase_length(&mut self, amount: u32) {
        self.set_length(self.length + amount);
    }
}

impl GameObject for TerrainSegment {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, _delta: f32) {}

    fn render(&self, surface: &mut dyn Surface) {
        let t = &self.transform;
        let edge_width = t.dimension.x / 4.0;

        // left edge hangs outside the run
        let left = Quad::new(t.position.x - edge_width, t.position.y, edge_width, t.dimension.y)
            .with_origin(t.origin.x, t.origin.y)
            .with_scale(t.scale.x, t.scale.y)
            .with_rotation(t.rotation);
        surface.draw_region(&self.edge, &left);

        for i in 0..self.length {
            let middle = Quad::new(
                t.position.x + i as f32 * t.dimension.x,
                t.position.y,
                t.dimension.x,
                t.dimension.y,
            )
            .with_origin(t.origin.x, t.origin.y)
            .with_scale(t.scale.x, t.scale.y)
            .with_rotation(t.rotation);
            surface.draw_region(&self.middle, &middle);
        }

        let right = Quad::new(self.width() + t.position.x, t.position.y, edge_width, t.dimension.y)
            .with_origin(t.origin.x + t.dimension.x / 8.0, t.origin.y)
            .with_scale(t.scale.x, t.scale.y)
            .with_rotation(t.rotation)
            .flipped_x(true);
        surface.draw_region(&self.edge, &right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::RecordingSurface;
    use raylib::prelude::Rectangle;

    fn segment() -> TerrainSegment {
        TerrainSegment::new(
            TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 8.0, 32.0)),
            TextureRegion::new("atlas", Rectangle::new(8.0, 0.0, 32.0, 32.0)),
        )
    }

    #[test]
    fn test_increase_length_keeps_position() {
        let mut rock = segment();
        rock.transform_mut().set_position(4.0, -1.25);
        rock.increase_length(2);
        assert_eq!(rock.length(), 3);
        assert_eq!(rock.width(), 3.0);
        assert_eq!(rock.transform().bounds.size.x, 3.0);
        assert_eq!(rock.transform().position.x, 4.0);
        assert_eq!(rock.transform().position.y, -1.25);
    }

    #[test]
    fn test_render_draws_edges_around_middle_pieces() {
        let mut rock = segment();
        rock.increase_length(1);
        let mut surface = RecordingSurface::new();
        rock.render(&mut surface);
        let quads: Vec<_> = surface.regions().map(|(_, q, _)| *q).collect();
        assert_eq!(quads.len(), 4);
        assert_eq!(quads[0].position.x, -0.25);
        assert_eq!(quads[1].position.x, 0.0);
        assert_eq!(quads[2].position.x, 1.0);
        assert_eq!(quads[3].position.x, 2.0);
        assert!(quads[3].flip_x);
    }
}
