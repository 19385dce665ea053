//! Shared spatial record carried by every game object.

use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::render::surface::Quad;

/// Position, size and pivot of an object in world units.
///
/// `position` is the bottom-left corner of the drawn quad in the y-up world.
/// `origin` is the pivot used for scaling and rotation, relative to
/// `position`. `bounds` is the collision box, also relative to `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub position: Vector2,
    pub dimension: Vector2,
    pub origin: Vector2,
    pub scale: Vector2,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f32,
    pub bounds: BoxCollider,
}

impl Transform2D {
    /// Transform at the world origin whose bounds cover `dimension`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            dimension: Vector2 {
                x: width,
                y: height,
            },
            origin: Vector2 { x: 0.0, y: 0.0 },
            scale: Vector2 { x: 1.0, y: 1.0 },
            rotation: 0.0,
            bounds: BoxCollider::new(width, height),
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vector2 { x, y };
        self
    }

    pub fn with_bounds(mut self, bounds: BoxCollider) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vector2 { x, y };
    }

    /// Collision test between two transforms' bounds.
    pub fn overlaps(&self, other: &Transform2D) -> bool {
        self.bounds
            .overlaps(self.position, &other.bounds, other.position)
    }

    /// Quad describing this transform as-is.
    pub fn quad(&self) -> Quad {
        Quad {
            position: self.position,
            origin: self.origin,
            dimension: self.dimension,
            scale: self.scale,
            rotation: self.rotation,
            flip_x: false,
            flip_y: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds_match_dimension() {
        let t = Transform2D::new(0.5, 0.5);
        assert_eq!(t.bounds.size.x, 0.5);
        assert_eq!(t.bounds.size.y, 0.5);
        assert_eq!(t.scale.x, 1.0);
    }

    #[test]
    fn test_overlaps_uses_positions() {
        let mut a = Transform2D::new(1.0, 1.0);
        let mut b = Transform2D::new(1.0, 1.0);
        a.set_position(0.0, 0.0);
        b.set_position(0.5, 0.5);
        assert!(a.overlaps(&b));
        b.set_position(4.0, 0.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_quad_copies_pivot() {
        let mut t = Transform2D::new(3.0, 3.0).with_origin(1.5, 0.0);
        t.set_position(2.0, -1.0);
        let quad = t.quad();
        assert_eq!(quad.position.x, 2.0);
        assert_eq!(quad.origin.x, 1.5);
        assert!(!quad.flip_x);
    }
}
