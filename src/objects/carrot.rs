use raylib::prelude::Vector2;

use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::Surface;
use crate::resources::assetcatalog::TextureRegion;

/// Carrot that falls from the sky once the goal is reached and settles on
/// the goal's ground line.
#[derive(Debug, Clone)]
pub struct Carrot {
    transform: Transform2D,
    body: RigidBody,
    region: TextureRegion,
    floor: f32,
}

impl Carrot {
    pub fn new(region: TextureRegion, position: Vector2, rotation: f32, floor: f32) -> Self {
        let mut transform = Transform2D::new(0.25, 0.5).with_origin(0.125, 0.25);
        transform.position = position;
        transform.rotation = rotation;
        let mut body = RigidBody::new();
        body.terminal_velocity = Vector2 { x: 0.0, y: 6.0 };
        body.acceleration = Vector2 { x: 0.0, y: -9.8 };
        Self {
            transform,
            body,
            region,
            floor,
        }
    }

    pub fn is_resting(&self) -> bool {
        self.transform.position.y <= self.floor
    }
}

impl GameObject for Carrot {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, delta: f32) {
        if self.is_resting() {
            return;
        }
        self.body.integrate(&mut self.transform.position, delta);
        if self.transform.position.y < self.floor {
            self.transform.position.y = self.floor;
            self.body.velocity = Vector2 { x: 0.0, y: 0.0 };
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_region(&self.region, &self.transform.quad());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    #[test]
    fn test_falls_until_floor() {
        let region = TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 8.0, 16.0));
        let mut carrot = Carrot::new(region, Vector2 { x: 1.0, y: 5.0 }, 0.0, 0.0);
        for _ in 0..200 {
            carrot.update(0.05);
        }
        assert!(carrot.is_resting());
        assert_eq!(carrot.transform().position.y, 0.0);
        assert_eq!(carrot.transform().position.x, 1.0);
    }
}
