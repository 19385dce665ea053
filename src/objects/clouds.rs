//! Drifting cloud layer drawn in front of the scene.

use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::{Quad, Surface};
use crate::resources::assetcatalog::TextureRegion;

const CLOUD_SPACING: u32 = 5;
const RESPAWN_LIMIT_X: f32 = -10.0;

#[derive(Debug, Clone)]
pub struct Cloud {
    pub position: Vector2,
    pub body: RigidBody,
    region: TextureRegion,
}

#[derive(Debug, Clone)]
pub struct Clouds {
    transform: Transform2D,
    regions: Vec<TextureRegion>,
    clouds: Vec<Cloud>,
    length: u32,
    rng: Rng,
}

impl Clouds {
    /// One cloud per five units of `length`, spread evenly from x = 0.
    pub fn new(regions: Vec<TextureRegion>, length: u32, rng: Rng) -> Self {
        let mut layer = Self {
            transform: Transform2D::new(3.0, 1.5),
            regions,
            clouds: Vec::new(),
            length,
            rng,
        };
        let count = length / CLOUD_SPACING;
        for i in 0..count {
            if let Some(mut cloud) = layer.spawn_cloud() {
                cloud.position.x = (i * CLOUD_SPACING) as f32;
                layer.clouds.push(cloud);
            }
        }
        layer
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    fn spawn_cloud(&mut self) -> Option<Cloud> {
        if self.regions.is_empty() {
            return None;
        }
        let region = self.regions[self.rng.usize(..self.regions.len())].clone();
        let jitter = self.rng.f32() * 0.2;
        let sign = if self.rng.bool() { 1.0 } else { -1.0 };
        let speed = 0.5 + self.rng.f32() * 0.75;

        let mut body = RigidBody::new();
        body.terminal_velocity = Vector2 { x: speed, y: 0.0 };
        body.velocity = Vector2 { x: -speed, y: 0.0 };
        Some(Cloud {
            position: Vector2 {
                x: self.length as f32 + 10.0,
                y: 1.75 + jitter * sign,
            },
            body,
            region,
        })
    }
}

impl GameObject for Clouds {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, delta: f32) {
        for i in 0..self.clouds.len() {
            let cloud = &mut self.clouds[i];
            cloud.body.integrate(&mut cloud.position, delta);
            if cloud.position.x < RESPAWN_LIMIT_X {
                if let Some(fresh) = self.spawn_cloud() {
                    self.clouds[i] = fresh;
                }
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        let t = &self.transform;
        for cloud in &self.clouds {
            let quad = Quad::new(
                cloud.position.x + t.origin.x,
                cloud.position.y + t.origin.y,
                t.dimension.x,
                t.dimension.y,
            )
            .with_origin(t.origin.x, t.origin.y)
            .with_scale(t.scale.x, t.scale.y);
            surface.draw_region(&cloud.region, &quad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    fn regions() -> Vec<TextureRegion> {
        (0..3)
            .map(|i| TextureRegion::new("atlas", Rectangle::new(i as f32 * 64.0, 0.0, 64.0, 32.0)))
            .collect()
    }

    #[test]
    fn test_one_cloud_per_five_units() {
        let clouds = Clouds::new(regions(), 128, Rng::with_seed(7));
        assert_eq!(clouds.clouds().len(), 25);
        assert_eq!(clouds.clouds()[3].position.x, 15.0);
        for cloud in clouds.clouds() {
            assert!(cloud.body.velocity.x <= -0.5 && cloud.body.velocity.x >= -1.25);
            assert!((cloud.position.y - 1.75).abs() <= 0.2 + 1e-5);
        }
    }

    #[test]
    fn test_cloud_leaving_left_edge_respawns_on_the_right() {
        let mut clouds = Clouds::new(regions(), 10, Rng::with_seed(1));
        assert_eq!(clouds.clouds().len(), 2);
        // 20 s at >= 0.5 u/s moves the first cloud (x = 0) past -10
        for _ in 0..200 {
            clouds.update(0.1);
        }
        assert_eq!(clouds.clouds().len(), 2);
        assert!(clouds.clouds().iter().all(|c| c.position.x >= RESPAWN_LIMIT_X));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Clouds::new(regions(), 50, Rng::with_seed(42));
        let b = Clouds::new(regions(), 50, Rng::with_seed(42));
        for (ca, cb) in a.clouds().iter().zip(b.clouds()) {
            assert_eq!(ca.position, cb.position);
            assert_eq!(ca.body.velocity, cb.body.velocity);
        }
    }
}
