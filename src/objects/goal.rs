use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::Surface;
use crate::resources::assetcatalog::TextureRegion;

/// End-of-level flag.
///
/// The trigger box starts one unit right of the flag, is ten units wide and
/// reaches from the flag's foot upward without limit, so the player cannot
/// jump over it.
#[derive(Debug, Clone)]
pub struct Goal {
    transform: Transform2D,
    region: TextureRegion,
}

impl Goal {
    pub fn new(region: TextureRegion) -> Self {
        let bounds = BoxCollider::new(10.0, f32::MAX).with_offset(Vector2 { x: 1.0, y: 0.0 });
        let transform = Transform2D::new(3.0, 3.0)
            .with_origin(1.5, 0.0)
            .with_bounds(bounds);
        Self { transform, region }
    }
}

impl GameObject for Goal {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, _delta: f32) {}

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_region(&self.region, &self.transform.quad());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    #[test]
    fn test_trigger_reaches_high_above() {
        let mut goal = Goal::new(TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 64.0, 64.0)));
        goal.transform_mut().set_position(20.0, -2.0);
        let mut probe = Transform2D::new(1.0, 1.0);
        probe.set_position(22.0, 40.0);
        assert!(goal.transform().overlaps(&probe));
        probe.set_position(19.0, 0.0);
        assert!(!goal.transform().overlaps(&probe));
    }
}
