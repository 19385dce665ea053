use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::{Quad, Surface};
use crate::resources::assetcatalog::TextureRegion;

/// Water strip spanning far beyond both ends of the level.
#[derive(Debug, Clone)]
pub struct WaterOverlay {
    transform: Transform2D,
    region: TextureRegion,
}

impl WaterOverlay {
    pub fn new(region: TextureRegion, length: u32) -> Self {
        let mut transform = Transform2D::new(length as f32 * 10.0, 3.0);
        transform.origin.x = -transform.dimension.x / 2.0;
        Self { transform, region }
    }
}

impl GameObject for WaterOverlay {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, _delta: f32) {}

    fn render(&self, surface: &mut dyn Surface) {
        let t = &self.transform;
        let quad = Quad::new(
            t.position.x + t.origin.x,
            t.position.y + t.origin.y,
            t.dimension.x,
            t.dimension.y,
        )
        .with_origin(t.origin.x, t.origin.y)
        .with_scale(t.scale.x, t.scale.y)
        .with_rotation(t.rotation);
        surface.draw_region(&self.region, &quad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::RecordingSurface;
    use raylib::prelude::Rectangle;

    #[test]
    fn test_centered_on_position() {
        let mut water = WaterOverlay::new(TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 8.0, 64.0)), 20);
        water.transform_mut().set_position(0.0, -3.75);
        let mut surface = RecordingSurface::new();
        water.render(&mut surface);
        let (_, quad, _) = surface.regions().next().unwrap();
        assert_eq!(quad.position.x, -100.0);
        assert_eq!(quad.dimension.x, 200.0);
        assert_eq!(quad.position.y, -3.75);
    }
}
