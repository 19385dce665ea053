use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::Surface;
use crate::resources::assetcatalog::TextureRegion;

pub const FEATHER_SCORE: u32 = 250;

/// Static pickup that grants the flying power-up.
#[derive(Debug, Clone)]
pub struct Feather {
    transform: Transform2D,
    region: TextureRegion,
    pub collected: bool,
}

impl Feather {
    pub fn new(region: TextureRegion) -> Self {
        Self {
            transform: Transform2D::new(0.5, 0.5),
            region,
            collected: false,
        }
    }

    pub fn score(&self) -> u32 {
        FEATHER_SCORE
    }
}

impl GameObject for Feather {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, _delta: f32) {}

    fn render(&self, surface: &mut dyn Surface) {
        if self.collected {
            return;
        }
        surface.draw_region(&self.region, &self.transform.quad());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::RecordingSurface;
    use raylib::prelude::Rectangle;

    #[test]
    fn test_render_skips_once_collected() {
        let mut feather = Feather::new(TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 16.0, 16.0)));
        let mut surface = RecordingSurface::new();
        feather.render(&mut surface);
        assert_eq!(surface.region_count(), 1);

        feather.collected = true;
        for _ in 0..3 {
            feather.update(0.016);
            feather.render(&mut surface);
        }
        assert_eq!(surface.region_count(), 1);
        assert_eq!(feather.score(), 250);
    }
}
