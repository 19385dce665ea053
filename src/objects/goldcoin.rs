use std::sync::Arc;

use crate::components::animation::Animation;
use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::Surface;
use crate::resources::animationstore::AnimationClip;

pub const GOLD_COIN_SCORE: u32 = 100;

/// Spinning coin. Keeps animating after it is collected, but is no longer drawn.
#[derive(Debug, Clone)]
pub struct GoldCoin {
    transform: Transform2D,
    animation: Animation,
    pub collected: bool,
}

impl GoldCoin {
    /// `phase` is the initial state time, so neighbouring coins spin out of step.
    pub fn new(clip: Arc<AnimationClip>, phase: f32) -> Self {
        Self {
            transform: Transform2D::new(0.5, 0.5),
            animation: Animation::new(clip).with_phase(phase),
            collected: false,
        }
    }

    pub fn score(&self) -> u32 {
        GOLD_COIN_SCORE
    }

    pub fn state_time(&self) -> f32 {
        self.animation.state_time
    }
}

impl GameObject for GoldCoin {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, delta: f32) {
        self.animation.advance(delta);
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.collected {
            return;
        }
        if let Some(region) = self.animation.current_looping() {
            surface.draw_region(region, &self.transform.quad());
        }
    }
}
