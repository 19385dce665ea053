use std::sync::Arc;

use crate::resources::animationstore::AnimationClip;
use crate::resources::assetcatalog::TextureRegion;

/// Per-object playback state for a shared [`AnimationClip`].
#[derive(Debug, Clone)]
pub struct Animation {
    pub clip: Arc<AnimationClip>,
    /// Seconds since the clip started; may begin non-zero to offset the phase.
    pub state_time: f32,
}

impl Animation {
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            state_time: 0.0,
        }
    }

    /// Start playback `phase` seconds into the clip.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.state_time = phase;
        self
    }

    pub fn advance(&mut self, delta: f32) {
        self.state_time += delta;
    }

    /// Region to draw now, treating the clip as cyclic.
    pub fn current_looping(&self) -> Option<&TextureRegion> {
        self.clip.key_frame(self.state_time, true)
    }
}
