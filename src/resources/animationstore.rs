//! Animation clip definitions.
//!
//! A clip is an immutable list of texture regions played at a fixed frame
//! duration. Clips are resolved once from the
//! [`AssetCatalog`](crate::resources::assetcatalog::AssetCatalog) and shared
//! between objects through an `Arc`; per-object playback time lives in
//! [`Animation`](crate::components::animation::Animation).

use serde::{Deserialize, Serialize};

use crate::resources::assetcatalog::TextureRegion;

/// How the frame index wraps once state time passes the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Stop on the last frame.
    #[default]
    Normal,
    /// Restart from the first frame.
    Loop,
    /// Run forward then backward, without repeating the end frames.
    LoopPingPong,
}

/// Immutable sprite-sheet animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub frames: Vec<TextureRegion>,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    pub play_mode: PlayMode,
}

impl AnimationClip {
    pub fn new(frames: Vec<TextureRegion>, frame_duration: f32, play_mode: PlayMode) -> Self {
        Self {
            frames,
            frame_duration,
            play_mode,
        }
    }

    /// Total seconds for one forward pass.
    pub fn duration(&self) -> f32 {
        self.frames.len() as f32 * self.frame_duration
    }

    /// Index of the frame visible at `state_time`.
    ///
    /// With `looping` set a [`PlayMode::Normal`] clip behaves as
    /// [`PlayMode::Loop`]. An empty clip always yields 0.
    pub fn key_frame_index(&self, state_time: f32, looping: bool) -> usize {
        let len = self.frames.len();
        if len <= 1 || self.frame_duration <= 0.0 {
            return 0;
        }
        let frame_number = (state_time.max(0.0) / self.frame_duration) as usize;
        let mode = match self.play_mode {
            PlayMode::Normal if looping => PlayMode::Loop,
            mode => mode,
        };
        match mode {
            PlayMode::Normal => frame_number.min(len - 1),
            PlayMode::Loop => frame_number % len,
            PlayMode::LoopPingPong => {
                let cycle = len * 2 - 2;
                let n = frame_number % cycle;
                if n >= len { cycle - n } else { n }
            }
        }
    }

    /// Region visible at `state_time`, `None` for an empty clip.
    pub fn key_frame(&self, state_time: f32, looping: bool) -> Option<&TextureRegion> {
        self.frames.get(self.key_frame_index(state_time, looping))
    }
}
