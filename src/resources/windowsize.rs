//! Window size resource.
//!
//! Tracks the window dimensions in pixels. Updated each frame; the resize
//! system compares it against the size the cameras were last fitted to.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// A minimized window reports a zero dimension.
    pub fn is_drawable(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}
