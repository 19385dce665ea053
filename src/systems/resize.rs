//! Fit the renderer's cameras to the window.
use bevy_ecs::prelude::*;

use crate::render::worldrenderer::WorldRenderer;
use crate::resources::windowsize::WindowSize;

/// Runs when the window size changed or a renderer was just inserted.
pub fn resize_system(window: Res<WindowSize>, renderer: Option<ResMut<WorldRenderer>>) {
    let Some(mut renderer) = renderer else {
        return;
    };
    if window.is_changed() || renderer.is_added() {
        renderer.resize(window.w as f32, window.h as f32);
    }
}
