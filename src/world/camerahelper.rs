use raylib::prelude::Vector2;

use crate::render::camera::OrthoCamera;

pub const MAX_ZOOM_IN: f32 = 0.25;
pub const MAX_ZOOM_OUT: f32 = 10.0;
pub const FOLLOW_SPEED: f32 = 4.0;
/// The camera never looks further down than this.
pub const MIN_Y: f32 = -1.0;

/// Smoothly follows a target point and carries the zoom applied to the world camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraHelper {
    pub position: Vector2,
    zoom: f32,
    following: bool,
}

impl Default for CameraHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraHelper {
    pub fn new() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            zoom: 1.0,
            following: true,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MAX_ZOOM_IN, MAX_ZOOM_OUT);
    }

    pub fn add_zoom(&mut self, amount: f32) {
        self.set_zoom(self.zoom + amount);
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn set_following(&mut self, following: bool) {
        self.following = following;
    }

    /// Move toward `target` by a fraction of the remaining distance.
    pub fn update(&mut self, delta: f32, target: Option<Vector2>) {
        if !self.following {
            return;
        }
        let Some(target) = target else {
            return;
        };
        let alpha = (FOLLOW_SPEED * delta).clamp(0.0, 1.0);
        self.position.x += (target.x - self.position.x) * alpha;
        self.position.y += (target.y - self.position.y) * alpha;
        self.position.y = self.position.y.max(MIN_Y);
    }

    /// Snap to `target` without smoothing.
    pub fn jump_to(&mut self, target: Vector2) {
        self.position = target;
        self.position.y = self.position.y.max(MIN_Y);
    }

    pub fn apply_to(&self, camera: &mut OrthoCamera) {
        camera.position = self.position;
        camera.zoom = self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_follow_is_smoothed() {
        let mut helper = CameraHelper::new();
        helper.update(0.1, Some(Vector2 { x: 10.0, y: 5.0 }));
        assert!(approx_eq(helper.position.x, 4.0));
        assert!(approx_eq(helper.position.y, 2.0));
    }

    #[test]
    fn test_never_looks_below_limit() {
        let mut helper = CameraHelper::new();
        helper.update(1.0, Some(Vector2 { x: 0.0, y: -20.0 }));
        assert_eq!(helper.position.y, MIN_Y);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut helper = CameraHelper::new();
        helper.add_zoom(100.0);
        assert_eq!(helper.zoom(), MAX_ZOOM_OUT);
        helper.set_zoom(0.0);
        assert_eq!(helper.zoom(), MAX_ZOOM_IN);
    }

    #[test]
    fn test_not_following_keeps_position() {
        let mut helper = CameraHelper::new();
        helper.set_following(false);
        helper.update(1.0, Some(Vector2 { x: 3.0, y: 3.0 }));
        assert_eq!(helper.position.x, 0.0);
    }

    #[test]
    fn test_apply_to_camera() {
        let mut helper = CameraHelper::new();
        helper.jump_to(Vector2 { x: 7.0, y: 2.0 });
        helper.set_zoom(2.0);
        let mut camera = OrthoCamera::new(5.0, 5.0);
        helper.apply_to(&mut camera);
        assert_eq!(camera.position.x, 7.0);
        assert_eq!(camera.zoom, 2.0);
    }
}
