//! Kinematic body used by objects that move on their own.
//!
//! The [`RigidBody`] stores velocity plus the three parameters that shape it
//! every frame: a constant acceleration (gravity), a per-axis friction that
//! decays velocity toward zero, and a per-axis terminal velocity clamp.
//!
//! Integration order per axis is friction, then acceleration, then clamp,
//! and only after both axes are resolved is the position advanced.

use raylib::prelude::Vector2;

/// Velocity and the forces acting on it.
///
/// # Example
/// ```ignore
/// let mut body = RigidBody::new();
/// body.terminal_velocity = Vector2 { x: 3.0, y: 4.0 };
/// body.friction = Vector2 { x: 12.0, y: 0.0 };
/// body.acceleration = Vector2 { x: 0.0, y: -25.0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Absolute per-axis speed limit.
    pub terminal_velocity: Vector2,
    /// Per-axis deceleration toward zero, in units per second squared.
    pub friction: Vector2,
    /// Constant acceleration applied every frame.
    pub acceleration: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Body at rest with a terminal velocity of one unit per second.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            terminal_velocity: Vector2 { x: 1.0, y: 1.0 },
            friction: Vector2 { x: 0.0, y: 0.0 },
            acceleration: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn update_motion_x(&mut self, delta: f32) {
        self.velocity.x = step_axis(
            self.velocity.x,
            self.friction.x,
            self.acceleration.x,
            self.terminal_velocity.x,
            delta,
        );
    }

    pub fn update_motion_y(&mut self, delta: f32) {
        self.velocity.y = step_axis(
            self.velocity.y,
            self.friction.y,
            self.acceleration.y,
            self.terminal_velocity.y,
            delta,
        );
    }

    /// Move `position` by the current velocity.
    pub fn apply_velocity(&self, position: &mut Vector2, delta: f32) {
        position.x += self.velocity.x * delta;
        position.y += self.velocity.y * delta;
    }

    /// Full step: both axes, then position.
    pub fn integrate(&mut self, position: &mut Vector2, delta: f32) {
        self.update_motion_x(delta);
        self.update_motion_y(delta);
        self.apply_velocity(position, delta);
    }
}

fn step_axis(velocity: f32, friction: f32, acceleration: f32, terminal: f32, delta: f32) -> f32 {
    let mut v = velocity;
    if v > 0.0 {
        v = (v - friction * delta).max(0.0);
    } else if v < 0.0 {
        v = (v + friction * delta).min(0.0);
    }
    v += acceleration * delta;
    let limit = terminal.abs();
    v.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_friction_never_reverses_direction() {
        let mut rb = RigidBody::new();
        rb.terminal_velocity = Vector2 { x: 3.0, y: 4.0 };
        rb.friction = Vector2 { x: 12.0, y: 0.0 };
        rb.velocity.x = 0.5;
        rb.update_motion_x(1.0);
        assert!(approx_eq(rb.velocity.x, 0.0));

        rb.velocity.x = -0.5;
        rb.update_motion_x(1.0);
        assert!(approx_eq(rb.velocity.x, 0.0));
    }

    #[test]
    fn test_acceleration_is_clamped_to_terminal_velocity() {
        let mut rb = RigidBody::new();
        rb.terminal_velocity = Vector2 { x: 3.0, y: 4.0 };
        rb.acceleration = Vector2 { x: 0.0, y: -25.0 };
        rb.update_motion_y(1.0);
        assert!(approx_eq(rb.velocity.y, -4.0));
    }

    #[test]
    fn test_integrate_moves_position() {
        let mut rb = RigidBody::new();
        rb.terminal_velocity = Vector2 { x: 2.0, y: 2.0 };
        rb.velocity = Vector2 { x: -1.0, y: 0.0 };
        let mut pos = Vector2 { x: 10.0, y: 1.0 };
        rb.integrate(&mut pos, 0.5);
        assert!(approx_eq(pos.x, 9.5));
        assert!(approx_eq(pos.y, 1.0));
    }

    #[test]
    fn test_velocity_above_terminal_is_clamped() {
        let mut rb = RigidBody::new();
        rb.velocity.x = -5.0;
        rb.update_motion_x(0.016);
        assert!(approx_eq(rb.velocity.x, -1.0));
    }
}
