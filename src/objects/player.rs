//! The controllable character.
//!
//! Vertical motion is driven by a small jump state machine. Holding jump
//! while grounded starts a rise at full terminal speed for up to
//! [`JUMP_TIME_MAX`] seconds; releasing early still guarantees a rise of
//! [`JUMP_TIME_MIN`]. With the feather power-up active the player can start
//! a new rise from mid-air, which reads as flapping.

use raylib::prelude::{Color, Vector2};

use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform2D;
use crate::objects::GameObject;
use crate::render::surface::{Surface, WHITE};
use crate::resources::assetcatalog::TextureRegion;

pub const JUMP_TIME_MAX: f32 = 0.3;
pub const JUMP_TIME_MIN: f32 = 0.1;
pub const JUMP_TIME_OFFSET_FLYING: f32 = JUMP_TIME_MAX - 0.018;
pub const FEATHER_POWERUP_DURATION: f32 = 9.0;

const POWERUP_TINT: Color = Color {
    r: 255,
    g: 204,
    b: 0,
    a: 255,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    Falling,
    JumpRising,
    JumpFalling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDirection {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Player {
    transform: Transform2D,
    pub body: RigidBody,
    region: TextureRegion,
    spawn: Vector2,
    pub jump_state: JumpState,
    pub view_direction: ViewDirection,
    time_jumping: f32,
    has_feather_powerup: bool,
    time_left_feather_powerup: f32,
}

impl Player {
    pub fn new(region: TextureRegion, spawn: Vector2) -> Self {
        let mut transform = Transform2D::new(1.0, 1.0).with_origin(0.5, 0.5);
        transform.position = spawn;
        let mut body = RigidBody::new();
        body.terminal_velocity = Vector2 { x: 3.0, y: 4.0 };
        body.friction = Vector2 { x: 12.0, y: 0.0 };
        body.acceleration = Vector2 { x: 0.0, y: -25.0 };
        Self {
            transform,
            body,
            region,
            spawn,
            jump_state: JumpState::Falling,
            view_direction: ViewDirection::Right,
            time_jumping: 0.0,
            has_feather_powerup: false,
            time_left_feather_powerup: 0.0,
        }
    }

    pub fn spawn_point(&self) -> Vector2 {
        self.spawn
    }

    /// Put the player back on its spawn pixel with no momentum.
    pub fn respawn(&mut self) {
        self.transform.position = self.spawn;
        self.body.velocity = Vector2 { x: 0.0, y: 0.0 };
        self.jump_state = JumpState::Falling;
        self.time_jumping = 0.0;
        self.set_feather_powerup(false);
    }

    /// Feed the jump button state for this frame.
    pub fn set_jumping(&mut self, pressed: bool) {
        match self.jump_state {
            JumpState::Grounded => {
                if pressed {
                    self.time_jumping = 0.0;
                    self.jump_state = JumpState::JumpRising;
                }
            }
            JumpState::JumpRising => {
                if !pressed {
                    self.jump_state = JumpState::JumpFalling;
                }
            }
            JumpState::Falling | JumpState::JumpFalling => {
                if pressed && self.has_feather_powerup {
                    self.time_jumping = JUMP_TIME_OFFSET_FLYING;
                    self.jump_state = JumpState::JumpRising;
                }
            }
        }
    }

    /// `direction` is -1, 0 or 1. Zero leaves the current velocity to friction.
    pub fn move_horizontally(&mut self, direction: f32) {
        if direction != 0.0 {
            self.body.velocity.x = self.body.terminal_velocity.x * direction.signum();
        }
    }

    pub fn set_feather_powerup(&mut self, picked_up: bool) {
        self.has_feather_powerup = picked_up;
        if picked_up {
            self.time_left_feather_powerup = FEATHER_POWERUP_DURATION;
        }
    }

    pub fn has_feather_powerup(&self) -> bool {
        self.has_feather_powerup && self.time_left_feather_powerup > 0.0
    }

    pub fn time_left_feather_powerup(&self) -> f32 {
        self.time_left_feather_powerup
    }

    fn update_motion_y(&mut self, delta: f32) {
        match self.jump_state {
            JumpState::Grounded => {
                // Re-grounded by terrain collision every frame it still touches.
                self.jump_state = JumpState::Falling;
            }
            JumpState::JumpRising => {
                self.time_jumping += delta;
                if self.time_jumping <= JUMP_TIME_MAX {
                    self.body.velocity.y = self.body.terminal_velocity.y;
                }
            }
            JumpState::Falling => {}
            JumpState::JumpFalling => {
                self.time_jumping += delta;
                if self.time_jumping > 0.0 && self.time_jumping <= JUMP_TIME_MIN {
                    self.body.velocity.y = self.body.terminal_velocity.y;
                }
            }
        }
        if self.jump_state != JumpState::Grounded {
            self.body.update_motion_y(delta);
        }
    }
}

impl GameObject for Player {
    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn update(&mut self, delta: f32) {
        self.body.update_motion_x(delta);
        self.update_motion_y(delta);
        self.body.apply_velocity(&mut self.transform.position, delta);

        if self.body.velocity.x != 0.0 {
            self.view_direction = if self.body.velocity.x < 0.0 {
                ViewDirection::Left
            } else {
                ViewDirection::Right
            };
        }

        if self.time_left_feather_powerup > 0.0 {
            self.time_left_feather_powerup -= delta;
            if self.time_left_feather_powerup < 0.0 {
                self.time_left_feather_powerup = 0.0;
                self.set_feather_powerup(false);
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.has_feather_powerup() {
            surface.set_tint(POWERUP_TINT);
        }
        let quad = self
            .transform
            .quad()
            .flipped_x(self.view_direction == ViewDirection::Left);
        surface.draw_region(&self.region, &quad);
        surface.set_tint(WHITE);
    }
}
