//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about and exposes them to systems via
//! [`InputState`]. Movement accepts both A/D and the arrow keys.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::world::controller::PlayerInput;

/// Zoom units per second while a zoom key is held.
pub const ZOOM_SPEED: f32 = 1.0;
/// Multiplier applied to the zoom speed while shift is held.
pub const ZOOM_SPEED_ACCELERATION_FACTOR: f32 = 5.0;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_left: BoolState,
    pub maindirection_right: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    pub action_jump: BoolState,
    pub action_jump_alt: BoolState,
    pub action_back: BoolState,
    pub action_confirm: BoolState,
    pub camera_zoom_in: BoolState,
    pub camera_zoom_out: BoolState,
    pub camera_zoom_reset: BoolState,
    pub camera_zoom_fast: BoolState,
    pub camera_follow_toggle: BoolState,
    pub toggle_fps_counter: BoolState,
    pub toggle_monochrome: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            secondarydirection_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            action_jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_jump_alt: BoolState::bound_to(KeyboardKey::KEY_UP),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            action_confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            camera_zoom_in: BoolState::bound_to(KeyboardKey::KEY_COMMA),
            camera_zoom_out: BoolState::bound_to(KeyboardKey::KEY_PERIOD),
            camera_zoom_reset: BoolState::bound_to(KeyboardKey::KEY_SLASH),
            camera_zoom_fast: BoolState::bound_to(KeyboardKey::KEY_LEFT_SHIFT),
            camera_follow_toggle: BoolState::bound_to(KeyboardKey::KEY_TAB),
            toggle_fps_counter: BoolState::bound_to(KeyboardKey::KEY_F),
            toggle_monochrome: BoolState::bound_to(KeyboardKey::KEY_M),
        }
    }
}

impl InputState {
    /// Mutable access to every binding, in a fixed order.
    pub fn bindings_mut(&mut self) -> [&mut BoolState; 15] {
        [
            &mut self.maindirection_left,
            &mut self.maindirection_right,
            &mut self.secondarydirection_left,
            &mut self.secondarydirection_right,
            &mut self.action_jump,
            &mut self.action_jump_alt,
            &mut self.action_back,
            &mut self.action_confirm,
            &mut self.camera_zoom_in,
            &mut self.camera_zoom_out,
            &mut self.camera_zoom_reset,
            &mut self.camera_zoom_fast,
            &mut self.camera_follow_toggle,
            &mut self.toggle_fps_counter,
            &mut self.toggle_monochrome,
        ]
    }

    /// Translate held keys into the player's intent for a frame lasting `delta`.
    pub fn player_input(&self, delta: f32) -> PlayerInput {
        let left = self.maindirection_left.active || self.secondarydirection_left.active;
        let right = self.maindirection_right.active || self.secondarydirection_right.active;
        let move_x = match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        let mut zoom_speed = ZOOM_SPEED * delta;
        if self.camera_zoom_fast.active {
            zoom_speed *= ZOOM_SPEED_ACCELERATION_FACTOR;
        }
        let mut zoom_delta = 0.0;
        if self.camera_zoom_in.active {
            zoom_delta -= zoom_speed;
        }
        if self.camera_zoom_out.active {
            zoom_delta += zoom_speed;
        }

        PlayerInput {
            move_x,
            jump: self.action_jump.active || self.action_jump_alt.active,
            back: self.action_back.just_pressed,
            zoom_delta,
            zoom_reset: self.camera_zoom_reset.just_pressed,
            toggle_follow: self.camera_follow_toggle.just_pressed,
        }
    }
}
