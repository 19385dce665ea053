//! Input system.
//!
//! [`update_input_state`] reads the keyboard from raylib each frame and
//! writes the results into [`crate::resources::input::InputState`].
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    for binding in input.bindings_mut() {
        binding.active = rl.is_key_down(binding.key_binding);
        binding.just_pressed = rl.is_key_pressed(binding.key_binding);
    }
}
