//! Menu screen input.
//!
//! Starts a game, toggles the display preferences (saved to the config
//! file right away) or quits.
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;

pub fn menu_input_system(
    input: Res<InputState>,
    mut config: ResMut<GameConfig>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.action_jump.just_pressed || input.action_confirm.just_pressed {
        next_state.set(GameStates::Playing);
        return;
    }
    if input.action_back.just_pressed {
        next_state.set(GameStates::Quitting);
        return;
    }

    let mut changed = false;
    if input.toggle_fps_counter.just_pressed {
        config.show_fps_counter = !config.show_fps_counter;
        changed = true;
    }
    if input.toggle_monochrome.just_pressed {
        config.use_monochrome_shader = !config.use_monochrome_shader;
        changed = true;
    }
    if changed {
        info!(
            "preferences: show_fps_counter={}, use_monochrome_shader={}",
            config.show_fps_counter, config.use_monochrome_shader
        );
        if let Err(e) = config.save_to_file() {
            warn!("{}", e);
        }
    }
}
