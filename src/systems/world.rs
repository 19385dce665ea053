//! Gameplay step.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::world::controller::{ScreenRequest, WorldController};

/// Advance the [`WorldController`] by one frame and forward its screen
/// requests to [`NextGameState`].
pub fn world_update_system(
    controller: Option<ResMut<WorldController>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut next_state: ResMut<NextGameState>,
) {
    let Some(mut controller) = controller else {
        return;
    };
    let intent = input.player_input(time.delta);
    controller.update(time.delta, &intent);
    if let Some(request) = controller.take_screen_request() {
        debug!("screen request: {:?}", request);
        match request {
            ScreenRequest::Menu => next_state.set(GameStates::Menu),
        }
    }
}
