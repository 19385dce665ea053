//! Game state transition event and observer.
//!
//! Systems request a change of screen by updating [`NextGameState`].
//! [`check_pending_state`](crate::systems::gamestate::check_pending_state)
//! then emits a [`GameStateChangedEvent`], and the observer here applies the
//! transition to [`GameState`] and runs the enter system stored in
//! [`SystemsStore`] for the new state.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Apply the pending game state transition, if any.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// The enter hooks are looked up in [`SystemsStore`] under the keys
/// `"setup"`, `"enter_menu"`, `"enter_play"` and `"quit_game"`.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => debug!("No state change pending."),
    }
}

/// Hook key run when entering `state`.
pub fn enter_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Menu => Some("enter_menu"),
        GameStates::Playing => Some("enter_play"),
        GameStates::Quitting => Some("quit_game"),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(key) = enter_hook(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.get(key) {
        Some(id) => commands.run_system(*id),
        None => warn!("'{}' system not found in SystemsStore", key),
    }
}
