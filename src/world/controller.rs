//! Gameplay rules on top of a decoded [`Level`].
//!
//! The controller owns the live level plus an untouched copy used to restart
//! after a life is lost. Each frame it applies the player's intent, advances
//! the scene, resolves collisions, moves the camera helper and eases the
//! displayed score and lives toward their real values. When the game ends
//! or the goal is reached it waits out a delay and then asks to go back to
//! the menu through [`WorldController::take_screen_request`].

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::level::{CollisionView, Level, LevelError};
use crate::objects::GameObject;
use crate::objects::player::{JumpState, Player};
use crate::objects::terrain::TerrainSegment;
use crate::world::camerahelper::CameraHelper;

pub const LIVES_START: i32 = 3;
pub const TIME_DELAY_GAME_OVER: f32 = 3.0;
pub const TIME_DELAY_GAME_FINISHED: f32 = 6.0;
/// Below this height the player has fallen into the water.
pub const WATER_LEVEL: f32 = -5.0;
pub const SCORE_VISUAL_RATE: f32 = 250.0;
pub const LIVES_VISUAL_RATE: f32 = 1.0;
pub const CARROTS_SPAWN_COUNT: usize = 20;
/// Player heights closer than this to a rock's top count as standing on it.
const LANDING_TOLERANCE: f32 = 0.25;

/// Player intent for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// -1 left, 1 right, 0 none.
    pub move_x: f32,
    pub jump: bool,
    pub back: bool,
    /// Added to the camera zoom.
    pub zoom_delta: f32,
    pub zoom_reset: bool,
    pub toggle_follow: bool,
}

/// Screen change asked for by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRequest {
    Menu,
}

#[derive(Resource, Debug)]
pub struct WorldController {
    level: Level,
    pristine: Level,
    camera_helper: CameraHelper,
    rng: Rng,
    score: u32,
    score_visual: f32,
    lives: i32,
    lives_visual: f32,
    time_left_delay: f32,
    goal_reached: bool,
    elapsed: f32,
    screen_request: Option<ScreenRequest>,
}

impl WorldController {
    /// Take ownership of a freshly decoded level. Fails when it has no player.
    pub fn new(level: Level, rng: Rng) -> Result<Self, LevelError> {
        if level.player().is_none() {
            return Err(LevelError::NoSpawnPoint);
        }
        let mut controller = Self {
            pristine: level.clone(),
            level,
            camera_helper: CameraHelper::new(),
            rng,
            score: 0,
            score_visual: 0.0,
            lives: LIVES_START,
            lives_visual: LIVES_START as f32,
            time_left_delay: 0.0,
            goal_reached: false,
            elapsed: 0.0,
            screen_request: None,
        };
        controller.init_level();
        Ok(controller)
    }

    /// Restore the level as decoded and reset per-attempt state. Lives are kept.
    fn init_level(&mut self) {
        self.level = self.pristine.clone();
        self.score = 0;
        self.score_visual = 0.0;
        self.goal_reached = false;
        if let Some(target) = self.camera_target() {
            self.camera_helper.jump_to(target);
        }
        info!("level '{}' started, {} lives left", self.level.name(), self.lives);
    }

    fn camera_target(&self) -> Option<Vector2> {
        self.level.player().map(|p| {
            let t = p.transform();
            Vector2 {
                x: t.position.x + t.origin.x,
                y: t.position.y + t.origin.y,
            }
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn camera_helper(&self) -> &CameraHelper {
        &self.camera_helper
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_visual(&self) -> f32 {
        self.score_visual
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn lives_visual(&self) -> f32 {
        self.lives_visual
    }

    pub fn is_game_over(&self) -> bool {
        self.lives < 0
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    /// Seconds since the controller was created.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn time_left_feather_powerup(&self) -> f32 {
        self.level
            .player()
            .map(|p| p.time_left_feather_powerup())
            .unwrap_or(0.0)
    }

    pub fn is_player_in_water(&self) -> bool {
        self.level
            .player()
            .is_some_and(|p| p.transform().position.y < WATER_LEVEL)
    }

    /// Returns the pending screen change, clearing it.
    pub fn take_screen_request(&mut self) -> Option<ScreenRequest> {
        self.screen_request.take()
    }

    fn back_to_menu(&mut self) {
        if self.screen_request.is_none() {
            debug!("world requests the menu");
        }
        self.screen_request = Some(ScreenRequest::Menu);
    }

    pub fn update(&mut self, delta: f32, input: &PlayerInput) {
        self.elapsed += delta;
        self.handle_camera_input(input);

        if input.back {
            self.back_to_menu();
        }
        if self.is_game_over() || self.goal_reached {
            self.time_left_delay -= delta;
            if self.time_left_delay < 0.0 {
                self.back_to_menu();
            }
        } else {
            self.handle_player_input(input);
        }

        self.level.update(delta);
        self.test_collisions();
        let target = self.camera_target();
        self.camera_helper.update(delta, target);

        if !self.is_game_over() && self.is_player_in_water() {
            self.lives -= 1;
            if self.is_game_over() {
                info!("game over");
                self.time_left_delay = TIME_DELAY_GAME_OVER;
            } else {
                self.init_level();
            }
        }

        let camera_position = self.camera_helper.position;
        self.level.mountains_mut().update_scroll_position(camera_position);

        if self.lives_visual > self.lives as f32 {
            self.lives_visual =
                (self.lives as f32).max(self.lives_visual - LIVES_VISUAL_RATE * delta);
        }
        if self.score_visual < self.score as f32 {
            self.score_visual =
                (self.score as f32).min(self.score_visual + SCORE_VISUAL_RATE * delta);
        }
    }

    fn handle_camera_input(&mut self, input: &PlayerInput) {
        if input.toggle_follow {
            let follow = !self.camera_helper.is_following();
            self.camera_helper.set_following(follow);
            debug!("camera follow: {}", follow);
        }
        if input.zoom_delta != 0.0 {
            self.camera_helper.add_zoom(input.zoom_delta);
        }
        if input.zoom_reset {
            self.camera_helper.set_zoom(1.0);
        }
    }

    fn handle_player_input(&mut self, input: &PlayerInput) {
        if !self.camera_helper.is_following() {
            return;
        }
        if let Some(player) = self.level.player_mut() {
            player.move_horizontally(input.move_x);
            player.set_jumping(input.jump);
        }
    }

    fn test_collisions(&mut self) {
        let goal_reached = self.goal_reached;
        let Some(view) = self.level.split_for_collisions() else {
            return;
        };
        let CollisionView {
            player,
            terrain,
            coins,
            feathers,
            goal,
        } = view;
        // bounds are tested against where the player was before any push-out
        let probe = *player.transform();

        for rock in terrain.iter().filter(|r| r.transform().overlaps(&probe)) {
            resolve_rock_collision(player, rock);
        }

        if let Some(coin) = coins
            .iter_mut()
            .find(|c| !c.collected && c.transform().overlaps(&probe))
        {
            coin.collected = true;
            self.score += coin.score();
            debug!("gold coin collected, score {}", self.score);
        }

        if let Some(feather) = feathers
            .iter_mut()
            .find(|f| !f.collected && f.transform().overlaps(&probe))
        {
            feather.collected = true;
            self.score += feather.score();
            player.set_feather_powerup(true);
            debug!("feather collected, score {}", self.score);
        }

        let hit_goal = !goal_reached && goal.is_some_and(|g| g.transform().overlaps(&probe));
        if hit_goal {
            self.goal_reached = true;
            self.time_left_delay = TIME_DELAY_GAME_FINISHED;
            self.level.spawn_carrots(&mut self.rng, CARROTS_SPAWN_COUNT);
            info!("goal reached with score {}", self.score);
        }
    }
}

fn resolve_rock_collision(player: &mut Player, rock: &TerrainSegment) {
    let rock_t = rock.transform();
    let rock_top = rock_t.position.y + rock_t.bounds.height();
    let bounds_w = player.transform().bounds.width();
    let bounds_h = player.transform().bounds.height();
    let origin_y = player.transform().origin.y;
    let position = &mut player.transform_mut().position;

    if (position.y - rock_top).abs() > LANDING_TOLERANCE {
        let hit_right_edge = position.x > rock_t.position.x + rock_t.bounds.width() / 2.0;
        if hit_right_edge {
            position.x = rock_t.position.x + rock_t.bounds.width();
        } else {
            position.x = rock_t.position.x - bounds_w;
        }
        return;
    }

    match player.jump_state {
        JumpState::Grounded => {}
        JumpState::Falling | JumpState::JumpFalling => {
            player.transform_mut().position.y = rock_t.position.y + bounds_h + origin_y;
            player.jump_state = JumpState::Grounded;
        }
        JumpState::JumpRising => {
            player.transform_mut().position.y = rock_t.position.y + bounds_h + origin_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelDecoder;
    use crate::testutil::{complete_catalog, image_from_rows};

    const DT: f32 = 1.0 / 60.0;
    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn controller(rows: &[&str]) -> WorldController {
        let catalog = complete_catalog();
        let level = LevelDecoder::new(&catalog)
            .with_seed(3)
            .decode(&image_from_rows(rows), "test")
            .unwrap();
        WorldController::new(level, Rng::with_seed(3)).unwrap()
    }

    fn run(world: &mut WorldController, frames: usize, input: PlayerInput) {
        for _ in 0..frames {
            world.update(DT, &input);
        }
    }

    #[test]
    fn test_level_without_spawn_is_rejected() {
        let catalog = complete_catalog();
        let level = LevelDecoder::new(&catalog)
            .decode(&image_from_rows(&["GGG"]), "empty")
            .unwrap();
        assert!(matches!(
            WorldController::new(level, Rng::with_seed(1)),
            Err(LevelError::NoSpawnPoint)
        ));
    }

    #[test]
    fn test_player_lands_on_terrain() {
        let mut world = controller(&["S", ".", "G"]);
        run(&mut world, 120, PlayerInput::default());
        let player = world.level().player().unwrap();
        assert_eq!(player.jump_state, JumpState::Grounded);
        assert!(approx_eq(player.transform().position.y, -0.625));
        assert_eq!(world.lives(), LIVES_START);
    }

    #[test]
    fn test_coin_scores_and_display_catches_up() {
        let mut world = controller(&["S", "C"]);
        run(&mut world, 1, PlayerInput::default());
        assert_eq!(world.score(), 100);
        assert!(world.level().coins()[0].collected);
        assert!(world.score_visual() < 100.0);

        run(&mut world, 30, PlayerInput::default());
        assert_eq!(world.score(), 100);
        assert_eq!(world.score_visual(), 100.0);
    }

    #[test]
    fn test_feather_grants_powerup() {
        let mut world = controller(&["S", "F"]);
        run(&mut world, 1, PlayerInput::default());
        assert_eq!(world.score(), 250);
        assert!(world.time_left_feather_powerup() > 8.9);
        assert!(world.level().player().unwrap().has_feather_powerup());
    }

    #[test]
    fn test_falling_in_water_costs_a_life_then_game_over() {
        let mut world = controller(&["S"]);
        let spawn_y = world.level().player().unwrap().spawn_point().y;

        let mut frames = 0;
        while world.lives() == LIVES_START && frames < 600 {
            run(&mut world, 1, PlayerInput::default());
            frames += 1;
        }
        assert_eq!(world.lives(), LIVES_START - 1);
        assert_eq!(world.level().player().unwrap().transform().position.y, spawn_y);
        assert!(world.lives_visual() > world.lives() as f32);

        let mut request = None;
        for _ in 0..2000 {
            run(&mut world, 1, PlayerInput::default());
            request = world.take_screen_request();
            if request.is_some() {
                break;
            }
        }
        assert!(world.is_game_over());
        assert_eq!(world.lives(), -1);
        assert_eq!(request, Some(ScreenRequest::Menu));
    }

    #[test]
    fn test_goal_drops_carrots_and_returns_to_menu() {
        let mut world = controller(&["S..", "...", "..R", "GGG"]);
        let right = PlayerInput {
            move_x: 1.0,
            ..Default::default()
        };
        let mut frames = 0;
        while !world.goal_reached() && frames < 300 {
            run(&mut world, 1, right);
            frames += 1;
        }
        assert!(world.goal_reached());
        assert_eq!(world.level().carrots().len(), CARROTS_SPAWN_COUNT);
        assert!(world.take_screen_request().is_none());

        run(&mut world, (TIME_DELAY_GAME_FINISHED / DT) as usize + 2, right);
        assert_eq!(world.take_screen_request(), Some(ScreenRequest::Menu));
        assert!(!world.is_game_over());
    }

    #[test]
    fn test_back_requests_menu_immediately() {
        let mut world = controller(&["S", ".", "G"]);
        let back = PlayerInput {
            back: true,
            ..Default::default()
        };
        world.update(DT, &back);
        assert_eq!(world.take_screen_request(), Some(ScreenRequest::Menu));
        assert_eq!(world.take_screen_request(), None);
    }

    #[test]
    fn test_side_hit_pushes_player_out() {
        use crate::resources::assetcatalog::TextureRegion;
        use raylib::prelude::Rectangle;

        let region = TextureRegion::new("atlas", Rectangle::new(0.0, 0.0, 32.0, 32.0));
        let mut rock = TerrainSegment::new(region.clone(), region.clone());
        rock.increase_length(2);
        rock.transform_mut().set_position(0.0, -2.125);

        let mut player = Player::new(region.clone(), Vector2 { x: 2.5, y: -1.5 });
        resolve_rock_collision(&mut player, &rock);
        assert_eq!(player.transform().position.x, 3.0);

        let mut player = Player::new(region, Vector2 { x: 0.5, y: -1.5 });
        resolve_rock_collision(&mut player, &rock);
        assert_eq!(player.transform().position.x, -1.0);
        assert_eq!(player.jump_state, JumpState::Falling);
    }
}
