//! Canyon Run main entry point.
//!
//! A side-scrolling platformer built on:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for resources, systems and state transitions
//! - **image** for reading level images
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and the command line, open the window
//! 2. Register the state enter systems and the transition observer
//! 3. Enter `Setup`, which loads the atlas and moves on to the menu
//! 4. Every frame: read input, apply pending transitions, advance the world
//!    or the menu, fit the cameras to the window and draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/level-01.png
//! cargo run -- --check --seed 7
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use canyonrun::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use canyonrun::game;
use canyonrun::objects::GameObject;
use canyonrun::render::surface::RecordingSurface;
use canyonrun::resources::assetcatalog::AssetCatalog;
use canyonrun::resources::gameconfig::GameConfig;
use canyonrun::resources::gamestate::{GameState, GameStates, NextGameState};
use canyonrun::resources::input::InputState;
use canyonrun::resources::shaderstore::ShaderStore;
use canyonrun::resources::systemsstore::SystemsStore;
use canyonrun::resources::windowsize::WindowSize;
use canyonrun::resources::worldtime::WorldTime;
use canyonrun::systems::gamestate::{check_pending_state, state_is_menu, state_is_playing};
use canyonrun::systems::input::update_input_state;
use canyonrun::systems::menu::menu_input_system;
use canyonrun::systems::render::render_system;
use canyonrun::systems::resize::resize_system;
use canyonrun::systems::time::update_world_time;
use canyonrun::systems::world::world_update_system;
use canyonrun::world::controller::PlayerInput;

/// Canyon Run
#[derive(Parser)]
#[command(version, about = "A platformer whose levels are drawn as images.")]
struct Cli {
    /// Level image to play instead of the configured one.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Atlas description to load instead of the configured one.
    #[arg(long, value_name = "PATH")]
    atlas: Option<PathBuf>,

    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fixed seed for level decoration and rewards.
    #[arg(long)]
    seed: Option<u64>,

    /// Decode the level, draw one frame off-screen, print a summary and exit.
    #[arg(long)]
    check: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }
    if let Some(atlas) = cli.atlas {
        config.atlas_path = atlas;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Early-exit: headless level check (no window needed)
    if cli.check {
        if let Err(e) = run_check(&config) {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    run_window(config);
}

/// Decode the configured level, run one frame against a recording surface
/// and print what was built.
fn run_check(config: &GameConfig) -> Result<(), String> {
    let catalog = AssetCatalog::load_from_file(&config.atlas_path).map_err(|e| e.to_string())?;
    let (mut controller, mut renderer) =
        game::build_world(&catalog, config).map_err(|e| e.to_string())?;
    renderer.resize(config.window_width as f32, config.window_height as f32);

    controller.update(1.0 / 60.0, &PlayerInput::default());
    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface, &controller, config, config.target_fps);

    let level = controller.level();
    let (width, height) = level.size();
    println!("level:    {} ({}x{} px)", level.name(), width, height);
    println!("terrain:  {} segments", level.terrain().len());
    println!("coins:    {}", level.coins().len());
    println!("feathers: {}", level.feathers().len());
    if let Some(player) = level.player() {
        let p = player.spawn_point();
        println!("spawn:    ({:.2}, {:.2})", p.x, p.y);
    }
    match level.goal() {
        Some(goal) => {
            let p = goal.transform().position;
            println!("goal:     ({:.2}, {:.2})", p.x, p.y);
        }
        None => println!("goal:     none"),
    }
    println!("draws:    {} regions in the first frame", surface.region_count());
    Ok(())
}

fn run_window(config: GameConfig) {
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Canyon Run");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // ESC goes back to the menu instead of closing the window
    rl.set_exit_key(None);

    let shaders = ShaderStore::load_builtin(&mut rl, &thread);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WindowSize::new(rl.get_screen_width(), rl.get_screen_height()));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(shaders);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(observe_gamestate_change_event));

    let mut systems_store = SystemsStore::new();
    systems_store.register(&mut world, "setup", game::setup);
    systems_store.register(&mut world, "enter_menu", game::enter_menu);
    systems_store.register(&mut world, "enter_play", game::enter_play);
    systems_store.register(&mut world, "quit_game", game::quit_game);
    world.insert_resource(systems_store);

    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup right away

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        menu_input_system
            .run_if(state_is_menu)
            .after(check_pending_state),
    );
    update.add_systems(
        world_update_system
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(resize_system.after(world_update_system));
    update.add_systems(
        render_system
            .after(resize_system)
            .after(menu_input_system),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        let window = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            WindowSize::new(rl.get_screen_width(), rl.get_screen_height())
        };
        if *world.resource::<WindowSize>() != window {
            *world.resource_mut::<WindowSize>() = window;
        }
    }
    info!("Bye");
}
