//! ECS resources and the data stores they wrap.
//!
//! Overview
//! - `animationstore` – animation clips and play modes
//! - `assetcatalog` – regions and clips by key, read from a JSON atlas
//! - `gameconfig` – settings read from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `shaderstore` – compiled shaders (non-send)
//! - `systemsstore` – registry of state enter systems by name
//! - `texturestore` – loaded textures keyed by the atlas' texture names
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod assetcatalog;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod shaderstore;
pub mod systemsstore;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
