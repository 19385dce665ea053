//! Frame systems.
//!
//! Submodules overview
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read the keyboard into [`crate::resources::input::InputState`]
//! - [`menu`] – menu screen keys
//! - [`render`] – draw the current screen with raylib
//! - [`resize`] – fit the renderer's cameras to the window
//! - [`time`] – update simulation time and delta
//! - [`world`] – advance the world controller

pub mod gamestate;
pub mod input;
pub mod menu;
pub mod render;
pub mod resize;
pub mod time;
pub mod world;
