//! Canyon Run library.
//!
//! A side-scrolling platformer whose levels are drawn as images: every pixel
//! color stands for a kind of object. This crate exposes the level decoder,
//! the game objects, the world controller and renderer, and the ECS glue
//! that drives them from a raylib window.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod objects;
pub mod render;
pub mod resources;
pub mod systems;
pub mod world;

#[cfg(test)]
mod testutil;
