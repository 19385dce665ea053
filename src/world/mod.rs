//! Gameplay simulation.
//!
//! - [`controller`] – score, lives, collisions and screen requests
//! - [`camerahelper`] – smoothed camera follow and zoom

pub mod camerahelper;
pub mod controller;

pub use camerahelper::CameraHelper;
pub use controller::{PlayerInput, ScreenRequest, WorldController};
