//! Drawing.
//!
//! - [`camera`] – orthographic camera in world or GUI units
//! - [`surface`] – the drawing abstraction objects render through
//! - [`menuscreen`] – title screen text
//! - [`raylibsurface`] – surface drawing into a raylib window
//! - [`worldrenderer`] – world pass and HUD

pub mod camera;
pub mod menuscreen;
pub mod raylibsurface;
pub mod surface;
pub mod worldrenderer;

pub use camera::OrthoCamera;
pub use surface::{Quad, RecordingSurface, Surface, TextAlign};
pub use worldrenderer::WorldRenderer;
