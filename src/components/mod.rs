//! Building blocks shared by the game objects.
//!
//! Submodules overview:
//! - [`animation`] – playback state of an animation clip
//! - [`boxcollider`] – axis-aligned collision box relative to a transform
//! - [`rigidbody`] – velocity integration with friction and terminal speed
//! - [`transform`] – position, origin, size, scale and rotation of an object

pub mod animation;
pub mod boxcollider;
pub mod rigidbody;
pub mod transform;
