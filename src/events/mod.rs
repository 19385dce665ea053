//! Event types and observers.
//!
//! - [`gamestate`] – screen transitions for the high-level game flow
pub mod gamestate;
