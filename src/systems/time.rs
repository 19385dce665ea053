//! Time update.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, outside the schedule.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Largest step fed to the simulation; longer frames are clamped so a
/// stalled window does not tunnel the player through the terrain.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Apply the time scale to the unscaled frame delta `dt` and advance
/// `elapsed`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.clamp(0.0, MAX_FRAME_DELTA) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_scaled_and_clamped() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 0.02);
        assert_eq!(world.resource::<WorldTime>().delta, 0.01);
        update_world_time(&mut world, 3.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, MAX_FRAME_DELTA * 0.5);
        assert!((wt.elapsed - 0.06).abs() < 1e-6);
    }
}
