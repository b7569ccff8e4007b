//! Simulation tick counter.

use bevy_ecs::prelude::Resource;

/// Number of completed `update` calls since the level was created.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTick {
    pub ticks: u64,
}
