//! Player-ship control state.

use bevy_ecs::prelude::Component;

const DEFAULT_AMMO: u32 = 500;
const DEFAULT_MAX_ACCEL: f32 = 0.25;

/// Pointer-chasing control parameters plus the ship's stores.
///
/// The per-axis acceleration toward the pointer is bounded by `max_accel`;
/// the control law itself lives in the pilot system.
#[derive(Component, Clone, Copy, Debug)]
pub struct Pilot {
    /// Maximum acceleration magnitude per axis, map units per tick squared.
    pub max_accel: f32,
    /// Shots remaining; replenished by the driver on docking.
    pub ammo: u32,
    /// Ore collected from pickups.
    pub ore: u32,
    /// Ticks until the next shot may fire.
    pub fire_wait: i32,
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new(DEFAULT_AMMO)
    }
}

impl Pilot {
    pub fn new(ammo: u32) -> Self {
        Self {
            max_accel: DEFAULT_MAX_ACCEL,
            ammo,
            ore: 0,
            fire_wait: 0,
        }
    }
}
