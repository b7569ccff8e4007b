//! Enemy drone behavior.

use bevy_ecs::prelude::Component;

/// Fires a shot from the drone's stern every `fire_period` ticks.
#[derive(Component, Clone, Copy, Debug)]
pub struct Drone {
    pub fire_period: u32,
    pub ticks_to_fire: i32,
}

impl Drone {
    pub fn new(fire_period: u32) -> Self {
        Self {
            fire_period,
            ticks_to_fire: fire_period as i32,
        }
    }
}
