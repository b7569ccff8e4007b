//! Tick-budget component for self-expiring entities.

use bevy_ecs::prelude::Component;

/// Remaining ticks before the entity is killed, regardless of collisions.
/// The kill leaves the screen immediately and spawns no explosion.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ttl {
    pub remaining: u32,
}

impl Ttl {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }
}
