//! Entity archetypes.
//!
//! The kind selects the model (animation table), the capability tags and the
//! destroy behavior of an entity. Replacing per-archetype subclasses with a
//! single enum keeps classification a data lookup.

use bevy_ecs::prelude::Component;

use crate::components::tags::{Capability, Tags};

const DEFAULT_LAYER: i32 = 1;
const PLAYER_LAYER: i32 = 3;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    PlayerShot,
    BigAsteroid,
    Asteroid,
    OreAsteroid,
    Ore,
    Drone,
    DroneShot,
    Explosion,
    Station,
}

impl EntityKind {
    /// Capability tags entities of this kind carry.
    pub fn tags(self) -> Tags {
        match self {
            EntityKind::Player => Tags::of(&[Capability::Player]),
            EntityKind::PlayerShot => Tags::of(&[Capability::PlayerShot]),
            EntityKind::BigAsteroid | EntityKind::Asteroid | EntityKind::OreAsteroid => {
                Tags::of(&[Capability::DamagesPlayer, Capability::DamagesPlayerShots])
            }
            EntityKind::Ore => Tags::of(&[Capability::Pickup]),
            EntityKind::Drone => {
                Tags::of(&[Capability::DamagesPlayer, Capability::DamagesPlayerShots])
            }
            EntityKind::DroneShot => Tags::of(&[Capability::DamagesPlayer]),
            EntityKind::Explosion => Tags::of(&[Capability::Explosion]),
            EntityKind::Station => Tags::of(&[Capability::DocksWithPlayer]),
        }
    }

    /// Draw-order layer; the player renders above everything else.
    pub fn layer(self) -> i32 {
        match self {
            EntityKind::Player => PLAYER_LAYER,
            _ => DEFAULT_LAYER,
        }
    }

    /// Stations never cull, they anchor the map.
    pub fn cull_exempt(self) -> bool {
        matches!(self, EntityKind::Station)
    }
}
