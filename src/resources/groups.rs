//! Master entity set and per-category group indices.
//!
//! The groups are subset indices into the master set, not copies: spawn and
//! kill update the master set and every relevant group in the same call, so
//! no intermediate state is ever observable. Vectors keep insertion order,
//! which is the iteration order collision resolution depends on.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::tags::{Capability, Tags};

#[derive(Resource, Default, Debug)]
pub struct Groups {
    /// Every live entity, in spawn order. Membership is unique.
    pub all: Vec<Entity>,
    pub damages_player: Vec<Entity>,
    pub damages_player_shots: Vec<Entity>,
    pub dockable: Vec<Entity>,
    pub pickups: Vec<Entity>,
    pub player_shots: Vec<Entity>,
    pub explosions: Vec<Entity>,
}

impl Groups {
    fn lane(&mut self, cap: Capability) -> Option<&mut Vec<Entity>> {
        match cap {
            Capability::DamagesPlayer => Some(&mut self.damages_player),
            Capability::DamagesPlayerShots => Some(&mut self.damages_player_shots),
            Capability::DocksWithPlayer => Some(&mut self.dockable),
            Capability::Pickup => Some(&mut self.pickups),
            Capability::PlayerShot => Some(&mut self.player_shots),
            Capability::Explosion => Some(&mut self.explosions),
            // The player is tracked by PlayerRef, not by a group.
            Capability::Player => None,
        }
    }

    /// Add to the master set and to every group the tags classify into.
    pub fn insert(&mut self, entity: Entity, tags: Tags) {
        debug_assert!(!self.all.contains(&entity), "entity already in master set");
        self.all.push(entity);
        for cap in tags.classify() {
            if let Some(lane) = self.lane(cap) {
                lane.push(entity);
            }
        }
    }

    /// Remove from the master set and every group. Returns false when the
    /// entity was not a member (making double removal a no-op).
    pub fn remove(&mut self, entity: Entity, tags: Tags) -> bool {
        let Some(index) = self.all.iter().position(|e| *e == entity) else {
            return false;
        };
        self.all.remove(index);
        for cap in tags.classify() {
            if let Some(lane) = self.lane(cap) {
                lane.retain(|e| *e != entity);
            }
        }
        true
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.all.contains(&entity)
    }
}

/// The designated player entity.
///
/// At most one live player exists at a time. The reference survives the
/// player's death for end-of-session bookkeeping; liveness is checked
/// against the ECS world.
#[derive(Resource, Default, Debug)]
pub struct PlayerRef(pub Option<Entity>);
