//! Entity lifecycle: kill, destroy, and end-of-life watchers.
//!
//! Kills are immediate and synchronous: the entity leaves the master set,
//! every group index and the ECS world within the same call, so iteration
//! elsewhere can never observe a half-removed entity. Both [`kill`] and
//! [`destroy`] are idempotent; a second call on the same entity is a no-op,
//! which makes double-processing during collision resolution harmless.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationCursor;
use crate::components::kind::EntityKind;
use crate::components::maprect::MapRect;
use crate::components::motion::Motion;
use crate::components::tags::Tags;
use crate::factory;
use crate::math::vector;
use crate::resources::groups::{Groups, PlayerRef};

/// The player entity, if one was added and is still alive.
pub fn live_player(world: &World) -> Option<Entity> {
    let entity = world.resource::<PlayerRef>().0?;
    world.get::<Tags>(entity).map(|_| entity)
}

/// Remove the entity from every group index and despawn it. No explosion,
/// no side effects; killing an already-dead entity is a no-op.
pub fn kill(world: &mut World, entity: Entity) {
    let Some(tags) = world.get::<Tags>(entity).copied() else {
        return;
    };
    world.resource_mut::<Groups>().remove(entity, tags);
    world.despawn(entity);
    log::trace!("killed {entity:?}");
}

/// Explode and exit stage: spawn kind-specific debris, then an explosion at
/// the entity's map center, then kill it. Debris spawns while the dying
/// entity still exists, so positions may coincide with its last location.
pub fn destroy(world: &mut World, entity: Entity) {
    let Some(kind) = world.get::<EntityKind>(entity).copied() else {
        return;
    };
    let Some(center) = world.get::<MapRect>(entity).map(|m| m.0.center()) else {
        return;
    };
    let velocity = world
        .get::<Motion>(entity)
        .map(|m| m.velocity)
        .unwrap_or_default();

    match kind {
        EntityKind::BigAsteroid => {
            for _ in 0..2 {
                let debris = Motion::new(
                    velocity + vector::random_within(3, 3),
                    fastrand::i32(0..=5) as f32,
                );
                factory::add(world, EntityKind::Asteroid, debris, center);
            }
            if fastrand::i32(0..=10) < 5 {
                let debris = Motion::new(
                    velocity + vector::random_within(3, 3),
                    fastrand::i32(0..=5) as f32,
                );
                factory::add(world, EntityKind::OreAsteroid, debris, center);
            }
        }
        EntityKind::OreAsteroid => {
            let debris = Motion::new(
                velocity + vector::random_within(3, 3),
                fastrand::i32(0..=5) as f32,
            );
            factory::add(world, EntityKind::Ore, debris, center);
        }
        _ => {}
    }

    factory::add(world, EntityKind::Explosion, Motion::default(), center);
    log::debug!("destroyed {kind:?} {entity:?}");
    kill(world, entity);
}

/// Kill explosions whose animation has finished.
pub fn reap_explosions_system(world: &mut World) {
    let mut finished = Vec::new();
    let mut query = world.query::<(Entity, &EntityKind, &AnimationCursor)>();
    for (entity, kind, cursor) in query.iter(world) {
        if *kind == EntityKind::Explosion && cursor.done() {
            finished.push(entity);
        }
    }
    for entity in finished {
        kill(world, entity);
    }
}

/// The session continues while the player lives or explosions are pending.
pub fn is_active(world: &World) -> bool {
    live_player(world).is_some() || !world.resource::<Groups>().explosions.is_empty()
}
