//! Entity construction.
//!
//! [`add`] is the single entry point that turns a kind + motion + map
//! location into a live, classified entity: it looks up the kind's model,
//! builds both bounding boxes from the default animation's first frame,
//! attaches kind-specific components and registers the entity in the group
//! indices — all synchronously, so no intermediate state is ever visible.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationCursor;
use crate::components::drone::Drone;
use crate::components::kind::EntityKind;
use crate::components::maprect::MapRect;
use crate::components::motion::Motion;
use crate::components::pilot::Pilot;
use crate::components::rotation::Rotation;
use crate::components::screenrect::ScreenRect;
use crate::components::shot::ShotTrajectory;
use crate::components::sprite::Sprite;
use crate::components::station::Station;
use crate::components::tags::Capability;
use crate::components::ttl::Ttl;
use crate::components::zindex::ZIndex;
use crate::math::{Rect, Vec2};
use crate::resources::camera::Camera;
use crate::resources::groups::{Groups, PlayerRef};
use crate::resources::models::ModelStore;

/// Tick budget of a player shot (5 seconds at 60 fps).
pub const PLAYER_SHOT_TTL: u32 = 5 * 60;
/// Tick budget of a drone shot (3 seconds at 60 fps).
pub const DRONE_SHOT_TTL: u32 = 3 * 60;
/// Ticks between drone shots.
pub const DRONE_FIRE_PERIOD: u32 = 60;

/// Spawn an entity of `kind` centered at `maploc` (map coordinates).
///
/// Panics if no model is registered for the kind, or when adding a second
/// live player — both are world-setup bugs, not runtime conditions.
pub fn add(world: &mut World, kind: EntityKind, motion: Motion, maploc: Vec2) -> Entity {
    let tags = kind.tags();
    if tags.contains(Capability::Player) {
        let existing = world.resource::<PlayerRef>().0;
        assert!(
            existing.is_none_or(|e| world.get::<MapRect>(e).is_none()),
            "a live player already exists"
        );
    }

    let animation = world
        .resource::<ModelStore>()
        .get(kind)
        .unwrap_or_else(|| panic!("no model registered for {kind:?}"))
        .default_animation()
        .clone();
    let cursor = AnimationCursor::new(animation);
    let frame = cursor.frame().clone();

    let viewrect = world.resource::<Camera>().viewrect;
    let map_rect = Rect::from_center(maploc, frame.size());
    let screen_rect = Rect::from_center(maploc - viewrect.top_left(), frame.size());

    let mut spawned = world.spawn((
        kind,
        tags,
        motion,
        Rotation::default(),
        ZIndex(kind.layer()),
        Sprite::new(frame),
        cursor,
        MapRect(map_rect),
        ScreenRect(screen_rect),
    ));
    match kind {
        EntityKind::Player => {
            spawned.insert(Pilot::default());
        }
        EntityKind::PlayerShot => {
            spawned.insert((
                ShotTrajectory::new(screen_rect, map_rect),
                Ttl::new(PLAYER_SHOT_TTL),
            ));
        }
        EntityKind::DroneShot => {
            spawned.insert(Ttl::new(DRONE_SHOT_TTL));
        }
        EntityKind::Drone => {
            spawned.insert(Drone::new(DRONE_FIRE_PERIOD));
        }
        EntityKind::Station => {
            spawned.insert(Station::default());
        }
        _ => {}
    }
    let entity = spawned.id();

    world.resource_mut::<Groups>().insert(entity, tags);
    if tags.contains(Capability::Player) {
        world.resource_mut::<PlayerRef>().0 = Some(entity);
    }
    log::debug!("spawned {kind:?} {entity:?} at ({:.0}, {:.0})", maploc.x, maploc.y);
    entity
}
