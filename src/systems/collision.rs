//! Collision detection and resolution.
//!
//! All category tests require bounding-box overlap first and refine with a
//! per-pixel mask intersection — overlapping boxes with no shared visible
//! pixel do not collide. The single exception is the dock test, which is
//! bounding-box-only against the station's shrunk dock zone; the capture
//! area is deliberately more forgiving than the station's silhouette.
//!
//! Group vectors are snapshotted before any destruction, so resolution
//! never iterates an index it is mutating. Destroyed entities drop out of
//! later checks naturally (their components are gone) and `destroy` is
//! idempotent, so an entity hit by two categories in one tick is processed
//! once and ignored the second time.

use bevy_ecs::prelude::*;

use crate::components::pilot::Pilot;
use crate::components::screenrect::ScreenRect;
use crate::components::sprite::Sprite;
use crate::components::station::Station;
use crate::components::tags::Tags;
use crate::resources::dock::DockSignal;
use crate::resources::groups::Groups;
use crate::resources::hotset::HotSet;
use crate::systems::lifecycle::{destroy, kill, live_player};

/// Box-then-mask test between two live entities.
fn entities_collide(world: &World, a: Entity, b: Entity) -> bool {
    let (Some(rect_a), Some(rect_b)) = (world.get::<ScreenRect>(a), world.get::<ScreenRect>(b))
    else {
        return false;
    };
    if !rect_a.0.intersects(&rect_b.0) {
        return false;
    }
    let (Some(sprite_a), Some(sprite_b)) = (world.get::<Sprite>(a), world.get::<Sprite>(b))
    else {
        return false;
    };
    let dx = (rect_b.0.left() - rect_a.0.left()).round() as i32;
    let dy = (rect_b.0.top() - rect_a.0.top()).round() as i32;
    sprite_a.mask().overlaps(sprite_b.mask(), dx, dy)
}

fn hot(world: &World, entity: Entity) -> bool {
    world.resource::<HotSet>().contains(entity)
}

/// Resolve this tick's collisions, in category order. Runs only while the
/// player is alive.
pub fn collision_system(world: &mut World) {
    let Some(player) = live_player(world) else {
        return;
    };

    let (damages_player, damages_shots, player_shots, dockable, pickups) = {
        let groups = world.resource::<Groups>();
        (
            groups.damages_player.clone(),
            groups.damages_player_shots.clone(),
            groups.player_shots.clone(),
            groups.dockable.clone(),
            groups.pickups.clone(),
        )
    };

    // (a) Player vs damages-player, hot entities only. Group order decides
    // which hit wins; at most one collision resolves per tick.
    for entity in &damages_player {
        if hot(world, *entity) && entities_collide(world, player, *entity) {
            destroy(world, *entity);
            destroy(world, player);
            break;
        }
    }

    // (b) Damages-player-shots (hot) vs all player shots: every pair found
    // this tick resolves, each destroying both members.
    let mut hits = Vec::new();
    for entity in &damages_shots {
        if !hot(world, *entity) {
            continue;
        }
        for shot in &player_shots {
            if entities_collide(world, *entity, *shot) {
                hits.push((*entity, *shot));
            }
        }
    }
    for (entity, shot) in hits {
        destroy(world, entity);
        destroy(world, shot);
    }

    // The player may just have died; docking and pickups need it alive.
    if world.get::<Tags>(player).is_none() {
        return;
    }
    let player_rect = world
        .get::<ScreenRect>(player)
        .expect("live player has a screen box")
        .0;

    // (c) Dock test: box-only against the shrunk dock zone of ready
    // stations; first match wins and is handed to the driver.
    for entity in &dockable {
        if !hot(world, *entity) {
            continue;
        }
        let Some(station) = world.get::<Station>(*entity) else {
            continue;
        };
        if !station.ready_to_dock() {
            continue;
        }
        let Some(rect) = world.get::<ScreenRect>(*entity) else {
            continue;
        };
        if player_rect.intersects(&Station::dock_rect(&rect.0)) {
            log::debug!("player docked at {entity:?}");
            world.resource_mut::<DockSignal>().0 = Some(*entity);
            break;
        }
    }

    // (d) Pickups (hot) vs player: first match feeds the player and removes
    // the pickup, no explosion.
    for entity in &pickups {
        if hot(world, *entity) && entities_collide(world, player, *entity) {
            if let Some(mut pilot) = world.get_mut::<Pilot>(player) {
                pilot.ore += 1;
            }
            kill(world, *entity);
            break;
        }
    }
}
