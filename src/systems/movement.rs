//! Position integration.

use bevy_ecs::prelude::*;

use crate::components::maprect::MapRect;
use crate::components::motion::Motion;
use crate::components::rotation::Rotation;
use crate::components::screenrect::ScreenRect;
use crate::components::shot::ShotTrajectory;
use crate::components::ttl::Ttl;
use crate::systems::lifecycle::kill;

/// Add velocity to both boxes in lockstep and spin to the rotation.
///
/// The zero velocity vector is skipped to avoid pointless churn. Shots are
/// excluded; [`shot_travel_system`] recomputes their boxes from the origin
/// instead of accumulating increments.
pub fn movement_system(
    mut query: Query<
        (&Motion, &mut MapRect, &mut ScreenRect, &mut Rotation),
        Without<ShotTrajectory>,
    >,
) {
    for (motion, mut map, mut screen, mut rotation) in query.iter_mut() {
        if !motion.velocity.is_zero() {
            map.0.move_by(motion.velocity);
            screen.0.move_by(motion.velocity);
        }
        rotation.degrees += motion.spin;
    }
}

/// Rebuild shot boxes from `origin + velocity * moves` and count down the
/// tick budget, killing shots whose time is up.
pub fn shot_travel_system(world: &mut World) {
    let mut expired = Vec::new();
    let mut query = world.query::<(
        Entity,
        &Motion,
        &mut ShotTrajectory,
        &mut MapRect,
        &mut ScreenRect,
        &mut Ttl,
    )>();
    for (entity, motion, mut trajectory, mut map, mut screen, mut ttl) in query.iter_mut(world) {
        trajectory.moves += 1;
        let travel = motion.velocity * trajectory.moves as f32;
        screen.0 = trajectory
            .origin_screen
            .moved(travel + trajectory.scroll_offset);
        map.0 = trajectory.origin_map.moved(travel);
        ttl.remaining = ttl.remaining.saturating_sub(1);
        if ttl.remaining == 0 {
            expired.push(entity);
        }
    }
    for entity in expired {
        kill(world, entity);
    }
}

/// Tick down every other fuse-limited entity (drone shots move
/// incrementally but still expire).
pub fn ttl_system(world: &mut World) {
    let mut expired = Vec::new();
    let mut query = world.query_filtered::<(Entity, &mut Ttl), Without<ShotTrajectory>>();
    for (entity, mut ttl) in query.iter_mut(world) {
        ttl.remaining = ttl.remaining.saturating_sub(1);
        if ttl.remaining == 0 {
            expired.push(entity);
        }
    }
    for entity in expired {
        kill(world, entity);
    }
}
