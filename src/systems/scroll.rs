//! Viewport scrolling.

use bevy_ecs::prelude::*;

use crate::components::screenrect::ScreenRect;
use crate::components::shot::ShotTrajectory;
use crate::math::Vec2;
use crate::resources::camera::Camera;
use crate::systems::lifecycle::live_player;

/// Translate the viewport by `offset`.
///
/// Entities shift opposite the camera: every screen box moves by `-offset`.
/// Shots instead bank the offset into their trajectory so their next
/// origin-relative recompute accounts for it. The cull rectangle is
/// recentered on the new viewport position.
pub fn scroll(world: &mut World, offset: Vec2) {
    if offset.is_zero() {
        return;
    }
    world.resource_mut::<Camera>().apply_scroll(offset);
    let entity_offset = -offset;
    let mut query = world.query::<(&mut ScreenRect, Option<&mut ShotTrajectory>)>();
    for (mut rect, trajectory) in query.iter_mut(world) {
        match trajectory {
            Some(mut trajectory) => trajectory.scroll_offset += entity_offset,
            None => rect.0.move_by(entity_offset),
        }
    }
    log::trace!("scrolled by ({}, {})", offset.x, offset.y);
}

/// Auto-scroll when the player's screen box leaves the scroll-trigger zone.
///
/// Each edge is handled independently with the overshoot as the scroll
/// amount; both axes may trigger in the same tick.
pub fn autoscroll_system(world: &mut World) {
    let Some(player) = live_player(world) else {
        return;
    };
    let trigger = world.resource::<Camera>().scrollrect;
    let Some(rect) = world.get::<ScreenRect>(player).map(|r| r.0) else {
        return;
    };

    if rect.top() < trigger.top() {
        scroll(world, Vec2::new(0.0, rect.top() - trigger.top()));
    } else if rect.bottom() > trigger.bottom() {
        scroll(world, Vec2::new(0.0, rect.bottom() - trigger.bottom()));
    }
    if rect.left() < trigger.left() {
        scroll(world, Vec2::new(rect.left() - trigger.left(), 0.0));
    } else if rect.right() > trigger.right() {
        scroll(world, Vec2::new(rect.right() - trigger.right(), 0.0));
    }
}
