//! Origin-relative projectile trajectory.

use bevy_ecs::prelude::Component;

use crate::math::{Rect, Vec2};

/// Recomputes a projectile's boxes from its spawn position every tick.
///
/// Incrementing the boxes by velocity each tick accumulates rounding error,
/// and a fast shot visibly drifts off its flight line after a few hundred
/// ticks. Instead the boxes are rebuilt as
/// `origin + velocity * moves (+ accumulated scroll for the screen box)`,
/// which is exact for any number of ticks.
#[derive(Component, Clone, Copy, Debug)]
pub struct ShotTrajectory {
    pub origin_screen: Rect,
    pub origin_map: Rect,
    pub moves: u32,
    pub scroll_offset: Vec2,
}

impl ShotTrajectory {
    pub fn new(origin_screen: Rect, origin_map: Rect) -> Self {
        Self {
            origin_screen,
            origin_map,
            moves: 0,
            scroll_offset: Vec2::ZERO,
        }
    }
}
