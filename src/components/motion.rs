//! Per-tick kinematics.

use bevy_ecs::prelude::Component;

use crate::math::Vec2;

/// Velocity in map units per tick plus angular velocity in degrees per tick.
///
/// The movement system adds `velocity` to both bounding boxes each tick
/// (skipping the zero vector) and `spin` to the entity's rotation.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Motion {
    pub velocity: Vec2,
    pub spin: f32,
}

impl Motion {
    pub fn new(velocity: Vec2, spin: f32) -> Self {
        Self { velocity, spin }
    }

    /// Straight-line motion with no rotation.
    pub fn drifting(velocity: Vec2) -> Self {
        Self {
            velocity,
            spin: 0.0,
        }
    }

    /// Rotation in place.
    pub fn spinning(spin: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            spin,
        }
    }
}
