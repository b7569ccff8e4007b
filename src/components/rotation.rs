//! Orientation component.

use bevy_ecs::prelude::Component;

/// Counter-clockwise orientation in degrees, 0 pointing up the y-axis.
/// Nonzero rotation makes the pre-render stage regenerate the displayed
/// image and collision mask from the unrotated source frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
}
