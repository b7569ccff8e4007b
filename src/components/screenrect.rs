//! Screen-space bounding box.

use bevy_ecs::prelude::Component;

use crate::math::Rect;

/// Bounding box relative to the viewport's top-left corner, used for
/// rendering and collision. Outside a scroll transaction its center equals
/// `map_rect.center - viewport.top_left`. Rotation and animation frame swaps
/// resize it about its center.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect(pub Rect);
