//! Map-space bounding box.

use bevy_ecs::prelude::Component;

use crate::math::Rect;

/// Bounding box in absolute map coordinates, used for culling and for
/// recomputing the screen box after a scroll. Keeps its spawn-time size;
/// rotation never resizes it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapRect(pub Rect);
