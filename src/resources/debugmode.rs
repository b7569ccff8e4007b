//! Debug overlay toggles.

use bevy_ecs::prelude::Resource;

/// Which optional overlays the render stage draws.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugOverlays {
    /// Bounding boxes of every entity plus the scroll-trigger zone.
    pub boxes: bool,
    /// The map-aligned reference grid.
    pub grid: bool,
    /// The player's velocity vector.
    pub velocity: bool,
}
