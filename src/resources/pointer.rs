//! Pointing-device snapshot.

use bevy_ecs::prelude::Resource;

use crate::math::Vec2;

/// Per-tick input snapshot driving the player ship. The input collaborator
/// writes it before each update; the core only reads it.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// Pointer position in screen coordinates.
    pub pos: Vec2,
    /// Fire button held.
    pub fire: bool,
    /// Suppress acceleration while held (facing and fire still work).
    pub coast: bool,
}
