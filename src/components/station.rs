//! Dockable station state.

use bevy_ecs::prelude::Component;

use crate::math::Rect;

/// Fraction of the station's screen box removed on each axis to form the
/// dock capture zone.
const DOCK_SHRINK: f32 = 0.90;

/// Cooldown bookkeeping for a dockable station.
///
/// A station with a running cooldown is not ready to dock and plays its
/// `"cooldown"` animation; at zero it returns to `"default"` and accepts
/// the player again.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Station {
    pub cooldown: u32,
}

impl Station {
    pub fn ready_to_dock(&self) -> bool {
        self.cooldown == 0
    }

    /// The forgiving capture zone used by the dock test. Intentionally a
    /// bounding-box-only check, unlike every other collision category.
    pub fn dock_rect(screen_rect: &Rect) -> Rect {
        screen_rect.inflate(-screen_rect.w * DOCK_SHRINK, -screen_rect.h * DOCK_SHRINK)
    }
}
