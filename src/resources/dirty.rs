//! Dirty-rectangle bookkeeping.
//!
//! `drawn` accumulates every region painted this tick; at the start of the
//! next tick the erase stage repaints the background over those regions and
//! moves them to `erased`. The union of both lists is what the driver must
//! present.

use bevy_ecs::prelude::Resource;

use crate::math::Rect;

#[derive(Resource, Default, Debug)]
pub struct DirtyRects {
    pub erased: Vec<Rect>,
    pub drawn: Vec<Rect>,
}

impl DirtyRects {
    /// All regions that changed this tick.
    pub fn dirty(&self) -> Vec<Rect> {
        self.erased.iter().chain(self.drawn.iter()).copied().collect()
    }
}
