//! Viewport, scroll-trigger and cull rectangles.

use bevy_ecs::prelude::Resource;

use crate::math::{Rect, Vec2, vector};

/// Fraction of the screen forming the auto-scroll trigger zone.
const SCROLL_FRACTION: f32 = 6.0;

/// The scrolling window over the map.
///
/// - `viewrect` is the map-space rectangle currently on screen; its size is
///   fixed to the screen size and only its position moves.
/// - `scrollrect` is the small screen-space rectangle at the center of the
///   display; when the player's screen box leaves it, the view auto-scrolls
///   by the overshoot.
/// - `cullrect` is a generously oversized map-space rectangle recentered on
///   the viewport after every scroll; entities fully outside it are removed.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera {
    pub viewrect: Rect,
    pub scrollrect: Rect,
    pub cullrect: Rect,
}

impl Camera {
    pub fn new(screen: Vec2, cull_factor: f32) -> Self {
        let screen_rect = Rect::new(0.0, 0.0, screen.x, screen.y);
        Self {
            viewrect: screen_rect,
            scrollrect: screen_rect.inflate(
                screen.x / SCROLL_FRACTION - screen.x,
                screen.y / SCROLL_FRACTION - screen.y,
            ),
            cullrect: screen_rect.inflate(screen.x * cull_factor, screen.y * cull_factor),
        }
    }

    /// Translate the viewport and recenter the cull rectangle on it.
    /// Unclamped: there is no hard map boundary.
    pub fn apply_scroll(&mut self, offset: Vec2) {
        self.viewrect.move_by(offset);
        self.cullrect.set_center(self.viewrect.center());
    }

    /// Uniformly sample a spawn position inside the cull rectangle whose
    /// resulting box of the given size is not fully inside the viewport, so
    /// new entities never pop in on screen. Rejected samples are redrawn,
    /// never clamped, to preserve uniformity over the valid region.
    pub fn offscreen_spawn_position(&self, size: Vec2) -> Vec2 {
        loop {
            let position = vector::random_in_rect(&self.cullrect);
            let rect = Rect::new(position.x, position.y, size.x, size.y);
            if !self.viewrect.contains(&rect) {
                return position;
            }
        }
    }
}
