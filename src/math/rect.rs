//! Axis-aligned rectangles.
//!
//! The same type serves map-space boxes, screen-space boxes, the viewport and
//! dirty regions. Semantics follow the conventions the rest of the crate
//! relies on: [`Rect::contains`] is full containment with inclusive edges,
//! [`Rect::intersects`] is strict overlap (rectangles that merely touch do
//! not collide), and [`Rect::inflate`] grows or shrinks about the center.

use crate::math::vector::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Move the rect so its center lands on `center`; size is unchanged.
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    /// Resize about the current center; size is preserved, position moves.
    pub fn resize_centered(&mut self, size: Vec2) {
        let center = self.center();
        self.w = size.x;
        self.h = size.y;
        self.set_center(center);
    }

    pub fn move_by(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    pub fn moved(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Grow (positive) or shrink (negative) by `(dw, dh)` about the center.
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        Self {
            x: self.x - dw / 2.0,
            y: self.y - dh / 2.0,
            w: self.w + dw,
            h: self.h + dh,
        }
    }

    /// True if `other` lies completely inside `self` (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Strict AABB overlap test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// Bounding rect of a line segment, the region a drawn line dirties.
    /// At least one pixel wide on each axis so axis-aligned lines still
    /// erase cleanly.
    pub fn of_line(from: Vec2, to: Vec2) -> Self {
        let left = from.x.min(to.x);
        let top = from.y.min(to.y);
        Self::new(
            left,
            top,
            (from.x - to.x).abs().max(1.0),
            (from.y - to.y).abs().max(1.0),
        )
    }
}
