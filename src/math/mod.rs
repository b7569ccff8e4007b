//! Leaf math utilities shared by every other module.
//!
//! - [`vector`] – 2D vectors, the angle convention, and random sampling
//! - [`rect`] – axis-aligned rectangles in map or screen space

pub mod rect;
pub mod vector;

pub use rect::Rect;
pub use vector::Vec2;
