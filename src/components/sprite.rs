//! Sprite imagery and collision mask.

use bevy_ecs::prelude::Component;

use crate::math::Rect;
use crate::surface::{Image, Mask};

/// The entity's current unrotated source frame and the displayed image
/// derived from it.
///
/// The displayed image carries the collision mask. Rotating regenerates the
/// displayed image (and therefore the mask) from the source, recentered on
/// the previous screen box center so rotation never shifts the entity's
/// logical position; the rotated bounding box may grow, which is expected.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    source: Image,
    image: Image,
}

impl Sprite {
    pub fn new(source: Image) -> Self {
        Self {
            image: source.clone(),
            source,
        }
    }

    /// The image to blit this tick (possibly rotated).
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn source(&self) -> &Image {
        &self.source
    }

    /// Collision mask of the displayed image.
    pub fn mask(&self) -> &Mask {
        self.image.mask()
    }

    /// Swap in a new unrotated source frame (an animation advance). The
    /// displayed image resets to the source and the screen box is resized
    /// about its center; rotation state is preserved by the caller
    /// reapplying [`Sprite::refresh_rotation`] afterwards.
    pub fn set_source(&mut self, frame: Image, screen_rect: &mut Rect) {
        self.image = frame.clone();
        self.source = frame;
        screen_rect.resize_centered(self.image.size());
    }

    /// Regenerate the displayed image by rotating the source `degrees`
    /// counter-clockwise, recentering the screen box on its previous center.
    pub fn refresh_rotation(&mut self, degrees: f32, screen_rect: &mut Rect) {
        self.image = self.source.rotated(degrees);
        screen_rect.resize_centered(self.image.size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn rotation_recenters_the_grown_box() {
        let mut sprite = Sprite::new(Image::solid("rock", 10, 10));
        let mut rect = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0));
        sprite.refresh_rotation(45.0, &mut rect);
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
        assert!(rect.w > 10.0 && rect.h > 10.0);
        assert_eq!(sprite.image().angle(), 45.0);
        // The source stays unrotated.
        assert_eq!(sprite.source().angle(), 0.0);
    }

    #[test]
    fn frame_swap_does_not_move_the_center() {
        let mut sprite = Sprite::new(Image::solid("a", 8, 8));
        let mut rect = Rect::from_center(Vec2::new(20.0, 30.0), Vec2::new(8.0, 8.0));
        sprite.set_source(Image::solid("b", 12, 6), &mut rect);
        assert_eq!(rect.center(), Vec2::new(20.0, 30.0));
        assert_eq!(rect.size(), Vec2::new(12.0, 6.0));
        assert_eq!(sprite.image().tex_key(), "b");
    }
}
