//! Per-entity animation playback state.
//!
//! An [`AnimationCursor`] is a mutable view over a shared, immutable
//! [`AnimationResource`](crate::resources::models::AnimationResource): many
//! entities can play the same animation independently because each carries
//! its own cursor. The resource itself is injected at spawn from the
//! [`ModelStore`](crate::resources::models::ModelStore).

use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::resources::models::AnimationResource;
use crate::surface::Image;

/// Cursor over a shared animation: current frame, ticks until the next one,
/// and whether a non-looping sequence has finished.
#[derive(Component, Clone, Debug)]
pub struct AnimationCursor {
    resource: Arc<AnimationResource>,
    frame_index: usize,
    ticks_remaining: i32,
    done: bool,
}

impl AnimationCursor {
    pub fn new(resource: Arc<AnimationResource>) -> Self {
        Self {
            ticks_remaining: resource.ticks_per_frame as i32,
            resource,
            frame_index: 0,
            done: false,
        }
    }

    /// The frame to display right now. Always in range; after a non-looping
    /// animation finishes the index stays frozen at 0.
    pub fn frame(&self) -> &Image {
        self.resource.frame(self.frame_index)
    }

    /// Only reachable when the animation does not loop.
    pub fn done(&self) -> bool {
        self.done
    }

    /// Advance one tick. Returns whether the displayed frame changed, so
    /// callers can skip needless image and mask regeneration.
    ///
    /// A single-frame animation is a degenerate case: nothing ever changes
    /// and this is a no-op returning false.
    pub fn advance(&mut self) -> bool {
        if self.done || self.resource.frame_count() == 1 {
            return false;
        }
        self.ticks_remaining -= 1;
        if self.ticks_remaining <= 0 {
            self.frame_index += 1;
            if self.frame_index == self.resource.frame_count() {
                self.frame_index = 0;
                if !self.resource.looped {
                    self.done = true;
                }
            }
            self.ticks_remaining = self.resource.ticks_per_frame as i32;
            return true;
        }
        false
    }
}
