//! Hot-set rebuild and pre-render refresh.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationCursor;
use crate::components::maprect::MapRect;
use crate::components::rotation::Rotation;
use crate::components::screenrect::ScreenRect;
use crate::components::sprite::Sprite;
use crate::resources::camera::Camera;
use crate::resources::hotset::HotSet;

/// Recompute the set of entities whose map box intersects the viewport and
/// prepare only those for rendering: advance the animation (swapping the
/// source frame when it changes) and reapply rotation to the displayed
/// image. Off-screen entities pay none of this cost.
pub fn visibility_system(
    mut hot: ResMut<HotSet>,
    camera: Res<Camera>,
    mut query: Query<(
        Entity,
        &MapRect,
        &mut ScreenRect,
        &mut Sprite,
        &Rotation,
        Option<&mut AnimationCursor>,
    )>,
) {
    hot.clear();
    for (entity, maprect, mut screen, mut sprite, rotation, cursor) in query.iter_mut() {
        if !camera.viewrect.intersects(&maprect.0) {
            continue;
        }
        hot.push(entity);
        if let Some(mut cursor) = cursor {
            if cursor.advance() {
                let frame = cursor.frame().clone();
                sprite.set_source(frame, &mut screen.0);
            }
        }
        // Rotation is reapplied after any frame swap; a swap never resets it.
        if rotation.degrees != 0.0 {
            sprite.refresh_rotation(rotation.degrees, &mut screen.0);
        }
    }
}
