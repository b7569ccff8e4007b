//! Out-of-bounds culling.

use bevy_ecs::prelude::*;

use crate::components::kind::EntityKind;
use crate::components::maprect::MapRect;
use crate::resources::camera::Camera;
use crate::systems::lifecycle::kill;

/// Kill (without explosion) every entity whose map box is not fully inside
/// the cull rectangle. Cull-exempt kinds (stations) are skipped.
pub fn cull_system(world: &mut World) {
    let cullrect = world.resource::<Camera>().cullrect;
    let mut doomed = Vec::new();
    let mut query = world.query::<(Entity, &MapRect, &EntityKind)>();
    for (entity, maprect, kind) in query.iter(world) {
        if !kind.cull_exempt() && !cullrect.contains(&maprect.0) {
            doomed.push(entity);
        }
    }
    for entity in doomed {
        log::trace!("culled {entity:?}");
        kill(world, entity);
    }
}
