//! Station dock cooldown.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationCursor;
use crate::components::kind::EntityKind;
use crate::components::screenrect::ScreenRect;
use crate::components::sprite::Sprite;
use crate::components::station::Station;
use crate::resources::models::ModelStore;

/// Count down dock cooldowns; a station whose cooldown elapses switches
/// back to its `"default"` animation and becomes dockable again.
pub fn station_cooldown_system(
    mut query: Query<(
        &mut Station,
        &EntityKind,
        &mut AnimationCursor,
        &mut Sprite,
        &mut ScreenRect,
    )>,
    models: Res<ModelStore>,
) {
    for (mut station, kind, mut cursor, mut sprite, mut screen) in query.iter_mut() {
        if station.cooldown == 0 {
            continue;
        }
        station.cooldown -= 1;
        if station.cooldown == 0 {
            let model = models
                .get(*kind)
                .unwrap_or_else(|| panic!("no model registered for {kind:?}"));
            *cursor = AnimationCursor::new(model.default_animation().clone());
            let frame = cursor.frame().clone();
            sprite.set_source(frame, &mut screen.0);
        }
    }
}
