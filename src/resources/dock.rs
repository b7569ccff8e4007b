//! Pending dock result.

use bevy_ecs::prelude::{Entity, Resource};

/// Set by collision resolution when the player enters a ready station's dock
/// zone; consumed and cleared by the driver between ticks.
#[derive(Resource, Default, Debug)]
pub struct DockSignal(pub Option<Entity>);
