//! The hot set: entities intersecting the viewport this tick.
//!
//! Rebuilt from scratch every tick rather than maintained incrementally, so
//! a kill mid-tick can never leave stale membership behind. Keeps both the
//! ordered list (draw order) and a hash index (membership tests during
//! collision resolution).

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashSet;

#[derive(Resource, Default, Debug)]
pub struct HotSet {
    entities: Vec<Entity>,
    index: FxHashSet<Entity>,
}

impl HotSet {
    pub fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }

    pub fn push(&mut self, entity: Entity) {
        if self.index.insert(entity) {
            self.entities.push(entity);
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.index.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
