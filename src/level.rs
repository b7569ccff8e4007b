//! The level: owner of the world and the per-tick pipeline.
//!
//! A [`Level`] holds the ECS world with every entity and resource, plus the
//! strictly-ordered update schedule. The embedding driver creates one level
//! per session, injects the model table and a rendering surface, then calls
//! [`Level::update`] once per frame:
//!
//! ```ignore
//! let mut level = Level::new(LevelConfig::new(), models, Box::new(NullSurface));
//! let player = level.add(EntityKind::Player, Motion::default(), spawn_point);
//! level.view(player);
//! while level.is_active() {
//!     level.set_pointer(mouse_pos, mouse_down, shift_held);
//!     let dirty = level.update();
//!     present(dirty);
//!     if let Some(station) = level.take_dock() {
//!         level.start_station_cooldown(station, 3 * 60);
//!     }
//! }
//! ```

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationCursor;
use crate::components::kind::EntityKind;
use crate::components::maprect::MapRect;
use crate::components::motion::Motion;
use crate::components::screenrect::ScreenRect;
use crate::components::sprite::Sprite;
use crate::components::station::Station;
use crate::factory;
use crate::math::{Rect, Vec2};
use crate::resources::camera::Camera;
use crate::resources::config::LevelConfig;
use crate::resources::debugmode::DebugOverlays;
use crate::resources::dirty::DirtyRects;
use crate::resources::dock::DockSignal;
use crate::resources::groups::{Groups, PlayerRef};
use crate::resources::hotset::HotSet;
use crate::resources::models::{COOLDOWN_STATE, ModelStore};
use crate::resources::pointer::PointerState;
use crate::resources::screen::ScreenSurface;
use crate::resources::tick::WorldTick;
use crate::surface::Surface;
use crate::systems::{
    collision, cull, drone, lifecycle, movement, pilot, render, scroll, station, visibility,
};

pub struct Level {
    world: World,
    schedule: Schedule,
}

impl Level {
    /// Build a level from configuration, the per-kind model table and a
    /// rendering surface.
    pub fn new(config: LevelConfig, models: ModelStore, screen: Box<dyn Surface>) -> Self {
        let mut world = World::new();
        world.insert_resource(Camera::new(config.screen_size(), config.cull_factor));
        world.init_resource::<Groups>();
        world.init_resource::<PlayerRef>();
        world.init_resource::<HotSet>();
        world.init_resource::<DirtyRects>();
        world.init_resource::<PointerState>();
        world.init_resource::<DockSignal>();
        world.init_resource::<DebugOverlays>();
        world.init_resource::<WorldTick>();
        world.insert_resource(models);
        log::info!(
            "level created: {}x{} screen, cull factor {}",
            config.screen_width,
            config.screen_height,
            config.cull_factor
        );
        world.insert_resource(config);
        world.insert_non_send_resource(ScreenSurface(screen));

        // The tick pipeline. Strict order: each stage's postcondition is
        // the next stage's precondition.
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                render::erase_system,
                scroll::autoscroll_system,
                cull::cull_system,
                pilot::pilot_system,
                drone::drone_fire_system,
                movement::movement_system,
                movement::shot_travel_system,
                movement::ttl_system,
                station::station_cooldown_system,
                lifecycle::reap_explosions_system,
                visibility::visibility_system,
                render::render_system,
                collision::collision_system,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    /// Spawn an entity of `kind` centered at `maploc` in map coordinates.
    pub fn add(&mut self, kind: EntityKind, motion: Motion, maploc: Vec2) -> Entity {
        factory::add(&mut self.world, kind, motion, maploc)
    }

    /// Advance the world one tick. Returns the regions of the screen that
    /// changed (erased plus freshly drawn) for the driver to present.
    pub fn update(&mut self) -> Vec<Rect> {
        self.world.resource_mut::<WorldTick>().ticks += 1;
        log::trace!(
            "tick {} ({} entities)",
            self.world.resource::<WorldTick>().ticks,
            self.world.resource::<Groups>().all.len()
        );
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        self.world.resource::<DirtyRects>().dirty()
    }

    /// Scroll the view by `offset` (map units).
    pub fn scroll(&mut self, offset: Vec2) {
        scroll::scroll(&mut self.world, offset);
    }

    /// Snap the viewport so `entity` sits at its center.
    pub fn view(&mut self, entity: Entity) {
        let Some(center) = self.world.get::<MapRect>(entity).map(|m| m.0.center()) else {
            return;
        };
        let offset = center - self.world.resource::<Camera>().viewrect.center();
        scroll::scroll(&mut self.world, offset);
    }

    /// The session continues while the player lives or explosions are
    /// still burning out.
    pub fn is_active(&self) -> bool {
        lifecycle::is_active(&self.world)
    }

    /// The player entity, if added and still alive.
    pub fn player(&self) -> Option<Entity> {
        lifecycle::live_player(&self.world)
    }

    /// Consume the pending dock result, if collision resolution produced
    /// one this tick.
    pub fn take_dock(&mut self) -> Option<Entity> {
        self.world.resource_mut::<DockSignal>().0.take()
    }

    /// Record this tick's pointing-device snapshot before calling
    /// [`Level::update`].
    pub fn set_pointer(&mut self, pos: Vec2, fire: bool, coast: bool) {
        *self.world.resource_mut::<PointerState>() = PointerState { pos, fire, coast };
    }

    /// Put a station on dock cooldown: it switches to its `"cooldown"`
    /// animation and refuses docking until the ticks elapse.
    ///
    /// Panics when `entity` is not a station or its model lacks a
    /// `"cooldown"` animation; both are setup bugs.
    pub fn start_station_cooldown(&mut self, entity: Entity, ticks: u32) {
        let kind = *self
            .world
            .get::<EntityKind>(entity)
            .expect("no such entity");
        let animation = self
            .world
            .resource::<ModelStore>()
            .get(kind)
            .unwrap_or_else(|| panic!("no model registered for {kind:?}"))
            .animation(COOLDOWN_STATE)
            .unwrap_or_else(|| panic!("{kind:?} model has no `{COOLDOWN_STATE}` animation"))
            .clone();

        self.world
            .get_mut::<Station>(entity)
            .expect("entity is not a station")
            .cooldown = ticks;
        let cursor = AnimationCursor::new(animation);
        let frame = cursor.frame().clone();
        *self
            .world
            .get_mut::<AnimationCursor>(entity)
            .expect("station has an animation cursor") = cursor;
        let mut rect = self.world.get::<ScreenRect>(entity).expect("station has a screen box").0;
        self.world
            .get_mut::<Sprite>(entity)
            .expect("station has a sprite")
            .set_source(frame, &mut rect);
        self.world.get_mut::<ScreenRect>(entity).unwrap().0 = rect;
    }

    /// Random spawn position inside the cull rect but never fully on
    /// screen.
    pub fn offscreen_spawn_position(&self, size: Vec2) -> Vec2 {
        self.world
            .resource::<Camera>()
            .offscreen_spawn_position(size)
    }

    /// Toggle debug overlays (grid, bounding boxes, velocity vector).
    pub fn set_overlays(&mut self, overlays: DebugOverlays) {
        *self.world.resource_mut::<DebugOverlays>() = overlays;
    }

    /// Direct access to the underlying ECS world, for tests and advanced
    /// drivers.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
