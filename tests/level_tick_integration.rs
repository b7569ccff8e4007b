//! Level tick integration tests: spawning, movement, scrolling, culling,
//! collision resolution and session lifetime.

use bevy_ecs::prelude::*;

use stardrift::components::kind::EntityKind;
use stardrift::components::maprect::MapRect;
use stardrift::components::motion::Motion;
use stardrift::components::pilot::Pilot;
use stardrift::components::screenrect::ScreenRect;
use stardrift::components::sprite::Sprite;
use stardrift::components::station::Station;
use stardrift::level::Level;
use stardrift::math::{Rect, Vec2};
use stardrift::resources::camera::Camera;
use stardrift::resources::config::LevelConfig;
use stardrift::resources::groups::Groups;
use stardrift::resources::models::{AnimationResource, Model, ModelStore};
use stardrift::surface::{Image, NullSurface};
use stardrift::systems::lifecycle;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn still_model(key: &str, size: u32) -> Model {
    let animation =
        AnimationResource::new(0, vec![Image::solid(key.to_string(), size, size)], true).unwrap();
    Model::from_animations([("default".to_string(), animation)]).unwrap()
}

fn make_store() -> ModelStore {
    let mut store = ModelStore::new();
    store.insert(EntityKind::Player, still_model("ship", 20));
    store.insert(EntityKind::PlayerShot, still_model("bullet", 4));
    store.insert(EntityKind::BigAsteroid, still_model("bigrock", 50));
    store.insert(EntityKind::OreAsteroid, still_model("orerock", 30));
    store.insert(EntityKind::Ore, still_model("ore", 10));
    store.insert(EntityKind::Drone, still_model("drone", 22));
    store.insert(EntityKind::DroneShot, still_model("dronebullet", 4));

    // Two-frame rock so frame advancing is observable.
    let frames = vec![
        Image::solid("asteroid0".to_string(), 30, 30),
        Image::solid("asteroid1".to_string(), 30, 30),
    ];
    let animation = AnimationResource::new(3, frames, true).unwrap();
    store.insert(
        EntityKind::Asteroid,
        Model::from_animations([("default".to_string(), animation)]).unwrap(),
    );

    // Three-frame non-looping explosion: finishes after 6 visible ticks.
    let frames = (0..3)
        .map(|i| Image::solid(format!("boom{i}"), 40, 40))
        .collect();
    let animation = AnimationResource::new(2, frames, false).unwrap();
    store.insert(
        EntityKind::Explosion,
        Model::from_animations([("default".to_string(), animation)]).unwrap(),
    );

    // Station with a cooldown state.
    let default_anim =
        AnimationResource::new(0, vec![Image::solid("station", 60, 60)], true).unwrap();
    let cooldown_anim =
        AnimationResource::new(0, vec![Image::solid("station_cooling", 60, 60)], true).unwrap();
    store.insert(
        EntityKind::Station,
        Model::from_animations([
            ("default".to_string(), default_anim),
            ("cooldown".to_string(), cooldown_anim),
        ])
        .unwrap(),
    );
    store
}

fn make_level() -> Level {
    let _ = env_logger::builder().is_test(true).try_init();
    Level::new(LevelConfig::new(), make_store(), Box::new(NullSurface))
}

/// Screen center must equal map center minus the viewport's top-left for
/// every entity, outside of a scroll transaction.
fn assert_screen_map_invariant(level: &mut Level) {
    let viewtl = level.world().resource::<Camera>().viewrect.top_left();
    let world = level.world_mut();
    let mut query = world.query::<(Entity, &MapRect, &ScreenRect)>();
    for (entity, map, screen) in query.iter(world) {
        let expected = map.0.center() - viewtl;
        assert!(
            vec_approx_eq(screen.0.center(), expected),
            "{entity:?}: screen center {:?} != map center - view {:?}",
            screen.0.center(),
            expected
        );
    }
}

fn count_kind(level: &mut Level, kind: EntityKind) -> usize {
    let world = level.world_mut();
    let mut query = world.query::<&EntityKind>();
    query.iter(world).filter(|k| **k == kind).count()
}

fn viewport_center(level: &Level) -> Vec2 {
    level.world().resource::<Camera>().viewrect.center()
}

// ==================== movement ====================

#[test]
fn integrate_shifts_both_rect_centers() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let rock = level.add(
        EntityKind::Asteroid,
        Motion::drifting(Vec2::new(3.0, -2.0)),
        center,
    );

    level.update();

    let map = level.world().get::<MapRect>(rock).unwrap().0;
    let screen = level.world().get::<ScreenRect>(rock).unwrap().0;
    assert!(vec_approx_eq(map.center(), center + Vec2::new(3.0, -2.0)));
    assert!(vec_approx_eq(screen.center(), map.center()));
    assert_screen_map_invariant(&mut level);

    for _ in 0..9 {
        level.update();
    }
    let map = level.world().get::<MapRect>(rock).unwrap().0;
    assert!(vec_approx_eq(map.center(), center + Vec2::new(30.0, -20.0)));
}

#[test]
fn shot_trajectory_recomputes_from_origin() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let velocity = Vec2::new(3.7, -1.3);
    let shot = level.add(EntityKind::PlayerShot, Motion::drifting(velocity), center);
    let origin = level.world().get::<MapRect>(shot).unwrap().0;

    for _ in 0..100 {
        level.update();
    }

    // Exactly origin + velocity * ticks, no accumulated rounding drift.
    let map = level.world().get::<MapRect>(shot).unwrap().0;
    let expected = origin.moved(velocity * 100.0);
    assert_eq!(map, expected);
    assert_screen_map_invariant(&mut level);
}

#[test]
fn scrolling_banks_into_shot_screen_rect_but_not_map_rect() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let velocity = Vec2::new(2.0, 0.0);
    let shot = level.add(EntityKind::PlayerShot, Motion::drifting(velocity), center);
    let origin_map = level.world().get::<MapRect>(shot).unwrap().0;
    let origin_screen = level.world().get::<ScreenRect>(shot).unwrap().0;

    level.scroll(Vec2::new(100.0, 0.0));
    level.update();

    let map = level.world().get::<MapRect>(shot).unwrap().0;
    let screen = level.world().get::<ScreenRect>(shot).unwrap().0;
    assert_eq!(map, origin_map.moved(Vec2::new(2.0, 0.0)));
    assert_eq!(screen, origin_screen.moved(Vec2::new(2.0 - 100.0, 0.0)));
}

// ==================== scrolling ====================

#[test]
fn scroll_and_unscroll_restore_view_and_entities() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let rock = level.add(EntityKind::Asteroid, Motion::default(), center);
    let shot = level.add(
        EntityKind::PlayerShot,
        Motion::drifting(Vec2::new(1.0, 0.0)),
        center + Vec2::new(40.0, 0.0),
    );

    let view_before = level.world().resource::<Camera>().viewrect;
    let rock_before = level.world().get::<ScreenRect>(rock).unwrap().0;
    let shot_before = level.world().get::<ScreenRect>(shot).unwrap().0;

    let offset = Vec2::new(37.0, -12.0);
    level.scroll(offset);
    assert_eq!(
        level.world().resource::<Camera>().viewrect,
        view_before.moved(offset)
    );
    assert_eq!(
        level.world().get::<ScreenRect>(rock).unwrap().0,
        rock_before.moved(-offset)
    );
    level.scroll(-offset);

    assert_eq!(level.world().resource::<Camera>().viewrect, view_before);
    assert_eq!(level.world().get::<ScreenRect>(rock).unwrap().0, rock_before);
    assert_eq!(level.world().get::<ScreenRect>(shot).unwrap().0, shot_before);
}

#[test]
fn player_leaving_trigger_zone_autoscrolls_by_the_overshoot() {
    let mut level = make_level();
    // Screen 960x960: the trigger zone is 160x160 centered at (480, 480).
    let player = level.add(
        EntityKind::Player,
        Motion::default(),
        Vec2::new(100.0, 480.0),
    );
    level.set_pointer(Vec2::ZERO, false, true);

    level.update();

    // Player screen box was 20 wide at center x=100: left edge 90,
    // overshoot 90 - 400 = -310.
    let view = level.world().resource::<Camera>().viewrect;
    assert!(approx_eq(view.x, -310.0));
    assert!(approx_eq(view.y, 0.0));
    assert!(level.world().get::<MapRect>(player).is_some());
    assert_screen_map_invariant(&mut level);
}

#[test]
fn view_centers_the_viewport_on_an_entity() {
    let mut level = make_level();
    let rock = level.add(
        EntityKind::Asteroid,
        Motion::default(),
        Vec2::new(5000.0, -3000.0),
    );
    level.view(rock);
    assert!(vec_approx_eq(
        viewport_center(&level),
        Vec2::new(5000.0, -3000.0)
    ));
    assert_screen_map_invariant(&mut level);
}

// ==================== culling ====================

#[test]
fn entities_outside_the_cull_rect_are_removed() {
    let mut level = make_level();
    let far = Vec2::new(20_000.0, 20_000.0);
    let rock = level.add(EntityKind::Asteroid, Motion::default(), far);
    let station = level.add(EntityKind::Station, Motion::default(), far);

    level.update();

    assert!(level.world().get::<MapRect>(rock).is_none());
    assert!(!level.world().resource::<Groups>().contains(rock));
    // Dockable stations are cull-exempt.
    assert!(level.world().get::<MapRect>(station).is_some());
    assert!(level.world().resource::<Groups>().contains(station));
}

// ==================== animation & visibility ====================

#[test]
fn only_visible_entities_advance_their_animation() {
    let mut level = make_level();
    let hot = level.add(EntityKind::Asteroid, Motion::default(), viewport_center(&level));
    // Inside the cull rect but outside the viewport.
    let cold = level.add(
        EntityKind::Asteroid,
        Motion::default(),
        Vec2::new(3000.0, 480.0),
    );

    for _ in 0..3 {
        level.update();
    }

    let hot_key = level.world().get::<Sprite>(hot).unwrap().image().tex_key().to_string();
    let cold_key = level.world().get::<Sprite>(cold).unwrap().image().tex_key().to_string();
    assert_eq!(hot_key, "asteroid1");
    assert_eq!(cold_key, "asteroid0");
}

// ==================== collision resolution ====================

#[test]
fn player_and_hazard_destroy_each_other_into_two_explosions() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let player = level.add(EntityKind::Player, Motion::default(), center);
    let rock = level.add(EntityKind::Asteroid, Motion::default(), center);
    level.set_pointer(center, false, true);

    level.update();

    let groups = level.world().resource::<Groups>();
    assert!(!groups.contains(player));
    assert!(!groups.contains(rock));
    assert_eq!(groups.explosions.len(), 2);
    assert!(level.player().is_none());
    // Explosions keep the session active after the player's death.
    assert!(level.is_active());
}

#[test]
fn explosions_burn_out_and_the_level_goes_inactive() {
    let mut level = make_level();
    let center = viewport_center(&level);
    level.add(EntityKind::Player, Motion::default(), center);
    level.add(EntityKind::Asteroid, Motion::default(), center);
    level.set_pointer(center, false, true);

    let mut ticks = 0;
    while level.is_active() {
        level.update();
        ticks += 1;
        assert!(ticks < 100, "explosions never burned out");
    }
    // 3 frames x 2 ticks each, plus the reap on the following tick.
    assert!(ticks >= 6);
    assert!(level.world().resource::<Groups>().all.is_empty());
}

#[test]
fn shots_and_hazards_resolve_every_pair() {
    let mut level = make_level();
    let center = viewport_center(&level);
    // Two separated rocks, one shot parked on each; no player, so spawn
    // shots directly.
    let rock_a = level.add(EntityKind::Asteroid, Motion::default(), center);
    let rock_b = level.add(
        EntityKind::Asteroid,
        Motion::default(),
        center + Vec2::new(200.0, 0.0),
    );
    let shot_a = level.add(EntityKind::PlayerShot, Motion::default(), center);
    let shot_b = level.add(
        EntityKind::PlayerShot,
        Motion::default(),
        center + Vec2::new(200.0, 0.0),
    );
    // Collision resolution only runs while the player is alive.
    let player = level.add(
        EntityKind::Player,
        Motion::default(),
        center + Vec2::new(-300.0, -300.0),
    );
    level.set_pointer(center + Vec2::new(-300.0, -300.0), false, true);

    level.update();

    let groups = level.world().resource::<Groups>();
    for entity in [rock_a, rock_b, shot_a, shot_b] {
        assert!(!groups.contains(entity), "{entity:?} survived");
    }
    assert!(groups.contains(player));
    // One explosion per destroyed rock and per destroyed shot.
    assert_eq!(groups.explosions.len(), 4);
}

#[test]
fn overlapping_boxes_without_pixel_overlap_do_not_collide() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let player = level.add(EntityKind::Player, Motion::default(), center);
    let rock = level.add(EntityKind::Asteroid, Motion::default(), center);
    level.set_pointer(center, false, true);

    // Hollow out the rock: bounding boxes overlap, pixels never meet.
    let empty = Image::from_alpha("hollow", 30, 30, &[0u8; 900]);
    let mut rect = level.world().get::<ScreenRect>(rock).unwrap().0;
    let mut sprite = level.world_mut().get_mut::<Sprite>(rock).unwrap();
    sprite.set_source(empty, &mut rect);

    level.update();

    let groups = level.world().resource::<Groups>();
    assert!(groups.contains(player));
    assert!(groups.contains(rock));
    assert!(groups.explosions.is_empty());
}

#[test]
fn pickups_feed_the_player_and_vanish_quietly() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let player = level.add(EntityKind::Player, Motion::default(), center);
    let ore = level.add(EntityKind::Ore, Motion::default(), center);
    level.set_pointer(center, false, true);

    level.update();

    let groups = level.world().resource::<Groups>();
    assert!(!groups.contains(ore));
    assert!(groups.explosions.is_empty());
    assert_eq!(level.world().get::<Pilot>(player).unwrap().ore, 1);
}

// ==================== docking ====================

#[test]
fn docking_sets_the_pending_result_and_cooldown_blocks_it() {
    let mut level = make_level();
    let center = viewport_center(&level);
    level.add(EntityKind::Player, Motion::default(), center);
    let station = level.add(EntityKind::Station, Motion::default(), center);
    level.set_pointer(center, false, true);

    level.update();
    assert_eq!(level.take_dock(), Some(station));
    assert_eq!(level.take_dock(), None);

    level.start_station_cooldown(station, 3);
    assert_eq!(
        level.world().get::<Sprite>(station).unwrap().image().tex_key(),
        "station_cooling"
    );

    // Cooling stations refuse to dock.
    level.update();
    assert_eq!(level.take_dock(), None);
    assert!(!level.world().get::<Station>(station).unwrap().ready_to_dock());

    // Once the cooldown elapses the station flips back and docks again.
    level.update();
    level.update();
    assert!(level.world().get::<Station>(station).unwrap().ready_to_dock());
    assert_eq!(
        level.world().get::<Sprite>(station).unwrap().image().tex_key(),
        "station"
    );
    level.update();
    assert_eq!(level.take_dock(), Some(station));
}

// ==================== shots & TTL ====================

#[test]
fn player_shots_expire_exactly_on_their_tick_budget() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let shots: Vec<Entity> = (0..10)
        .map(|i| {
            level.add(
                EntityKind::PlayerShot,
                Motion::drifting(Vec2::new(1.0, 0.0)),
                center + Vec2::new(0.0, i as f32 * 20.0),
            )
        })
        .collect();

    for _ in 0..299 {
        level.update();
    }
    let groups = level.world().resource::<Groups>();
    assert_eq!(groups.player_shots.len(), 10, "shots died early");

    level.update();
    let groups = level.world().resource::<Groups>();
    assert!(groups.player_shots.is_empty(), "shots outlived their budget");
    for shot in shots {
        assert!(level.world().get::<MapRect>(shot).is_none());
    }
}

#[test]
fn firing_spends_ammo_and_respects_the_cooldown() {
    let mut level = make_level();
    let center = viewport_center(&level);
    let player = level.add(EntityKind::Player, Motion::default(), center);
    // Aim straight right, hold the trigger, coast so the ship stays put.
    level.set_pointer(center + Vec2::new(50.0, 0.0), true, true);

    level.update();
    assert_eq!(count_kind(&mut level, EntityKind::PlayerShot), 1);
    assert_eq!(level.world().get::<Pilot>(player).unwrap().ammo, 499);
    let shot = level.world().resource::<Groups>().player_shots[0];
    let velocity = level.world().get::<Motion>(shot).unwrap().velocity;
    assert!(vec_approx_eq(velocity, Vec2::new(10.0, 0.0)));

    // The cooldown must count back down to zero before the next shot, so
    // ten more ticks stay at one shot and the eleventh fires again.
    for _ in 0..10 {
        level.update();
    }
    assert_eq!(count_kind(&mut level, EntityKind::PlayerShot), 1);

    level.update();
    assert_eq!(count_kind(&mut level, EntityKind::PlayerShot), 2);
    assert_eq!(level.world().get::<Pilot>(player).unwrap().ammo, 498);
}

// ==================== drones ====================

#[test]
fn drones_fire_from_the_stern_on_schedule() {
    let mut level = make_level();
    let center = viewport_center(&level);
    level.add(EntityKind::Drone, Motion::default(), center);

    for _ in 0..59 {
        level.update();
    }
    assert_eq!(count_kind(&mut level, EntityKind::DroneShot), 0);

    level.update();
    assert_eq!(count_kind(&mut level, EntityKind::DroneShot), 1);

    // Facing up by default, so the shot leaves downward.
    let shot = level.world().resource::<Groups>().damages_player[1];
    let velocity = level.world().get::<Motion>(shot).unwrap().velocity;
    assert!(vec_approx_eq(velocity, Vec2::new(0.0, 3.0)));

    // The shot expires on its own tick budget, no collision needed.
    for _ in 0..180 {
        level.update();
    }
    assert!(level.world().get::<MapRect>(shot).is_none());
}

// ==================== destruction ====================

#[test]
fn big_asteroids_break_into_children_and_an_explosion() {
    fastrand::seed(11);
    let mut level = make_level();
    let center = viewport_center(&level);
    let big = level.add(
        EntityKind::BigAsteroid,
        Motion::drifting(Vec2::new(1.0, 1.0)),
        center,
    );

    lifecycle::destroy(level.world_mut(), big);

    assert!(level.world().get::<MapRect>(big).is_none());
    assert_eq!(count_kind(&mut level, EntityKind::Asteroid), 2);
    let ore_children = count_kind(&mut level, EntityKind::OreAsteroid);
    assert!(ore_children <= 1, "at most one ore asteroid: {ore_children}");
    assert_eq!(count_kind(&mut level, EntityKind::Explosion), 1);
}

#[test]
fn ore_asteroids_shed_ore_when_destroyed() {
    fastrand::seed(3);
    let mut level = make_level();
    let rock = level.add(
        EntityKind::OreAsteroid,
        Motion::default(),
        viewport_center(&level),
    );

    lifecycle::destroy(level.world_mut(), rock);

    assert_eq!(count_kind(&mut level, EntityKind::Ore), 1);
    assert_eq!(count_kind(&mut level, EntityKind::Explosion), 1);
}

#[test]
fn kill_and_destroy_are_idempotent() {
    let mut level = make_level();
    let rock = level.add(EntityKind::Asteroid, Motion::default(), viewport_center(&level));

    lifecycle::destroy(level.world_mut(), rock);
    let explosions = level.world().resource::<Groups>().explosions.len();
    // A second destroy and a second kill are no-ops.
    lifecycle::destroy(level.world_mut(), rock);
    lifecycle::kill(level.world_mut(), rock);

    assert_eq!(level.world().resource::<Groups>().explosions.len(), explosions);
}

// ==================== session & setup ====================

#[test]
fn level_is_inactive_until_a_player_exists() {
    let mut level = make_level();
    assert!(!level.is_active());
    level.add(EntityKind::Player, Motion::default(), viewport_center(&level));
    assert!(level.is_active());
}

#[test]
#[should_panic(expected = "a live player already exists")]
fn adding_a_second_live_player_panics() {
    let mut level = make_level();
    let center = viewport_center(&level);
    level.add(EntityKind::Player, Motion::default(), center);
    level.add(EntityKind::Player, Motion::default(), center + Vec2::new(100.0, 0.0));
}

#[test]
fn offscreen_spawns_never_pop_in_on_screen() {
    fastrand::seed(5);
    let level = make_level();
    let viewrect = level.world().resource::<Camera>().viewrect;
    for _ in 0..100 {
        let position = level.offscreen_spawn_position(Vec2::new(50.0, 50.0));
        let rect = Rect::new(position.x, position.y, 50.0, 50.0);
        assert!(!viewrect.contains(&rect));
    }
}
