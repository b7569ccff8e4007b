//! Player-ship control: chase the pointer, face it, fire at it.

use bevy_ecs::prelude::*;

use crate::components::kind::EntityKind;
use crate::components::maprect::MapRect;
use crate::components::motion::Motion;
use crate::components::pilot::Pilot;
use crate::components::rotation::Rotation;
use crate::components::screenrect::ScreenRect;
use crate::factory;
use crate::math::{Vec2, vector};
use crate::resources::pointer::PointerState;
use crate::systems::lifecycle::live_player;

/// Ticks between player shots.
const FIRE_PERIOD: i32 = 10;
/// Muzzle speed added to the ship's own velocity.
const SHOT_SPEED: f32 = 10.0;
/// Inside this per-axis error a resting ship is considered arrived.
const ARRIVE_THRESHOLD: f32 = 2.0;
/// Pointer closer than this per axis does not re-aim the ship, preventing
/// jitter when the pointer sits on the ship's center.
const FACING_DEADZONE: f32 = 2.0;

/// Bounded control law for one axis.
///
/// Targets the halfway point of the remaining distance — after discounting
/// two more ticks of travel at the current velocity — clamped to the
/// acceleration limit. The ship speeds up toward the pointer, then sheds
/// speed on approach and settles without persistent oscillation.
pub fn axis_acceleration(err: f32, vel: f32, max_accel: f32) -> f32 {
    if vel == 0.0 {
        if err.abs() < ARRIVE_THRESHOLD {
            return 0.0;
        }
        return (err / 2.0).clamp(-max_accel, max_accel);
    }
    ((err - 2.0 * vel) / 2.0).clamp(-max_accel, max_accel)
}

/// Fire, face and accelerate the player ship from the pointer snapshot.
pub fn pilot_system(world: &mut World) {
    let Some(player) = live_player(world) else {
        return;
    };
    let pointer = *world.resource::<PointerState>();
    let center = world
        .get::<ScreenRect>(player)
        .expect("player has a screen box")
        .0
        .center();
    let velocity = world.get::<Motion>(player).expect("player moves").velocity;
    let pilot = *world.get::<Pilot>(player).expect("player has a pilot");

    // Fire while the button is held, ammo permitting, at most one shot per
    // cooldown window.
    let mut fire_wait = pilot.fire_wait;
    let mut ammo = pilot.ammo;
    if pointer.fire && ammo > 0 && fire_wait <= 0 {
        let muzzle = vector::normalize(pointer.pos - center) * SHOT_SPEED + velocity;
        let origin = world
            .get::<MapRect>(player)
            .expect("player has a map box")
            .0
            .center();
        factory::add(world, EntityKind::PlayerShot, Motion::drifting(muzzle), origin);
        fire_wait = FIRE_PERIOD;
        ammo -= 1;
    } else {
        fire_wait -= 1;
    }

    let err = pointer.pos - center;

    // Face the pointer unless it sits in the dead zone.
    if err.x.abs() > FACING_DEADZONE && err.y.abs() > FACING_DEADZONE {
        world
            .get_mut::<Rotation>(player)
            .expect("player has a rotation")
            .degrees = vector::to_angle(err);
    }

    // Per-axis accelerations are computed independently, applied together.
    if !pointer.coast {
        let accel = Vec2::new(
            axis_acceleration(err.x, velocity.x, pilot.max_accel),
            axis_acceleration(err.y, velocity.y, pilot.max_accel),
        );
        if !accel.is_zero() {
            world
                .get_mut::<Motion>(player)
                .expect("player moves")
                .velocity += accel;
        }
    }

    let mut pilot = world.get_mut::<Pilot>(player).expect("player has a pilot");
    pilot.fire_wait = fire_wait;
    pilot.ammo = ammo;
}
