//! Enemy drone fire.

use bevy_ecs::prelude::*;

use crate::components::drone::Drone;
use crate::components::kind::EntityKind;
use crate::components::maprect::MapRect;
use crate::components::motion::Motion;
use crate::components::rotation::Rotation;
use crate::factory;
use crate::math::{Vec2, vector};

/// Map units per tick of a drone shot.
const DRONE_SHOT_SPEED: f32 = 3.0;

/// Count down each drone's fire timer and launch a shot from its stern
/// when it elapses.
pub fn drone_fire_system(world: &mut World) {
    let mut launches: Vec<(Vec2, Vec2)> = Vec::new();
    let mut query = world.query::<(&mut Drone, &Rotation, &MapRect)>();
    for (mut drone, rotation, maprect) in query.iter_mut(world) {
        drone.ticks_to_fire -= 1;
        if drone.ticks_to_fire > 0 {
            continue;
        }
        drone.ticks_to_fire = drone.fire_period as i32;
        // Shots leave the stern, away from where the drone faces.
        let direction = vector::from_angle(rotation.degrees + 180.0);
        let muzzle = maprect.0.center() + direction * (maprect.0.w / 2.0);
        launches.push((direction * DRONE_SHOT_SPEED, muzzle));
    }
    for (velocity, position) in launches {
        factory::add(
            world,
            EntityKind::DroneShot,
            Motion::drifting(velocity),
            position,
        );
    }
}
