//! ECS components for world entities.
//!
//! Submodules overview:
//! - [`animation`] – per-entity playback cursor over a shared animation
//! - [`drone`] – periodic stern-firing behavior for enemy drones
//! - [`kind`] – entity archetype driving models, tags and destroy behavior
//! - [`maprect`] – bounding box in absolute map coordinates
//! - [`motion`] – per-tick velocity and angular velocity
//! - [`pilot`] – pointer-chasing control state for the player ship
//! - [`rotation`] – orientation in degrees
//! - [`screenrect`] – bounding box in viewport-relative coordinates
//! - [`shot`] – origin-relative trajectory for fired projectiles
//! - [`sprite`] – current source frame, displayed image and collision mask
//! - [`station`] – dock-readiness state for dockable stations
//! - [`tags`] – capability bitmask for collision-group classification
//! - [`ttl`] – tick countdown that retires an entity
//! - [`zindex`] – draw-order layer

pub mod animation;
pub mod drone;
pub mod kind;
pub mod maprect;
pub mod motion;
pub mod pilot;
pub mod rotation;
pub mod screenrect;
pub mod shot;
pub mod sprite;
pub mod station;
pub mod tags;
pub mod ttl;
pub mod zindex;
