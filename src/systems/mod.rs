//! Per-tick pipeline systems.
//!
//! The level schedule chains these in strict order; each stage's
//! postcondition is the next stage's precondition.
//!
//! Submodules overview:
//! - [`render`] – erase last tick's regions, draw the hot set, overlays
//! - [`scroll`] – viewport translation and player-driven auto-scroll
//! - [`cull`] – remove entities left behind by the scrolling window
//! - [`pilot`] – pointer-chasing control law, facing and fire
//! - [`drone`] – periodic enemy fire
//! - [`movement`] – velocity/spin integration, shot trajectories, TTLs
//! - [`station`] – dock cooldown countdown
//! - [`visibility`] – hot-set rebuild and pre-render refresh
//! - [`collision`] – the four collision/interaction categories
//! - [`lifecycle`] – spawn/kill/destroy with synchronous group updates

pub mod collision;
pub mod cull;
pub mod drone;
pub mod lifecycle;
pub mod movement;
pub mod pilot;
pub mod render;
pub mod scroll;
pub mod station;
pub mod visibility;
