//! ECS resources: the long-lived data systems read and write each tick.
//!
//! Overview
//! - [`camera`] – viewport, scroll-trigger and cull rectangles
//! - [`config`] – level configuration with defaults and INI loading
//! - [`debugmode`] – optional debug overlay toggles
//! - [`dirty`] – dirty-rectangle bookkeeping across ticks
//! - [`dock`] – pending dock result slot consumed by the driver
//! - [`groups`] – master entity set and per-category group indices
//! - [`hotset`] – entities intersecting the viewport this tick
//! - [`models`] – animation resources and the per-kind model table
//! - [`pointer`] – per-tick snapshot of the pointing device
//! - [`screen`] – the non-send rendering surface handle
//! - [`tick`] – monotonic tick counter

pub mod camera;
pub mod config;
pub mod debugmode;
pub mod dirty;
pub mod dock;
pub mod groups;
pub mod hotset;
pub mod models;
pub mod pointer;
pub mod screen;
pub mod tick;
