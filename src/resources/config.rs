//! Level configuration resource.
//!
//! Safe defaults for headless startup plus optional loading from an INI
//! file. Missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 960
//! height = 960
//!
//! [world]
//! fps = 60
//! cull_factor = 10
//! grid_size = 500
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;

use crate::math::Vec2;
use crate::surface::Color;

const DEFAULT_SCREEN_WIDTH: u32 = 960;
const DEFAULT_SCREEN_HEIGHT: u32 = 960;
const DEFAULT_FPS: u32 = 60;
const DEFAULT_CULL_FACTOR: f32 = 10.0;
const DEFAULT_GRID_SIZE: f32 = 500.0;
const DEFAULT_CONFIG_PATH: &str = "./stardrift.ini";

#[derive(Resource, Debug, Clone)]
pub struct LevelConfig {
    /// Screen (and viewport) width in pixels.
    pub screen_width: u32,
    /// Screen (and viewport) height in pixels.
    pub screen_height: u32,
    /// Ticks per second the driver aims for; also the animation time base.
    pub fps: u32,
    /// The cull rectangle is the screen inflated by this many screen sizes.
    pub cull_factor: f32,
    /// Spacing of the debug grid in map units.
    pub grid_size: f32,
    /// Background color painted over erased regions.
    pub background: Color,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelConfig {
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            fps: DEFAULT_FPS,
            cull_factor: DEFAULT_CULL_FACTOR,
            grid_size: DEFAULT_GRID_SIZE,
            background: Color::BLACK,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Load settings from the INI file; keys not present keep their
    /// current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }
        if let Some(fps) = config.getuint("world", "fps").ok().flatten() {
            self.fps = fps as u32;
        }
        if let Some(factor) = config.getfloat("world", "cull_factor").ok().flatten() {
            self.cull_factor = factor as f32;
        }
        if let Some(grid) = config.getfloat("world", "grid_size").ok().flatten() {
            self.grid_size = grid as f32;
        }

        info!(
            "Loaded config: {}x{} screen, fps={}, cull_factor={}, grid_size={}",
            self.screen_width, self.screen_height, self.fps, self.cull_factor, self.grid_size
        );

        Ok(())
    }
}
