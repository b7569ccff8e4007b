//! Erase and draw stages.
//!
//! Rendering goes through the injected [`Surface`](crate::surface::Surface)
//! and never touches pixels itself. Every region painted this tick is
//! accumulated as a dirty rect; the erase stage repaints the background
//! over last tick's regions before any new geometry moves, so stale pixels
//! are never visible.

use bevy_ecs::prelude::*;

use crate::components::motion::Motion;
use crate::components::screenrect::ScreenRect;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::math::{Rect, Vec2};
use crate::resources::camera::Camera;
use crate::resources::config::LevelConfig;
use crate::resources::debugmode::DebugOverlays;
use crate::resources::dirty::DirtyRects;
use crate::resources::groups::PlayerRef;
use crate::resources::hotset::HotSet;
use crate::resources::screen::ScreenSurface;
use crate::surface::Color;

const GRID_COLOR: Color = Color::new(128, 128, 128);
const BOX_COLOR: Color = Color::WHITE;
const VELOCITY_COLOR: Color = Color::new(0, 255, 255);
/// Pixels of overlay line per map unit of velocity.
const VELOCITY_SCALE: f32 = 10.0;

/// Repaint the background over everything drawn last tick.
pub fn erase_system(
    mut surface: NonSendMut<ScreenSurface>,
    mut dirty: ResMut<DirtyRects>,
    config: Res<LevelConfig>,
) {
    let rects = std::mem::take(&mut dirty.drawn);
    for rect in &rects {
        surface.0.fill(config.background, *rect);
    }
    dirty.erased = rects;
}

/// Draw the hot set by layer plus any enabled overlays, accumulating this
/// tick's dirty rects.
pub fn render_system(
    mut surface: NonSendMut<ScreenSurface>,
    mut dirty: ResMut<DirtyRects>,
    hot: Res<HotSet>,
    camera: Res<Camera>,
    config: Res<LevelConfig>,
    overlays: Res<DebugOverlays>,
    player: Res<PlayerRef>,
    sprites: Query<(&Sprite, &ScreenRect, &ZIndex)>,
    boxes: Query<&ScreenRect>,
    motions: Query<&Motion>,
) {
    let screen = &mut surface.0;

    if overlays.grid {
        let grid = config.grid_size;
        let view = camera.viewrect;
        let mut x = grid - view.left().rem_euclid(grid);
        while x < view.w {
            let (from, to) = (Vec2::new(x, 0.0), Vec2::new(x, view.h));
            screen.draw_line(GRID_COLOR, from, to);
            dirty.drawn.push(Rect::of_line(from, to));
            x += grid;
        }
        let mut y = grid - view.top().rem_euclid(grid);
        while y < view.h {
            let (from, to) = (Vec2::new(0.0, y), Vec2::new(view.w, y));
            screen.draw_line(GRID_COLOR, from, to);
            dirty.drawn.push(Rect::of_line(from, to));
            y += grid;
        }
    }

    // Stable sort keeps spawn order within a layer.
    let mut draws: Vec<(&Sprite, Rect, ZIndex)> = hot
        .iter()
        .filter_map(|entity| sprites.get(entity).ok())
        .map(|(sprite, rect, z)| (sprite, rect.0, *z))
        .collect();
    draws.sort_by_key(|(_, _, z)| *z);
    for (sprite, rect, _) in draws {
        screen.blit(sprite.image(), rect, None);
        dirty.drawn.push(rect);
    }

    if overlays.boxes {
        for rect in boxes.iter() {
            screen.draw_rect(BOX_COLOR, rect.0);
        }
        screen.draw_rect(BOX_COLOR, camera.scrollrect);
    }

    if overlays.velocity
        && let Some(entity) = player.0
        && let (Ok(rect), Ok(motion)) = (boxes.get(entity), motions.get(entity))
    {
        let from = rect.0.center();
        let to = from + motion.velocity * VELOCITY_SCALE;
        screen.draw_line(VELOCITY_COLOR, from, to);
        dirty.drawn.push(Rect::of_line(from, to));
    }
}
