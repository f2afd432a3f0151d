//! Frame rendering
//!
//! Flat-colored rectangles shifted by the camera, plus an optional debug HUD.

use macroquad::prelude::*;
use crate::world::Rectangle;
use super::runtime::GameState;

const BACKGROUND: Color = WHITE;
const PLATFORM_COLOR: Color = BLACK;
const PLAYER_COLOR: Color = BLUE;
const FLAG_COLOR: Color = RED;

fn fill(rect: Rectangle, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

/// Draw the whole scene for the current state
pub fn draw_frame(game: &GameState, has_gamepad: bool) {
    clear_background(BACKGROUND);

    let offset = game.camera.offset_x;
    for platform in game.world.platforms() {
        fill(platform.offset_x(offset), PLATFORM_COLOR);
    }
    fill(game.player.bounds.offset_x(offset), PLAYER_COLOR);
    fill(game.world.flag().offset_x(offset), FLAG_COLOR);

    if game.show_debug_overlay {
        draw_debug_overlay(game, has_gamepad);
    }
}

fn draw_debug_overlay(game: &GameState, has_gamepad: bool) {
    let p = &game.player;
    let c = &game.last_collision;
    let lines = [
        format!("frame {}  fps {} (limit {})", game.frame, get_fps(), game.fps_limit.label()),
        format!("pos ({:.1}, {:.1})  vv {:.2}", p.bounds.x, p.bounds.y, p.vertical_velocity),
        format!("ground {}  dash {:?}  air dash {}", p.on_ground, p.dash_direction, p.can_dash_in_air),
        format!("contacts {}  land {}  wall {}  ceiling {}", c.contacts, c.landed, c.hit_wall, c.hit_ceiling),
        format!("camera {:.1}  pad {}  col log {}", game.camera.offset_x, has_gamepad, game.collision_debug_log),
    ];

    draw_rectangle(4.0, 4.0, 360.0, 18.0 * lines.len() as f32 + 8.0, Color::new(0.0, 0.0, 0.0, 0.6));
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + 18.0 * i as f32, 16.0, GREEN);
    }
}
