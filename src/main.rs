//! FLAGRUN: a tiny side-scrolling platformer
//!
//! Run, jump and air-dash across a handful of platforms to reach the flag.
//! Arrow keys (or A/D/W) move and jump, Space dashes, Escape quits.
//! F1 debug overlay, F2 collision trace, F3 cycle FPS limit.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod world;

use macroquad::prelude::*;
use game::{draw_frame, GameSettings, GameState, TickOutcome};
use input::{Action, InputState};
use world::World;

fn window_conf() -> Conf {
    let settings = GameSettings::default();
    Conf {
        window_title: "Scrolling Platformer".to_owned(),
        window_width: settings.screen_width as i32,
        window_height: settings.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings = GameSettings::default();
    let world = match World::default_level(settings.screen_height) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("Failed to build level: {}", e);
            return;
        }
    };

    println!("=== FLAGRUN v{} ===", VERSION);
    match settings.physics.to_ron() {
        Ok(text) => println!("Physics: {}", text),
        Err(e) => eprintln!("Failed to format physics settings: {}", e),
    }

    let mut input = InputState::new();
    let mut game = GameState::new(world, settings);

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        input.poll();
        if input.action_pressed(Action::ToggleDebugOverlay) {
            game.show_debug_overlay = !game.show_debug_overlay;
        }
        if input.action_pressed(Action::ToggleCollisionLog) {
            game.collision_debug_log = !game.collision_debug_log;
            println!("Collision log {}", if game.collision_debug_log { "on" } else { "off" });
        }
        if input.action_pressed(Action::CycleFpsLimit) {
            game.fps_limit = game.fps_limit.next();
            println!("FPS limit: {}", game.fps_limit.label());
        }

        // A finished run exits before drawing, so the last frame is never presented
        let outcome = game.tick(&input.snapshot(), frame_start);
        if outcome.ends_run() {
            if outcome == TickOutcome::Completed {
                println!("Level completed!");
            }
            break;
        }

        draw_frame(&game, input.has_gamepad());

        // FPS limiting
        if let Some(target_frame_time) = game.fps_limit.frame_time() {
            let elapsed = get_time() - frame_start;
            let remaining = target_frame_time - elapsed;

            if remaining > 0.0 {
                // Native: use sleep for bulk, then spin-wait for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: just spin-wait (no thread::sleep available)
                #[cfg(target_arch = "wasm32")]
                {
                    while get_time() - frame_start < target_frame_time {}
                }
            }
        }

        next_frame().await;
    }
}
