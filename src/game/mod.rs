//! Game Module
//!
//! Player physics and the frame loop logic:
//! - player: plain player state
//! - settings: tuning constants
//! - integrator: input, gravity, jump and dash
//! - collision: single-pass resolution against platforms
//! - camera: horizontal scrolling
//! - runtime: one frame of simulation, in order
//! - renderer: macroquad drawing

pub mod player;
pub mod settings;
pub mod integrator;
pub mod collision;
pub mod camera;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use runtime::{GameState, TickOutcome};
pub use settings::GameSettings;
pub use renderer::draw_frame;
