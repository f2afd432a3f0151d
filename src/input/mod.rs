//! Input handling with gamepad support
//!
//! Action-based input that works with both keyboard and gamepad.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use state::InputState;
