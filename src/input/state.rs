//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad, combining them into held-state
//! snapshots for the game and edge-triggered checks for debug keys.

use macroquad::prelude::*;
use super::gamepad::{button, Gamepad};
use super::{Action, InputSnapshot};

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    /// Analog stick deadzone (0.0-1.0)
    pub stick_deadzone: f32,
}

impl InputState {
    pub fn new() -> Self {
        // Window close must reach the frame loop instead of killing the process
        prevent_quit();
        Self {
            gamepad: Gamepad::new(),
            stick_deadzone: 0.15,
        }
    }

    /// Call once per frame before reading actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Held state of every gameplay action this frame
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            jump: self.action_down(Action::Jump),
            dash: self.action_down(Action::Dash),
            quit: self.action_down(Action::Quit) || is_quit_requested(),
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::ToggleDebugOverlay => is_key_pressed(KeyCode::F1),
            Action::ToggleCollisionLog => is_key_pressed(KeyCode::F2),
            Action::CycleFpsLimit => is_key_pressed(KeyCode::F3),
            _ => false,
        }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            Action::Jump => is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            Action::Dash => is_key_down(KeyCode::Space),
            Action::Quit => is_key_down(KeyCode::Escape),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let (stick_left, stick_right) = stick_direction(self.gamepad.left_stick_x(), self.stick_deadzone);
        match action {
            Action::MoveLeft => self.gamepad.is_button_down(button::DPAD_LEFT) || stick_left,
            Action::MoveRight => self.gamepad.is_button_down(button::DPAD_RIGHT) || stick_right,
            Action::Jump => self.gamepad.is_button_down(button::A),
            Action::Dash => self.gamepad.is_button_down(button::B) || self.gamepad.is_button_down(button::X),
            Action::Quit => self.gamepad.is_button_down(button::START),
            _ => false,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Digital (left, right) from an analog stick axis
fn stick_direction(x: f32, deadzone: f32) -> (bool, bool) {
    if x.abs() < deadzone {
        return (false, false);
    }
    (x < 0.0, x > 0.0)
}
