//! Gamepad support
//!
//! Native: gilrs, first connected pad only.
//! WASM: no gamepad backend; keyboard only.

// Standard gamepad button indices (Web Gamepad API standard mapping, Xbox layout)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const B: u32 = 1;           // East
    pub const X: u32 = 2;           // West
    pub const START: u32 = 9;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick_x(&self) -> f32 {
            0.0
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the backend failed to start; input falls back to keyboard
        gilrs: Option<Gilrs>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    eprintln!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Events update gilrs' cached state; we only read the state
            while gilrs.next_event().is_some() {}
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn has_gamepad(&self) -> bool {
            self.active().is_some()
        }

        fn button_mask(&self) -> u32 {
            let Some(gp) = self.active() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::East) { mask |= 1 << super::button::B; }
            if gp.is_pressed(GilrsButton::West) { mask |= 1 << super::button::X; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << super::button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << super::button::DPAD_RIGHT; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.button_mask() & (1 << button)) != 0
        }

        pub fn left_stick_x(&self) -> f32 {
            let Some(gp) = self.active() else { return 0.0 };
            gp.value(Axis::LeftStickX)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub use platform::Gamepad;
