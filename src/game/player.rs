//! Player state
//!
//! Plain data. The integrator and the collision resolver mutate it; the
//! camera and the renderer only read it.

use crate::world::Rectangle;
use super::settings::PhysicsSettings;

/// Direction a dash will push the player
///
/// Follows the last horizontal input and stays put when no direction is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashDirection {
    Left,
    #[default]
    None,
    Right,
}

impl DashDirection {
    /// -1, 0 or 1
    pub fn sign(self) -> f32 {
        match self {
            DashDirection::Left => -1.0,
            DashDirection::None => 0.0,
            DashDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub bounds: Rectangle,
    /// Positive is downward
    pub vertical_velocity: f32,
    /// Set by the collision resolver when resting on a platform top
    pub on_ground: bool,
    pub dash_direction: DashDirection,
    /// Only true inside the integrator while a dash is being applied
    pub dashing: bool,
    /// Cleared by an air dash, restored on landing
    pub can_dash_in_air: bool,
    /// Clock time of the last dash; `None` until the first one
    pub last_dash_time: Option<f64>,
}

impl Player {
    /// Airborne, at rest, with its top-left corner at (x, y)
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            bounds: Rectangle::new(x, y, size, size),
            vertical_velocity: 0.0,
            on_ground: false,
            dash_direction: DashDirection::None,
            dashing: false,
            can_dash_in_air: true,
            last_dash_time: None,
        }
    }

    /// Starting position: horizontally centered on the first screen, one body
    /// height above the bottom edge of the floor row
    pub fn spawn(screen_width: f32, screen_height: f32, settings: &PhysicsSettings) -> Self {
        let size = settings.player_size;
        Self::new((screen_width / 2.0).floor(), screen_height - 2.0 * size, size)
    }

    /// Has enough time passed since the last dash?
    pub fn dash_cooldown_elapsed(&self, now: f64, cooldown: f64) -> bool {
        match self.last_dash_time {
            Some(last) => now - last >= cooldown,
            None => true,
        }
    }
}
