//! Tuning parameters
//!
//! Units are level units and frames: speeds are per frame, gravity is added
//! to the vertical velocity once per frame. Only the dash cooldown is in
//! wall-clock seconds.

use serde::{Deserialize, Serialize};
use super::runtime::FpsLimit;

/// Player movement and collision parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Side length of the (square) player
    pub player_size: f32,
    /// Horizontal distance per frame while a direction is held
    pub move_speed: f32,
    /// Added to vertical velocity every airborne frame
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_strength: f32,
    /// Instant horizontal displacement of a dash
    pub dash_distance: f32,
    /// Seconds between dashes
    pub dash_cooldown: f64,
    /// Fraction of player height above a platform top that still counts as landing
    pub landing_tolerance: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            player_size: 50.0,
            move_speed: 5.0,
            gravity: 0.5,
            jump_strength: -10.0,
            dash_distance: 100.0,
            dash_cooldown: 1.5,
            landing_tolerance: 0.6,
        }
    }
}

impl PhysicsSettings {
    /// Pretty RON dump for the startup log
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new().indentor("  ".to_string()))
    }
}

/// Window and pacing settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps_limit: FpsLimit,
    pub physics: PhysicsSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            fps_limit: FpsLimit::default(),
            physics: PhysicsSettings::default(),
        }
    }
}
