//! Movement integration
//!
//! Applies one frame of input to the player: walking, gravity, jumping and
//! the air dash. Position changes here are horizontal only;
//! [`integrate_vertical`] moves the player by its vertical velocity
//! afterwards, right before collisions are resolved.

use crate::input::InputSnapshot;
use super::player::{DashDirection, Player};
use super::settings::PhysicsSettings;

/// Apply one frame of input to the player
///
/// `now` is the clock in seconds and only matters for the dash cooldown.
/// Holding left and right together applies both moves (they cancel out) and
/// leaves the dash facing right.
pub fn apply_input(player: &mut Player, input: &InputSnapshot, now: f64, settings: &PhysicsSettings) {
    if input.left {
        player.bounds.x -= settings.move_speed;
        player.dash_direction = DashDirection::Left;
    }
    if input.right {
        player.bounds.x += settings.move_speed;
        player.dash_direction = DashDirection::Right;
    }

    // Gravity accumulates without a terminal velocity
    if !player.on_ground {
        player.vertical_velocity += settings.gravity;
    } else {
        player.vertical_velocity = 0.0;
    }

    if input.jump && player.on_ground {
        player.vertical_velocity = settings.jump_strength;
        player.on_ground = false;
    }

    if input.dash && !player.dashing {
        if player.dash_cooldown_elapsed(now, settings.dash_cooldown)
            && !player.on_ground
            && player.can_dash_in_air
        {
            player.dashing = true;
            player.bounds.x += player.dash_direction.sign() * settings.dash_distance;
            player.last_dash_time = Some(now);
            player.can_dash_in_air = false;
        }
        // The dash is instantaneous, so the flag never outlives this call
        player.dashing = false;
    }
}

/// Move the player by its vertical velocity
pub fn integrate_vertical(player: &mut Player) {
    player.bounds.y += player.vertical_velocity;
}
