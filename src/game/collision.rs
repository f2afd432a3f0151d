//! Collision System
//!
//! Resolves the already-moved player rectangle against every platform, in
//! level order, in a single pass. The sign of the vertical velocity decides
//! how an overlap is resolved:
//! - falling: land on top if the feet are close enough to the platform top,
//!   otherwise push out sideways
//! - rising: bump the head on the platform's underside
//! - neither: push out sideways
//!
//! Each platform is resolved against the bounds left by the previous one and
//! nothing is re-tested, so overlapping several platforms at once can depend
//! on their order.

use crate::world::{Rectangle, World};
use super::player::Player;
use super::settings::PhysicsSettings;

/// What happened during one resolver pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Platforms overlapping the player when tested
    pub contacts: usize,
    pub landed: bool,
    pub hit_ceiling: bool,
    pub hit_wall: bool,
}

/// Resolve the player against every platform in the world
pub fn resolve_collisions(
    player: &mut Player,
    world: &World,
    settings: &PhysicsSettings,
    debug_log: bool,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    player.on_ground = false;

    for (idx, platform) in world.platforms().iter().enumerate() {
        if !player.bounds.intersects(platform) {
            continue;
        }
        report.contacts += 1;
        let before = player.bounds;
        let vv = player.vertical_velocity;

        let action = if vv > 0.0 {
            let reach = platform.top() + settings.landing_tolerance * player.bounds.h;
            if player.bounds.bottom() <= reach {
                player.bounds.set_bottom(platform.top());
                player.vertical_velocity = 0.0;
                player.on_ground = true;
                player.can_dash_in_air = true;
                report.landed = true;
                "LAND"
            } else {
                push_out_sideways(&mut player.bounds, platform);
                report.hit_wall = true;
                "SIDE_FALLING"
            }
        } else if vv < 0.0 {
            if player.bounds.top() <= platform.bottom() && player.bounds.bottom() >= platform.bottom() {
                player.bounds.set_top(platform.bottom());
                player.vertical_velocity = 0.0;
                report.hit_ceiling = true;
                "HEAD"
            } else {
                "RISING_PASS"
            }
        } else {
            push_out_sideways(&mut player.bounds, platform);
            report.hit_wall = true;
            "SIDE"
        };

        if debug_log {
            println!(
                "COL|plat:{}({:.0},{:.0},{:.0}x{:.0})|in:({:.1},{:.1})|vv:{:.1}|{}|out:({:.1},{:.1})|vv_out:{:.1}",
                idx,
                platform.x, platform.y, platform.w, platform.h,
                before.x, before.y,
                vv,
                action,
                player.bounds.x, player.bounds.y,
                player.vertical_velocity
            );
        }
    }

    if player.on_ground {
        player.can_dash_in_air = true;
    }

    if debug_log && report.contacts > 0 {
        println!(
            "COL_OUT|contacts:{}|g:{}|wall:{}|ceil:{}|dash:{}",
            report.contacts,
            if player.on_ground { "Y" } else { "N" },
            if report.hit_wall { "Y" } else { "N" },
            if report.hit_ceiling { "Y" } else { "N" },
            if player.can_dash_in_air { "Y" } else { "N" }
        );
    }

    report
}

/// Horizontal push-out
///
/// Both checks test the bounds as they are at that moment. The first one
/// always fires on an overlapping pair and leaves the player flush against
/// the platform's left side, which makes the second one a no-op.
fn push_out_sideways(bounds: &mut Rectangle, platform: &Rectangle) {
    if bounds.right() > platform.left() && bounds.left() < platform.right() {
        bounds.set_right(platform.left());
    }
    if bounds.left() < platform.right() && bounds.right() > platform.left() {
        bounds.set_left(platform.right());
    }
}
