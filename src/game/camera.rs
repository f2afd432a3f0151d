//! Side-scrolling camera
//!
//! Keeps the player horizontally centered, stopping at the level edges.
//! No smoothing: the offset is recomputed from scratch every frame.

use crate::world::Rectangle;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// Level x shown at the left edge of the screen
    pub offset_x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the offset for the given player bounds
    pub fn follow(&mut self, player: &Rectangle, viewport_width: f32, level_width: f32) {
        self.offset_x = scroll_offset(player.center_x(), viewport_width, level_width);
    }
}

/// Offset that centers `center_x` on screen, clamped to `[0, level_width - viewport_width]`
///
/// The upper clamp is applied first, so a level narrower than the viewport
/// never scrolls.
pub fn scroll_offset(center_x: f32, viewport_width: f32, level_width: f32) -> f32 {
    let offset = center_x - viewport_width / 2.0;
    offset.min(level_width - viewport_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_player() {
        let mut cam = Camera::new();
        cam.follow(&Rectangle::new(775.0, 500.0, 50.0, 50.0), 800.0, 1600.0);
        assert_eq!(cam.offset_x, 400.0);
    }

    #[test]
    fn test_clamped_at_start() {
        let mut cam = Camera::new();
        cam.follow(&Rectangle::new(400.0, 500.0, 50.0, 50.0), 800.0, 1600.0);
        assert_eq!(cam.offset_x, 25.0);
        cam.follow(&Rectangle::new(100.0, 500.0, 50.0, 50.0), 800.0, 1600.0);
        assert_eq!(cam.offset_x, 0.0);
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        for x in [-10_000.0, -50.0, 0.0, 374.0, 800.0, 1199.0, 1575.0, 1600.0, 99_999.0] {
            let off = scroll_offset(x, 800.0, 1600.0);
            assert!((0.0..=800.0).contains(&off), "x={} offset={}", x, off);
        }
        assert_eq!(scroll_offset(-10_000.0, 800.0, 1600.0), 0.0);
        assert_eq!(scroll_offset(99_999.0, 800.0, 1600.0), 800.0);
    }

    #[test]
    fn test_narrow_level_never_scrolls() {
        assert_eq!(scroll_offset(5000.0, 800.0, 500.0), 0.0);
    }
}
