//! The level: static platforms, the goal flag and the scroll bounds
//!
//! A `World` is built once at startup and never mutated. Platform order is
//! the order collisions are resolved in, so it's kept exactly as given.

use super::Rectangle;

/// Horizontal extent of the built-in level
pub const LEVEL_WIDTH: f32 = 1600.0;

/// Error type for level construction
#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    /// A platform or the flag has a non-positive or non-finite size/position
    InvalidRectangle { what: &'static str, index: usize, rect: Rectangle },
    /// Level width must be positive and finite
    InvalidLevelWidth(f32),
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldError::InvalidRectangle { what, index, rect } => write!(
                f,
                "Invalid {} #{}: ({}, {}, {}x{})",
                what, index, rect.x, rect.y, rect.w, rect.h
            ),
            WorldError::InvalidLevelWidth(w) => write!(f, "Invalid level width: {}", w),
        }
    }
}

impl std::error::Error for WorldError {}

/// Static level geometry
#[derive(Debug, Clone)]
pub struct World {
    platforms: Vec<Rectangle>,
    flag: Rectangle,
    level_width: f32,
}

impl World {
    /// Build a level, rejecting degenerate geometry
    pub fn new(platforms: Vec<Rectangle>, flag: Rectangle, level_width: f32) -> Result<Self, WorldError> {
        if !level_width.is_finite() || level_width <= 0.0 {
            return Err(WorldError::InvalidLevelWidth(level_width));
        }
        for (index, rect) in platforms.iter().enumerate() {
            if !rect.is_valid() {
                return Err(WorldError::InvalidRectangle { what: "platform", index, rect: *rect });
            }
        }
        if !flag.is_valid() {
            return Err(WorldError::InvalidRectangle { what: "flag", index: 0, rect: flag });
        }
        Ok(Self { platforms, flag, level_width })
    }

    /// The built-in level, laid out against the bottom of a screen of the given height
    pub fn default_level(screen_height: f32) -> Result<Self, WorldError> {
        let h = screen_height;
        let platforms = vec![
            // Floors
            Rectangle::new(0.0, h - 50.0, 1600.0, 20.0),
            Rectangle::new(200.0, h - 150.0, 300.0, 20.0),
            Rectangle::new(600.0, h - 250.0, 250.0, 20.0),
            Rectangle::new(1000.0, h - 350.0, 250.0, 20.0),
            // Steps over the gaps
            Rectangle::new(500.0, h - 200.0, 100.0, 20.0),
            Rectangle::new(800.0, h - 300.0, 100.0, 20.0),
            // Walls
            Rectangle::new(150.0, h - 300.0, 20.0, 100.0),
            Rectangle::new(450.0, h - 400.0, 20.0, 200.0),
            Rectangle::new(850.0, h - 500.0, 20.0, 300.0),
            // Floating
            Rectangle::new(1200.0, h - 250.0, 200.0, 20.0),
            Rectangle::new(1400.0, h - 350.0, 200.0, 20.0),
            // End wall behind the flag
            Rectangle::new(1600.0, h - 150.0, 20.0, 100.0),
        ];
        let flag = Rectangle::new(LEVEL_WIDTH - 50.0, h - 100.0, 50.0, 100.0);
        Self::new(platforms, flag, LEVEL_WIDTH)
    }

    /// Platforms in collision order
    pub fn platforms(&self) -> &[Rectangle] {
        &self.platforms
    }

    pub fn flag(&self) -> &Rectangle {
        &self.flag
    }

    pub fn level_width(&self) -> f32 {
        self.level_width
    }

    /// Is the given rectangle touching the goal?
    pub fn reached_flag(&self, bounds: &Rectangle) -> bool {
        bounds.intersects(&self.flag)
    }
}
