//! World module - static level geometry
//!
//! Rectangles, platforms and the goal flag. Nothing here changes after startup.

mod geometry;
mod level;

pub use geometry::*;
pub use level::*;
