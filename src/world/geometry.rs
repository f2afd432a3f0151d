//! Level-space rectangles
//!
//! Every solid thing in the level is an axis-aligned rectangle: the player,
//! each platform and the flag. Coordinates are level units with y growing
//! downward, so `top < bottom`.

/// Axis-aligned rectangle defined by its upper-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Move horizontally so the left edge sits at `left`
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Move horizontally so the right edge sits at `right`
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    /// Move vertically so the top edge sits at `top`
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Move vertically so the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test. Rectangles that only share an edge don't intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Copy shifted left by a horizontal camera offset (level -> screen space)
    pub fn offset_x(&self, offset: f32) -> Self {
        Self::new(self.x - offset, self.y, self.w, self.h)
    }

    /// Positive, finite size at a finite position
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert!((r.center_x() - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut r = Rectangle::new(0.0, 0.0, 50.0, 50.0);
        r.set_right(100.0);
        assert_eq!(r.x, 50.0);
        r.set_bottom(550.0);
        assert_eq!(r.y, 500.0);
        r.set_top(10.0);
        r.set_left(-5.0);
        assert_eq!(r, Rectangle::new(-5.0, 10.0, 50.0, 50.0));
    }

    #[test]
    fn test_intersects() {
        let a = Rectangle::new(0.0, 0.0, 50.0, 50.0);
        assert!(a.intersects(&Rectangle::new(25.0, 25.0, 50.0, 50.0)));
        assert!(!a.intersects(&Rectangle::new(100.0, 0.0, 10.0, 10.0)));
        // Containment counts
        assert!(a.intersects(&Rectangle::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let player = Rectangle::new(400.0, 500.0, 50.0, 50.0);
        let floor = Rectangle::new(0.0, 550.0, 1600.0, 20.0);
        assert!(!player.intersects(&floor));
        let wall = Rectangle::new(450.0, 400.0, 20.0, 200.0);
        assert!(!player.intersects(&wall));
    }

    #[test]
    fn test_offset_x() {
        let r = Rectangle::new(900.0, 100.0, 20.0, 20.0).offset_x(400.0);
        assert_eq!(r, Rectangle::new(500.0, 100.0, 20.0, 20.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(Rectangle::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rectangle::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rectangle::new(0.0, 0.0, 1.0, -1.0).is_valid());
        assert!(!Rectangle::new(f32::NAN, 0.0, 1.0, 1.0).is_valid());
    }
}
