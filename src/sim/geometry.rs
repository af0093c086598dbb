//! Axis-aligned rectangles in container-relative space
//!
//! All rects handed to the placement engine share one coordinate space: the
//! offset parent of the movable button. The browser side converts client
//! rects into that space before anything here sees them.

use glam::DVec2;

/// Width/height of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rect from its top-left corner and a size
    pub fn at(origin: DVec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow by `amount` on every side (the Minkowski sum with a square)
    pub fn expanded(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// Shift into another coordinate space whose origin sits at `origin`
    pub fn relative_to(&self, origin: DVec2) -> Self {
        Self::new(
            self.left - origin.x,
            self.top - origin.y,
            self.width,
            self.height,
        )
    }

    /// Strict overlap on both axes; touching edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.origin(), DVec2::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(5.0, 5.0, 1.0, 1.0);
        let below = Rect::new(0.0, 11.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_expanded_catches_near_miss() {
        let obstacle = Rect::new(100.0, 100.0, 50.0, 50.0);
        let near = Rect::new(155.0, 120.0, 20.0, 20.0);
        assert!(!obstacle.overlaps(&near));
        assert!(obstacle.expanded(10.0).overlaps(&near));
        assert_eq!(obstacle.expanded(10.0), Rect::new(90.0, 90.0, 70.0, 70.0));
    }

    #[test]
    fn test_relative_to() {
        let client = Rect::new(250.0, 400.0, 80.0, 30.0);
        let local = client.relative_to(DVec2::new(200.0, 350.0));
        assert_eq!(local, Rect::new(50.0, 50.0, 80.0, 30.0));
    }
}
