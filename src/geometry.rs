//! Content-space points and axis-aligned rectangles.
//!
//! All selection math happens on integer coordinates: sub-pixel pointer
//! positions are rounded before they reach this module so a jittering
//! pointer cannot flip an intersection result back and forth.

/// A point in container content space. Coordinates are non-negative and
/// clamped to the container's scrollable extent by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with non-negative dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Negative dimensions are treated as empty.
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Bounding box of two points, in whatever order they were dragged.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// True when the rectangles overlap. A rectangle with zero width or
    /// height overlaps nothing, so a click with no drag selects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// The same rectangle shifted by an offset (may go negative, e.g.
    /// content scrolled partly out of the viewport).
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_normalizes_corner_order() {
        let rect = Rect::from_points(Point::new(40, 10), Point::new(10, 30));
        assert_eq!(rect, Rect::new(10, 10, 30, 20));
        // dragging the other way yields the same bounding box
        assert_eq!(
            Rect::from_points(Point::new(10, 30), Point::new(40, 10)),
            rect
        );
    }

    #[test]
    fn intersects_is_symmetric() {
        let a = Rect::new(0, 0, 20, 20);
        let b = Rect::new(10, 10, 20, 20);
        let c = Rect::new(100, 100, 5, 5);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn zero_area_rect_intersects_nothing() {
        let degenerate = Rect::new(5, 5, 0, 10);
        let flat = Rect::new(5, 5, 10, 0);
        let target = Rect::new(0, 0, 20, 20);
        assert!(!degenerate.intersects(&target));
        assert!(!target.intersects(&degenerate));
        assert!(!flat.intersects(&target));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn translated_shifts_origin_only() {
        let r = Rect::new(5, 5, 10, 10).translated(-8, 3);
        assert_eq!(r, Rect::new(-3, 8, 10, 10));
    }
}
