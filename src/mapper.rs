//! Mapping between viewport space and container content space.
//!
//! The selection rectangle is tracked in content space so it keeps
//! referring to the same content region while the container auto-scrolls
//! under the pointer; target bounds are queried in viewport space, so the
//! rectangle is translated back out for the intersection pass.

use crate::geometry::{Point, Rect};

/// A snapshot of the container's geometry. Scroll offsets and extents can
/// change between events (auto-scroll, host-driven resize), so hosts
/// rebuild this from live state on every query rather than caching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerMetrics {
    /// Viewport-space bounding box of the container.
    pub bounds: Rect,
    pub scroll_left: i32,
    pub scroll_top: i32,
    /// Full scrollable extent of the content.
    pub scroll_width: i32,
    pub scroll_height: i32,
}

impl ContainerMetrics {
    /// Convert a raw viewport pointer position into content space:
    /// subtract the container origin, add the scroll offsets, clamp into
    /// the scrollable extent, and round to the nearest integer.
    pub fn to_local(&self, pointer_x: f64, pointer_y: f64) -> Point {
        let x = pointer_x - self.bounds.left as f64 + self.scroll_left as f64;
        let y = pointer_y - self.bounds.top as f64 + self.scroll_top as f64;
        Point {
            x: x.clamp(0.0, self.scroll_width.max(0) as f64).round() as i32,
            y: y.clamp(0.0, self.scroll_height.max(0) as f64).round() as i32,
        }
    }

    /// Translate a content-space rectangle into viewport space for
    /// intersection against viewport-space target bounds.
    pub fn to_viewport(&self, rect: Rect) -> Rect {
        rect.translated(
            self.bounds.left - self.scroll_left,
            self.bounds.top - self.scroll_top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ContainerMetrics {
        ContainerMetrics {
            bounds: Rect::new(100, 50, 200, 100),
            scroll_left: 0,
            scroll_top: 0,
            scroll_width: 400,
            scroll_height: 300,
        }
    }

    #[test]
    fn to_local_subtracts_container_origin() {
        let p = metrics().to_local(130.0, 70.0);
        assert_eq!(p, Point::new(30, 20));
    }

    #[test]
    fn to_local_adds_scroll_offsets() {
        let mut m = metrics();
        m.scroll_left = 50;
        m.scroll_top = 25;
        let p = m.to_local(130.0, 70.0);
        assert_eq!(p, Point::new(80, 45));
    }

    #[test]
    fn to_local_clamps_into_scrollable_extent() {
        let m = metrics();
        let before = m.to_local(-500.0, -500.0);
        assert_eq!(before, Point::new(0, 0));
        let past = m.to_local(10_000.0, 10_000.0);
        assert_eq!(past, Point::new(m.scroll_width, m.scroll_height));
    }

    #[test]
    fn to_local_rounds_to_nearest_integer() {
        let m = metrics();
        assert_eq!(m.to_local(130.6, 70.4), Point::new(31, 20));
        assert_eq!(m.to_local(130.4, 70.6), Point::new(30, 21));
    }

    #[test]
    fn to_viewport_undoes_origin_and_scroll() {
        let mut m = metrics();
        m.scroll_left = 40;
        m.scroll_top = 10;
        let content = Rect::new(60, 30, 20, 20);
        let view = m.to_viewport(content);
        assert_eq!(view, Rect::new(120, 70, 20, 20));
    }

    #[test]
    fn mapping_round_trips_inside_bounds() {
        let mut m = metrics();
        m.scroll_left = 15;
        let p = m.to_local(150.0, 90.0);
        let back = m.to_viewport(Rect::new(p.x, p.y, 1, 1));
        assert_eq!(back.left, 150);
        assert_eq!(back.top, 90);
    }
}
