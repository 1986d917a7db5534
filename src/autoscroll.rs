//! Auto-scroll deltas for drags that leave the container.
//!
//! While a gesture is active the pointer is tracked globally, so it can
//! sit outside the container's viewport bounds. Each move event past an
//! edge produces a scroll request proportional to the overshoot, which
//! gives the drag acceleration the farther the user pulls past the edge.

use crate::geometry::Rect;

/// A relative scroll request, in the same units as viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollDelta {
    pub dx: i32,
    pub dy: i32,
}

/// Compute the scroll delta for a viewport pointer position against the
/// container's viewport bounds. Returns `None` while the pointer is
/// inside the bounds on both axes; this function performs no I/O, the
/// caller forwards the delta to its scroll requester.
pub fn compute_scroll_delta(pointer_x: f64, pointer_y: f64, bounds: Rect) -> Option<ScrollDelta> {
    let dx = axis_overshoot(pointer_x, bounds.left, bounds.right());
    let dy = axis_overshoot(pointer_y, bounds.top, bounds.bottom());
    if dx == 0 && dy == 0 {
        None
    } else {
        Some(ScrollDelta { dx, dy })
    }
}

fn axis_overshoot(pos: f64, low: i32, high: i32) -> i32 {
    if pos < low as f64 {
        (pos - low as f64).round() as i32
    } else if pos > high as f64 {
        (pos - high as f64).round() as i32
    } else {
        0
    }
}
