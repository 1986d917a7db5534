//! Boundary contracts between the engine and its host.
//!
//! The engine never touches a real document: geometry queries, rectangle
//! drawing, scrolling, and pointer-move capture all go through these
//! traits, and the host feeds pointer events in. This keeps the selection
//! math testable against a scripted host.

use crate::autoscroll::ScrollDelta;
use crate::geometry::Rect;
use crate::mapper::ContainerMetrics;
use crate::target::{Target, TargetId};

/// What a pointer did, viewport position included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
}

/// A press/move/release notification from the host's event source.
///
/// Coordinates are viewport-space and may be fractional; the engine
/// rounds after mapping into content space. `additive` reports whether
/// the additive-selection modifier was held when the event fired — the
/// engine only reads it on press, so mid-gesture modifier changes cannot
/// switch semantics halfway through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    pub additive: bool,
}

impl PointerEvent {
    pub fn press(x: f64, y: f64, additive: bool) -> Self {
        Self {
            kind: PointerEventKind::Press,
            x,
            y,
            additive,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            x,
            y,
            additive: false,
        }
    }

    pub fn release(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Release,
            x,
            y,
            additive: false,
        }
    }
}

/// Supplies the container's live geometry and the current selection
/// candidates. Target matching and id extraction happen behind this
/// trait; the engine only sees ids with viewport-space bounds.
pub trait GeometryProvider {
    fn container_metrics(&self) -> ContainerMetrics;
    fn targets(&self) -> Vec<Target>;
}

/// Draws the selection rectangle and per-target selected marks.
///
/// The rectangle is positioned in content space, so a host that anchors
/// it inside the scrolled content (as the usual absolutely-positioned
/// overlay does) can use the coordinates directly.
pub trait SelectionRenderer {
    fn show_selection_rect(&mut self);
    fn hide_selection_rect(&mut self);
    fn position_selection_rect(&mut self, rect: Rect);
    fn set_target_selected(&mut self, id: &TargetId, selected: bool);
}

/// Scrolls the container by a relative amount. The host clamps.
pub trait ScrollRequester {
    fn scroll_by(&mut self, delta: ScrollDelta);
}

/// Scoped ownership of the global pointer-move subscription.
///
/// `capture_moves` is called exactly once when a gesture starts and
/// `release_moves` exactly once when it ends, on every ending path
/// (release or cancel), so a host that registers a real global listener
/// never leaks it. Hosts that always deliver moves can keep the no-op
/// defaults.
pub trait PointerCapture {
    fn capture_moves(&mut self) {}
    fn release_moves(&mut self) {}
}
