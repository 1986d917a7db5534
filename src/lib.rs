//! Pointer-driven rectangular multi-selection.
//!
//! Track a drag gesture over a scrollable container, render a selection
//! rectangle through an abstract renderer, compute which candidate
//! targets the rectangle covers, and maintain a persistent selected-id
//! set across gestures — including additive (modifier-held) toggling and
//! auto-scroll when the pointer leaves the container mid-drag.
//!
//! The engine is headless: geometry, drawing, scrolling, and pointer-move
//! capture are capability traits in [`host`], and the host feeds
//! [`PointerEvent`]s into an [`AreaSelector`]. See `src/main.rs` for a
//! terminal host built on crossterm and ratatui.

pub mod autoscroll;
pub mod geometry;
pub mod host;
pub mod mapper;
pub mod reconcile;
pub mod selector;
pub mod target;
pub mod trace_log;

pub use autoscroll::{ScrollDelta, compute_scroll_delta};
pub use geometry::{Point, Rect};
pub use host::{
    GeometryProvider, PointerCapture, PointerEvent, PointerEventKind, ScrollRequester,
    SelectionRenderer,
};
pub use mapper::ContainerMetrics;
pub use reconcile::{SelectionState, reconcile};
pub use selector::{AreaSelector, SelectionHost};
pub use target::{Target, TargetId};
