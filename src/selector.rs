//! The drag gesture state machine.
//!
//! `AreaSelector` is Idle until a press arrives, Dragging until the
//! matching release, and owns all selection state in between. Every event
//! is handled to completion before the next one, so the reconciler always
//! sees the most recent rectangle and no locking is needed.

use crate::autoscroll::compute_scroll_delta;
use crate::geometry::{Point, Rect};
use crate::host::{
    GeometryProvider, PointerCapture, PointerEvent, PointerEventKind, ScrollRequester,
    SelectionRenderer,
};
use crate::mapper::ContainerMetrics;
use crate::reconcile::{SelectionState, reconcile};
use crate::target::TargetId;

/// Everything the host must provide while a gesture runs.
pub trait SelectionHost:
    GeometryProvider + SelectionRenderer + ScrollRequester + PointerCapture
{
}

impl<H> SelectionHost for H where
    H: GeometryProvider + SelectionRenderer + ScrollRequester + PointerCapture
{
}

/// State that exists only between press and release. `additive` is
/// captured once at press time; re-reading the live modifier per move
/// would let a mid-gesture key change flip the reconciliation rules.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    origin: Point,
    cursor: Point,
    additive: bool,
}

impl DragSession {
    /// The active rectangle, in content space.
    fn rect(&self) -> Rect {
        Rect::from_points(self.origin, self.cursor)
    }
}

/// The gesture controller. Idle is encoded as `session == None`, so a
/// session can only be observed while Dragging.
pub struct AreaSelector {
    session: Option<DragSession>,
    selection: SelectionState,
    on_selection_change: Box<dyn FnMut(&[TargetId])>,
}

impl std::fmt::Debug for AreaSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AreaSelector")
            .field("session", &self.session)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl AreaSelector {
    /// `on_selection_change` is invoked exactly once per completed
    /// gesture, with the deduplicated committed ids. Intermediate frames
    /// never notify the host.
    pub fn new(on_selection_change: impl FnMut(&[TargetId]) + 'static) -> Self {
        Self {
            session: None,
            selection: SelectionState::new(),
            on_selection_change: Box::new(on_selection_change),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The committed selection as of the last completed gesture.
    pub fn selected_ids(&self) -> Vec<TargetId> {
        self.selection.committed_ids()
    }

    /// Replace the committed selection between gestures (ignored while a
    /// gesture is active; the gesture owns the state until it ends).
    pub fn set_selected<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<TargetId>,
    {
        if self.session.is_none() {
            self.selection.set_committed(ids);
        }
    }

    /// Feed one pointer event through the state machine. Returns whether
    /// the event was consumed; events that do not match the current state
    /// (a move or release while idle, a second press mid-gesture) are
    /// ignored.
    pub fn handle_event<H: SelectionHost>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        match event.kind {
            PointerEventKind::Press => self.on_press(event, host),
            PointerEventKind::Move => self.on_move(event, host),
            PointerEventKind::Release => self.on_release(host),
        }
    }

    /// Abnormal teardown, e.g. the container is being removed while a
    /// gesture is in flight. Releases the move capture and hides the
    /// rectangle like a release would, but discards the in-progress
    /// gesture without notifying the host.
    pub fn cancel<H: SelectionHost>(&mut self, host: &mut H) {
        if self.session.take().is_none() {
            return;
        }
        host.release_moves();
        host.hide_selection_rect();
        self.selection.abort_gesture();
        tracing::debug!("gesture cancelled");
    }

    fn on_press<H: SelectionHost>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        if self.session.is_some() {
            return false;
        }
        let metrics = host.container_metrics();
        let origin = metrics.to_local(event.x, event.y);
        self.selection.begin_gesture();
        self.session = Some(DragSession {
            origin,
            cursor: origin,
            additive: event.additive,
        });
        host.capture_moves();
        host.show_selection_rect();
        // a zero-movement press must still show correct state, so run one
        // pass before any move arrives
        self.refresh(host, &metrics);
        tracing::debug!(?origin, additive = event.additive, "gesture started");
        true
    }

    fn on_move<H: SelectionHost>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        if self.session.is_none() {
            return false;
        }
        let metrics = host.container_metrics();
        if let Some(session) = self.session.as_mut() {
            session.cursor = metrics.to_local(event.x, event.y);
        }
        self.refresh(host, &metrics);
        if let Some(delta) = compute_scroll_delta(event.x, event.y, metrics.bounds) {
            host.scroll_by(delta);
        }
        true
    }

    fn on_release<H: SelectionHost>(&mut self, host: &mut H) -> bool {
        let Some(_session) = self.session.take() else {
            return false;
        };
        host.release_moves();
        host.hide_selection_rect();
        let ids = self.selection.commit_gesture();
        tracing::debug!(selected = ids.len(), "gesture committed");
        (self.on_selection_change)(&ids);
        true
    }

    /// Reposition the rectangle and reconcile against the current
    /// candidates. The rectangle lives in content space; intersection
    /// happens in viewport space where target bounds are reported.
    fn refresh<H: SelectionHost>(&mut self, host: &mut H, metrics: &ContainerMetrics) {
        let Some(session) = self.session else {
            return;
        };
        let rect = session.rect();
        host.position_selection_rect(rect);
        let targets = host.targets();
        reconcile(
            metrics.to_viewport(rect),
            &targets,
            &mut self.selection,
            session.additive,
            host,
        );
    }
}
