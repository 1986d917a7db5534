//! Per-gesture selection reconciliation.
//!
//! Each pointer move re-derives every candidate's selected state from the
//! current rectangle and the three id sets below, then pushes the result
//! to the renderer. The rules implement the usual desktop multi-select:
//! plain drags replace the selection with whatever the rectangle covers,
//! additive drags toggle covered items and leave everything else alone.

use std::collections::BTreeSet;

use crate::geometry::Rect;
use crate::host::SelectionRenderer;
use crate::target::{Target, TargetId};

/// Selection bookkeeping owned by the drag controller.
///
/// `committed` is the authoritative, host-visible selection between
/// gestures. `pending` and `deselecting` exist only while a gesture is in
/// progress: `pending` holds the ids newly covered by this gesture's
/// rectangle, `deselecting` holds ids toggled off by an additive gesture
/// so the rectangle passing over them again cannot flicker them back on.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    committed: BTreeSet<TargetId>,
    pending: BTreeSet<TargetId>,
    deselecting: BTreeSet<TargetId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the transient sets. Called when a gesture starts so leftovers
    /// from an aborted gesture can never leak into the next one.
    pub fn begin_gesture(&mut self) {
        self.pending.clear();
        self.deselecting.clear();
    }

    /// Fold this gesture's pending ids into the committed selection and
    /// drop the transient sets. Returns the resulting committed ids,
    /// deduplicated, for the host notification.
    pub fn commit_gesture(&mut self) -> Vec<TargetId> {
        let pending = std::mem::take(&mut self.pending);
        self.committed.extend(pending);
        self.deselecting.clear();
        self.committed_ids()
    }

    /// Discard the transient sets without committing. Toggle-offs already
    /// applied to `committed` stand; they were live host-visible state.
    pub fn abort_gesture(&mut self) {
        self.pending.clear();
        self.deselecting.clear();
    }

    pub fn committed_ids(&self) -> Vec<TargetId> {
        self.committed.iter().cloned().collect()
    }

    pub fn is_committed(&self, id: &TargetId) -> bool {
        self.committed.contains(id)
    }

    /// Replace the committed selection wholesale, e.g. when the host
    /// restores a saved selection.
    pub fn set_committed<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<TargetId>,
    {
        self.committed = ids.into_iter().map(Into::into).collect();
    }
}

/// Run one reconciliation pass: decide each target's selected state for
/// this frame, update the transient/committed sets accordingly, and set
/// the target's display flag on the renderer.
///
/// `rect` and the target bounds must be in the same (viewport) space.
/// An empty target list is a no-op.
pub fn reconcile<R: SelectionRenderer>(
    rect: Rect,
    targets: &[Target],
    state: &mut SelectionState,
    additive: bool,
    renderer: &mut R,
) {
    for target in targets {
        let hit = rect.intersects(&target.bounds);
        let selected = decide(target.id.clone(), hit, additive, state);
        renderer.set_target_selected(&target.id, selected);
    }
}

fn decide(id: TargetId, hit: bool, additive: bool, state: &mut SelectionState) -> bool {
    if state.deselecting.contains(&id) {
        // toggled off earlier in this gesture; stays off
        return false;
    }
    if state.committed.contains(&id) {
        if additive {
            if hit {
                // toggle-off: leave committed eagerly, remember it so a
                // later pass over the same spot keeps it off
                state.committed.remove(&id);
                state.deselecting.insert(id);
                false
            } else {
                // sticky: prior selection outside the rectangle survives
                true
            }
        } else if hit {
            true
        } else {
            // non-additive replaces the selection live; an id the
            // rectangle no longer covers drops out immediately (it can
            // re-enter through `pending` if covered again)
            state.committed.remove(&id);
            false
        }
    } else if hit {
        state.pending.insert(id);
        true
    } else {
        state.pending.remove(&id);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::target::Target;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FlagSink {
        flags: BTreeMap<TargetId, bool>,
    }

    impl SelectionRenderer for FlagSink {
        fn show_selection_rect(&mut self) {}
        fn hide_selection_rect(&mut self) {}
        fn position_selection_rect(&mut self, _rect: Rect) {}
        fn set_target_selected(&mut self, id: &TargetId, selected: bool) {
            self.flags.insert(id.clone(), selected);
        }
    }

    impl FlagSink {
        fn flag(&self, id: &str) -> bool {
            self.flags
                .get(&TargetId::from(id))
                .copied()
                .unwrap_or(false)
        }
    }

    fn targets() -> Vec<Target> {
        vec![
            Target::new("a", Rect::new(10, 10, 20, 20)),
            Target::new("b", Rect::new(60, 60, 20, 20)),
        ]
    }

    fn covering_a() -> Rect {
        Rect::new(0, 0, 40, 40)
    }

    fn covering_both() -> Rect {
        Rect::new(0, 0, 90, 90)
    }

    #[test]
    fn unselected_hit_becomes_pending() {
        let mut state = SelectionState::new();
        let mut sink = FlagSink::default();
        reconcile(covering_a(), &targets(), &mut state, false, &mut sink);
        assert!(sink.flag("a"));
        assert!(!sink.flag("b"));
        assert_eq!(state.commit_gesture(), vec![TargetId::from("a")]);
    }

    #[test]
    fn shrinking_rect_drops_pending_again() {
        let mut state = SelectionState::new();
        let mut sink = FlagSink::default();
        reconcile(covering_both(), &targets(), &mut state, false, &mut sink);
        assert!(sink.flag("b"));
        reconcile(covering_a(), &targets(), &mut state, false, &mut sink);
        assert!(!sink.flag("b"));
        assert_eq!(state.commit_gesture(), vec![TargetId::from("a")]);
    }

    #[test]
    fn additive_hit_toggles_committed_off() {
        let mut state = SelectionState::new();
        state.set_committed(["a"]);
        let mut sink = FlagSink::default();
        reconcile(covering_a(), &targets(), &mut state, true, &mut sink);
        assert!(!sink.flag("a"));
        assert!(!state.is_committed(&TargetId::from("a")));
        // a second pass over the same spot keeps it off instead of
        // re-adding it through the pending path
        reconcile(covering_a(), &targets(), &mut state, true, &mut sink);
        assert!(!sink.flag("a"));
        assert_eq!(state.commit_gesture(), Vec::<TargetId>::new());
    }

    #[test]
    fn additive_miss_is_sticky() {
        let mut state = SelectionState::new();
        state.set_committed(["a"]);
        let mut sink = FlagSink::default();
        let covering_b = Rect::new(55, 55, 30, 30);
        reconcile(covering_b, &targets(), &mut state, true, &mut sink);
        assert!(sink.flag("a"));
        assert!(sink.flag("b"));
        assert_eq!(
            state.commit_gesture(),
            vec![TargetId::from("a"), TargetId::from("b")]
        );
    }

    #[test]
    fn non_additive_miss_clears_committed() {
        let mut state = SelectionState::new();
        state.set_committed(["b"]);
        let mut sink = FlagSink::default();
        reconcile(covering_a(), &targets(), &mut state, false, &mut sink);
        assert!(!sink.flag("b"));
        assert_eq!(state.commit_gesture(), vec![TargetId::from("a")]);
    }

    #[test]
    fn repeated_pass_is_idempotent() {
        let mut state = SelectionState::new();
        state.set_committed(["a", "b"]);
        let mut sink = FlagSink::default();
        reconcile(covering_both(), &targets(), &mut state, false, &mut sink);
        let first = state.committed_ids();
        reconcile(covering_both(), &targets(), &mut state, false, &mut sink);
        assert_eq!(state.committed_ids(), first);
    }

    #[test]
    fn empty_target_list_is_a_noop() {
        let mut state = SelectionState::new();
        state.set_committed(["a"]);
        let mut sink = FlagSink::default();
        reconcile(covering_both(), &[], &mut state, false, &mut sink);
        assert!(sink.flags.is_empty());
        assert_eq!(state.committed_ids(), vec![TargetId::from("a")]);
    }

    #[test]
    fn commit_folds_pending_and_clears_transients() {
        let mut state = SelectionState::new();
        let mut sink = FlagSink::default();
        reconcile(covering_both(), &targets(), &mut state, false, &mut sink);
        let ids = state.commit_gesture();
        assert_eq!(ids, vec![TargetId::from("a"), TargetId::from("b")]);
        // committing again without a new gesture reports the same set
        assert_eq!(state.commit_gesture(), ids);
    }
}
