//! The split-pane container: an ordered pane/splitter child sequence kept in
//! lockstep with a [`TrackList`].
//!
//! Structural invariants, checked after every mutation:
//!
//! - `splitter_count == max(pane_count - 1, 0)`
//! - `tracks.len() == pane_count`
//! - a splitter is never first, never last, and never adjacent to another
//!   splitter.
//!
//! Pane nodes are externally owned, opaque payloads; the container only
//! positions them. Splitters are fully owned here and identified
//! structurally through an explicit tagged variant, never by value.

use serde::{Deserialize, Serialize};

use splitgrid_core::{DEFAULT_TRACK, SplitAxis, SplitAxisError, TrackList};

use crate::notify::{
    ChangeNotifier, StateChange, StateChangeKind, StateSnapshot, SubscriptionId,
};
use crate::resize::DragSession;

/// One slot in the container's child sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub(crate) enum ChildNode<P> {
    Pane(P),
    Splitter,
}

impl<P> ChildNode<P> {
    pub(crate) fn is_splitter(&self) -> bool {
        matches!(self, Self::Splitter)
    }

    pub(crate) fn pane(&self) -> Option<&P> {
        match self {
            Self::Pane(pane) => Some(pane),
            Self::Splitter => None,
        }
    }
}

/// A resizable multi-pane layout container split along one axis.
///
/// `P` is the host's pane handle (an id, an `Rc` node, ...) and is expected
/// to be cheap to clone; snapshots capture the pane sequence by cloning.
#[derive(Debug)]
pub struct SplitPane<P: Clone> {
    axis: SplitAxis,
    tracks: TrackList,
    children: Vec<ChildNode<P>>,
    grid_template: String,
    notifier: ChangeNotifier<P>,
    pub(crate) drag: Option<DragSession>,
}

impl<P: Clone> SplitPane<P> {
    /// Empty container with a fixed split axis.
    #[must_use]
    pub fn new(axis: SplitAxis) -> Self {
        Self {
            axis,
            tracks: TrackList::new(),
            children: Vec::new(),
            grid_template: String::new(),
            notifier: ChangeNotifier::new(),
            drag: None,
        }
    }

    /// Markup-driven construction: adopt pre-existing panes under a required
    /// axis attribute, seeding track entries from a serialized template.
    ///
    /// A missing or unrecognized axis attribute is a fatal configuration
    /// error. Panes without a parsed track entry get [`DEFAULT_TRACK`];
    /// template entries beyond the pane count are dropped; one splitter is
    /// woven between each adjacent pane pair. Construction emits no
    /// notifications.
    pub fn mount(
        axis_attr: Option<&str>,
        template: &str,
        panes: impl IntoIterator<Item = P>,
    ) -> Result<Self, SplitAxisError> {
        let axis = SplitAxis::from_attr(axis_attr)?;
        let mut tracks = TrackList::from_template(template);

        let panes: Vec<P> = panes.into_iter().collect();
        let count = panes.len();
        let mut children = Vec::with_capacity(count.saturating_mul(2));
        for (index, pane) in panes.into_iter().enumerate() {
            if tracks.get(index as isize).is_none() {
                tracks.add(index as isize, DEFAULT_TRACK);
            }
            children.push(ChildNode::Pane(pane));
            if index + 1 < count {
                children.push(ChildNode::Splitter);
            }
        }
        while tracks.len() > count {
            tracks.remove(count as isize);
        }

        let grid_template = tracks.build();
        let mounted = Self {
            axis,
            tracks,
            children,
            grid_template,
            notifier: ChangeNotifier::new(),
            drag: None,
        };
        mounted.debug_check_invariants();
        Ok(mounted)
    }

    /// The container's split axis.
    #[must_use]
    pub fn axis(&self) -> SplitAxis {
        self.axis
    }

    /// Current pane count, derived from the child sequence (never cached).
    #[must_use]
    pub fn len(&self) -> usize {
        self.panes().count()
    }

    /// Whether the container holds no panes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pane at `index`, if any.
    #[must_use]
    pub fn get_pane(&self, index: usize) -> Option<&P> {
        self.panes().nth(index)
    }

    /// The ordered pane sequence.
    pub fn panes(&self) -> impl Iterator<Item = &P> {
        self.children.iter().filter_map(ChildNode::pane)
    }

    /// Current splitter count.
    #[must_use]
    pub fn splitter_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_splitter()).count()
    }

    /// The serialized track template, refreshed on every mutation. This is
    /// the one slot the host's rendering layer reads.
    #[must_use]
    pub fn grid_template(&self) -> &str {
        &self.grid_template
    }

    /// Read-only view of the track-size model.
    #[must_use]
    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    /// Register a change observer, called synchronously on every mutation.
    pub fn observe(&mut self, handler: impl FnMut(&StateChange<P>) + 'static) -> SubscriptionId {
        self.notifier.observe(handler)
    }

    /// Drop a previously registered observer.
    pub fn unobserve(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unobserve(id)
    }

    /// Append a pane at the end.
    pub fn add_pane(&mut self, node: P) {
        self.insert_pane(node, isize::MAX);
    }

    /// Insert a pane at `index`.
    ///
    /// A negative index of any magnitude places the pane at the very front;
    /// an index at or past the current pane count appends; anything else
    /// inserts before the pane currently occupying `index`. The track entry
    /// lands before the structural edit, and a splitter appears alongside
    /// the node whenever a new pane boundary does.
    pub fn insert_pane(&mut self, node: P, index: isize) {
        let old = self.snapshot();
        self.invalidate_drag();

        let pane_count = self.len();
        self.tracks.add(index, DEFAULT_TRACK);

        if index < 0 {
            self.children.insert(0, ChildNode::Pane(node));
            if pane_count > 0 {
                self.children.insert(1, ChildNode::Splitter);
            }
        } else if (index as usize) < pane_count {
            let at = self.child_position(index as usize);
            self.children.insert(at, ChildNode::Splitter);
            self.children.insert(at, ChildNode::Pane(node));
        } else {
            if pane_count > 0 {
                self.children.push(ChildNode::Splitter);
            }
            self.children.push(ChildNode::Pane(node));
        }

        self.grid_template = self.tracks.build();
        self.debug_check_invariants();
        tracing::debug!(index, panes = self.len(), "pane inserted");
        self.emit(StateChangeKind::PaneAdded, old);
    }

    /// Remove the pane at `index`, reporting whether a pane was removed.
    ///
    /// Out-of-range indexes (including negative) return false with no side
    /// effects and no notification. Exactly one adjacent splitter goes with
    /// the pane: the one before it, or the one after when the pane is
    /// first. The surviving boundary track entry is reset to
    /// [`DEFAULT_TRACK`] so a stale percentage never outlives the
    /// structural change.
    pub fn remove_pane(&mut self, index: isize) -> bool {
        if index < 0 {
            return false;
        }
        let pane_index = index as usize;
        if pane_index >= self.len() {
            return false;
        }

        let old = self.snapshot();
        self.invalidate_drag();

        let at = self.child_position(pane_index);
        if at > 0 && self.children[at - 1].is_splitter() {
            self.children.remove(at - 1);
            self.children.remove(at - 1);
        } else {
            self.children.remove(at);
            if self.children.get(at).is_some_and(ChildNode::is_splitter) {
                self.children.remove(at);
            }
        }

        self.tracks.remove(index);
        if !self.tracks.set(index, DEFAULT_TRACK) {
            let _ = self.tracks.set(index - 1, DEFAULT_TRACK);
        }

        self.grid_template = self.tracks.build();
        self.debug_check_invariants();
        tracing::debug!(index, panes = self.len(), "pane removed");
        self.emit(StateChangeKind::PaneRemoved, old);
        true
    }

    /// Immutable capture of the current template and pane sequence.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot<P> {
        StateSnapshot {
            grid_template: self.grid_template.clone(),
            panes: self.panes().cloned().collect(),
        }
    }

    pub(crate) fn emit(&mut self, kind: StateChangeKind, old_state: StateSnapshot<P>) {
        let new_state = self.snapshot();
        self.notifier.notify(&StateChange {
            kind,
            old_state,
            new_state,
        });
    }

    pub(crate) fn refresh_template(&mut self) {
        self.grid_template = self.tracks.build();
    }

    pub(crate) fn set_track(&mut self, index: isize, value: &str) -> bool {
        self.tracks.set(index, value)
    }

    /// Position of the pane with ordinal `pane_index` within the child
    /// sequence. Callers must have bounds-checked `pane_index`.
    fn child_position(&self, pane_index: usize) -> usize {
        let mut seen = 0;
        for (at, child) in self.children.iter().enumerate() {
            if child.pane().is_some() {
                if seen == pane_index {
                    return at;
                }
                seen += 1;
            }
        }
        self.children.len()
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(self.tracks.len(), self.len());
        debug_assert_eq!(self.splitter_count(), self.len().saturating_sub(1));
        debug_assert!(!self.children.first().is_some_and(ChildNode::is_splitter));
        debug_assert!(!self.children.last().is_some_and(ChildNode::is_splitter));
    }
}
