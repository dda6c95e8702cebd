//! Change-notification protocol.
//!
//! Every structural mutation and every resize frame produces exactly one
//! [`StateChange`] carrying immutable before/after snapshots. Delivery is
//! synchronous, in subscription order, before the mutating call returns;
//! there is no batching, async dispatch, or suppression.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of layout mutation a notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateChangeKind {
    PaneAdded,
    PaneRemoved,
    PaneResized,
}

/// Immutable capture of layout state at one instant.
///
/// Observers may keep snapshots around; they never alias live container
/// state, so mutating a delivered snapshot has no effect on the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot<P> {
    /// Serialized track template at capture time.
    pub grid_template: String,
    /// Pane sequence at capture time.
    pub panes: Vec<P>,
}

/// One notification record: mutation kind plus before/after snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange<P> {
    pub kind: StateChangeKind,
    pub old_state: StateSnapshot<P>,
    pub new_state: StateSnapshot<P>,
}

/// Handle returned by `observe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(u64);

/// Observer registry for one container.
pub(crate) struct ChangeNotifier<P> {
    observers: Vec<(SubscriptionId, Box<dyn FnMut(&StateChange<P>)>)>,
    next_id: u64,
}

impl<P> ChangeNotifier<P> {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn observe(
        &mut self,
        handler: impl FnMut(&StateChange<P>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(handler)));
        id
    }

    pub(crate) fn unobserve(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub(crate) fn notify(&mut self, change: &StateChange<P>) {
        tracing::trace!(
            kind = ?change.kind,
            observers = self.observers.len(),
            "state change"
        );
        for (_, handler) in &mut self.observers {
            handler(change);
        }
    }
}

impl<P> fmt::Debug for ChangeNotifier<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
