//! Continuous drag resize of two adjacent panes.
//!
//! A drag gesture binds one splitter to one pointer. Move samples never
//! recompute synchronously; the latest sample waits for the host's next
//! display-refresh tick ([`SplitPane::run_resize_frame`]), and a newer
//! sample silently supersedes an unconsumed one — at most one recompute per
//! tick no matter how fast the pointer stream runs.
//!
//! Each frame re-measures live extents from the [`ExtentProvider`] rather
//! than deriving from the last written percentages, so clamped gestures
//! recover the way the measured layout says they should.

use serde::{Deserialize, Serialize};

use splitgrid_core::{ExtentProvider, PointerSample};

use crate::notify::StateChangeKind;
use crate::pane::SplitPane;

/// Ephemeral state for one active drag gesture. At most one per container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct DragSession {
    pub(crate) splitter_index: usize,
    pub(crate) pointer_id: u32,
    pub(crate) cursor_correction: f64,
    /// Latest container-local move position awaiting a frame.
    pub(crate) pending: Option<f64>,
}

/// Why a drag input was safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    NoActiveDrag,
    DragAlreadyActive,
    PointerMismatch,
    NoSuchSplitter,
    NoPendingResize,
    DegenerateExtent,
}

/// Why an active drag was torn down outside the normal pointer-up path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragCancelReason {
    PointerCancel,
    CaptureLost,
    Programmatic,
}

/// Outcome of one drag lifecycle call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    /// A drag session opened on the given splitter.
    Started { splitter_index: usize },
    /// A move sample was queued for the next frame; `superseded` reports
    /// whether it replaced an unconsumed earlier sample.
    MoveQueued { superseded: bool },
    /// One recompute frame ran and wrote both percentages.
    Resized {
        splitter_index: usize,
        prev_percent: f64,
        next_percent: f64,
    },
    /// Pointer-up closed the session.
    Ended { splitter_index: usize },
    /// The session was torn down without a matching pointer-up.
    Canceled { reason: DragCancelReason },
    /// The input had no effect.
    Noop { reason: DragNoopReason },
}

impl<P: Clone> SplitPane<P> {
    /// Open a drag session on the splitter at `splitter_index`.
    ///
    /// `grab.position` is the pointer's offset within the splitter along the
    /// split axis, recorded as the cursor correction for every later frame.
    /// Honored only when no session is active (pointer-capture discipline: a
    /// second pointer-down during a drag is ignored) and when the splitter
    /// exists.
    pub fn begin_drag(&mut self, splitter_index: usize, grab: PointerSample) -> DragEffect {
        if self.drag.is_some() {
            return DragEffect::Noop {
                reason: DragNoopReason::DragAlreadyActive,
            };
        }
        if splitter_index >= self.splitter_count() {
            return DragEffect::Noop {
                reason: DragNoopReason::NoSuchSplitter,
            };
        }

        self.drag = Some(DragSession {
            splitter_index,
            pointer_id: grab.pointer_id,
            cursor_correction: grab.position,
            pending: None,
        });
        tracing::debug!(
            splitter = splitter_index,
            pointer = grab.pointer_id,
            correction = grab.position,
            "drag started"
        );
        DragEffect::Started { splitter_index }
    }

    /// Queue one container-local move sample for the next resize frame.
    ///
    /// Latest sample wins; nothing is recomputed here.
    pub fn drag_move(&mut self, sample: PointerSample) -> DragEffect {
        let Some(session) = self.drag.as_mut() else {
            return DragEffect::Noop {
                reason: DragNoopReason::NoActiveDrag,
            };
        };
        if sample.pointer_id != session.pointer_id {
            return DragEffect::Noop {
                reason: DragNoopReason::PointerMismatch,
            };
        }

        let superseded = session.pending.replace(sample.position).is_some();
        DragEffect::MoveQueued { superseded }
    }

    /// Run one display-refresh recompute from the pending move sample.
    ///
    /// The two panes flanking the dragged splitter are re-sized so their
    /// combined extent is conserved, independently clamped at zero, and
    /// written back as percentages of the container extent. Emits exactly
    /// one `PaneResized` change per frame that recomputes.
    pub fn run_resize_frame(&mut self, extents: &impl ExtentProvider) -> DragEffect {
        let Some(session) = self.drag.as_mut() else {
            return DragEffect::Noop {
                reason: DragNoopReason::NoActiveDrag,
            };
        };
        let Some(position) = session.pending.take() else {
            return DragEffect::Noop {
                reason: DragNoopReason::NoPendingResize,
            };
        };
        let splitter_index = session.splitter_index;
        let correction = session.cursor_correction;

        let axis = self.axis();
        let whole = extents.container_extent(axis);
        if whole <= 0.0 {
            tracing::warn!(
                container_extent = whole,
                "skipping resize frame: degenerate container extent"
            );
            return DragEffect::Noop {
                reason: DragNoopReason::DegenerateExtent,
            };
        }

        let old = self.snapshot();

        let prev_extent = extents.pane_extent(splitter_index, axis);
        let next_extent = extents.pane_extent(splitter_index + 1, axis);
        let prev_offset = extents.pane_offset(splitter_index, axis);

        let mut prev_size = (position - prev_offset - correction).round();
        let mut next_size = (next_extent - (prev_size - prev_extent)).round();
        let both_size = (prev_extent + next_extent).round();

        // Both clamps apply to the same frame: over-dragging past either
        // neighbor's origin pins that neighbor at zero and hands the other
        // the full combined extent.
        if prev_size < 0.0 {
            prev_size = 0.0;
            next_size = both_size;
        }
        if next_size < 0.0 {
            next_size = 0.0;
            prev_size = both_size;
        }

        let prev_percent = prev_size / whole * 100.0;
        let next_percent = next_size / whole * 100.0;

        let index = splitter_index as isize;
        let wrote_prev = self.set_track(index, &format!("{prev_percent}%"));
        let wrote_next = self.set_track(index + 1, &format!("{next_percent}%"));
        debug_assert!(
            wrote_prev && wrote_next,
            "drag session outlived its track entries"
        );

        self.refresh_template();
        tracing::trace!(
            splitter = splitter_index,
            prev_percent,
            next_percent,
            "resize frame"
        );
        self.emit(StateChangeKind::PaneResized, old);
        DragEffect::Resized {
            splitter_index,
            prev_percent,
            next_percent,
        }
    }

    /// Close the session on pointer-up from the capturing pointer.
    ///
    /// A pointer-up with no active session, or from a pointer that does not
    /// hold the capture, is a no-op. Any pending move sample dies with the
    /// session.
    pub fn end_drag(&mut self, sample: PointerSample) -> DragEffect {
        match &self.drag {
            None => DragEffect::Noop {
                reason: DragNoopReason::NoActiveDrag,
            },
            Some(session) if session.pointer_id != sample.pointer_id => DragEffect::Noop {
                reason: DragNoopReason::PointerMismatch,
            },
            Some(session) => {
                let splitter_index = session.splitter_index;
                self.drag = None;
                tracing::debug!(splitter = splitter_index, "drag ended");
                DragEffect::Ended { splitter_index }
            }
        }
    }

    /// Tear down the active session without a pointer-up (capture loss,
    /// gesture cancellation, host-driven reset).
    pub fn cancel_drag(&mut self, reason: DragCancelReason) -> DragEffect {
        if self.drag.take().is_none() {
            return DragEffect::Noop {
                reason: DragNoopReason::NoActiveDrag,
            };
        }
        tracing::debug!(?reason, "drag canceled");
        DragEffect::Canceled { reason }
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Splitter ordinal of the active session, if any.
    #[must_use]
    pub fn active_splitter(&self) -> Option<usize> {
        self.drag.as_ref().map(|session| session.splitter_index)
    }

    /// Structural mutation invalidates splitter ordinals, so it tears down
    /// any session bound to one.
    pub(crate) fn invalidate_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("active drag torn down by structural mutation");
        }
    }
}
