#![forbid(unsafe_code)]

//! Resizable multi-pane split container.
//!
//! A [`SplitPane`] divides a rectangular area along one [`SplitAxis`] into an
//! ordered pane sequence, one splitter between each adjacent pair. Pane
//! sizes live in a textual [`TrackList`] (`"1fr"`, `"37.5%"`, ...) whose
//! serialized form is the only surface a rendering layer consumes; pointer
//! input and painted measurements stay on the host side of the
//! [`PointerSample`] / [`ExtentProvider`] seam, which keeps the whole core
//! testable without a layout engine.
//!
//! ```
//! use splitgrid::{SplitAxis, SplitPane};
//!
//! let mut pane = SplitPane::new(SplitAxis::Horizontal);
//! pane.add_pane("editor");
//! pane.add_pane("preview");
//! assert_eq!(pane.grid_template(), "1fr min-content 1fr");
//!
//! assert!(pane.remove_pane(1));
//! assert_eq!(pane.grid_template(), "1fr");
//! ```

pub mod notify;
pub mod pane;
pub mod resize;

pub use notify::{StateChange, StateChangeKind, StateSnapshot, SubscriptionId};
pub use pane::SplitPane;
pub use resize::{DragCancelReason, DragEffect, DragNoopReason};

pub use splitgrid_core::{
    DEFAULT_TRACK, ExtentProvider, FixedExtents, PointerSample, SPLITTER_TRACK, SplitAxis,
    SplitAxisError, TrackList,
};
