#![forbid(unsafe_code)]

//! Core primitives for the splitgrid split-pane layout model.
//!
//! This crate is the dependency-light half of splitgrid: the split axis, the
//! one-dimensional [`TrackList`] size model, the [`ExtentProvider`] seam to
//! the host's layout engine, and the axis-projected [`PointerSample`] input
//! type. It knows nothing about pane nodes, splitter handles, or change
//! notification; that behavior lives in the `splitgrid` crate.

pub mod axis;
pub mod input;
pub mod measure;
pub mod track;

pub use axis::{SplitAxis, SplitAxisError};
pub use input::PointerSample;
pub use measure::{ExtentProvider, FixedExtents};
pub use track::{DEFAULT_TRACK, SPLITTER_TRACK, TrackList};
