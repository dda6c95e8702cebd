//! Measured-extent seam between the layout core and the host renderer.
//!
//! The resize path never inspects painted layout directly; it asks an
//! [`ExtentProvider`] for live measurements each frame. Hosts back this with
//! their real layout engine; tests and headless hosts use [`FixedExtents`].

use crate::axis::SplitAxis;

/// Live axis measurements for a split container, addressed by pane ordinal.
pub trait ExtentProvider {
    /// Near-edge offset of the pane at `index` within the container.
    fn pane_offset(&self, index: usize, axis: SplitAxis) -> f64;

    /// Painted extent of the pane at `index` along `axis`.
    fn pane_extent(&self, index: usize, axis: SplitAxis) -> f64;

    /// Inner extent of the container along `axis`.
    fn container_extent(&self, axis: SplitAxis) -> f64;
}

/// Table-backed [`ExtentProvider`] with one offset/extent row per pane.
///
/// Out-of-table pane indexes measure as zero, mirroring how a host reports
/// an unpainted node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixedExtents {
    container: f64,
    panes: Vec<(f64, f64)>,
}

impl FixedExtents {
    /// Provider for a container of the given inner extent, with no panes.
    #[must_use]
    pub fn new(container: f64) -> Self {
        Self {
            container,
            panes: Vec::new(),
        }
    }

    /// Append one pane row (near-edge offset, extent).
    #[must_use]
    pub fn with_pane(mut self, offset: f64, extent: f64) -> Self {
        self.panes.push((offset, extent));
        self
    }

    /// Overwrite the row for the pane at `index`.
    pub fn set_pane(&mut self, index: usize, offset: f64, extent: f64) {
        if let Some(row) = self.panes.get_mut(index) {
            *row = (offset, extent);
        }
    }
}

impl ExtentProvider for FixedExtents {
    fn pane_offset(&self, index: usize, _axis: SplitAxis) -> f64 {
        self.panes.get(index).map_or(0.0, |row| row.0)
    }

    fn pane_extent(&self, index: usize, _axis: SplitAxis) -> f64 {
        self.panes.get(index).map_or(0.0, |row| row.1)
    }

    fn container_extent(&self, _axis: SplitAxis) -> f64 {
        self.container
    }
}
