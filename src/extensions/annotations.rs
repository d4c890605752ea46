use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Remembered drag positions for data labels, keyed by `(series, row)`.
///
/// Positions are pixel coordinates of the label anchor on the chart surface.
/// A key with no entry means the label sits at its computed default spot.
/// Entries are not remapped when rows move; hosts clear the layer whenever
/// the row identity of a key would go stale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayer {
    positions: HashMap<(usize, usize), (f64, f64)>,
}

impl AnnotationLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins one label to a dragged position. Non-finite coordinates are
    /// ignored.
    pub fn set_position(&mut self, series_index: usize, point_index: usize, x_px: f64, y_px: f64) {
        if !x_px.is_finite() || !y_px.is_finite() {
            warn!(series_index, point_index, "ignoring non-finite label position");
            return;
        }
        self.positions.insert((series_index, point_index), (x_px, y_px));
    }

    #[must_use]
    pub fn position(&self, series_index: usize, point_index: usize) -> Option<(f64, f64)> {
        self.positions.get(&(series_index, point_index)).copied()
    }

    /// Drops one pinned position, letting the label fall back to its default
    /// spot.
    pub fn remove_position(&mut self, series_index: usize, point_index: usize) {
        self.positions.remove(&(series_index, point_index));
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
