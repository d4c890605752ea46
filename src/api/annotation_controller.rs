use crate::error::PlotGridResult;
use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Pins one point's data label to a frame pixel position and redraws.
    ///
    /// Pinned labels override the automatic above-the-point placement until
    /// the dataset is replaced or cleared. Non-finite positions are ignored.
    pub fn set_annotation_position(
        &mut self,
        series_index: usize,
        point_index: usize,
        x_px: f64,
        y_px: f64,
    ) -> PlotGridResult<()> {
        self.core
            .annotations
            .set_position(series_index, point_index, x_px, y_px);
        self.render()
    }

    /// The pinned label position for one point, if any.
    pub fn annotation_position(&self, series_index: usize, point_index: usize) -> Option<(f64, f64)> {
        self.core.annotations.position(series_index, point_index)
    }

    /// Unpins one point's data label and redraws.
    pub fn remove_annotation_position(
        &mut self,
        series_index: usize,
        point_index: usize,
    ) -> PlotGridResult<()> {
        self.core.annotations.remove_position(series_index, point_index);
        self.render()
    }

    /// Unpins every data label and redraws.
    pub fn clear_annotation_positions(&mut self) -> PlotGridResult<()> {
        self.core.annotations.clear();
        self.render()
    }
}
