use indexmap::IndexMap;
use tracing::debug;

use crate::core::{CellValue, Color, ColorTarget};
use crate::error::PlotGridResult;
use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Replaces every series from imported columns and refreshes both views.
    ///
    /// Pinned data-label positions are dropped because row identity changes
    /// wholesale, and any sort cycle in progress is abandoned.
    pub fn replace_from_columns(
        &mut self,
        x_column: impl Into<String>,
        x_values: Vec<CellValue>,
        y_columns: IndexMap<String, Vec<CellValue>>,
    ) -> PlotGridResult<()> {
        self.core.store.replace_from_columns(x_column, x_values, y_columns);
        self.core.annotations.clear();
        self.reset_sort_cycle();
        self.refresh_views()
    }

    /// Appends one row to every series.
    pub fn add_row(&mut self) -> PlotGridResult<()> {
        self.core.store.add_row();
        self.refresh_views()
    }

    /// Removes the given rows from every series.
    pub fn remove_rows(&mut self, row_indices: &[usize]) -> PlotGridResult<()> {
        self.core.store.remove_rows(row_indices);
        self.refresh_views()
    }

    /// Moves one row of every series to a new position.
    pub fn move_row(&mut self, from: usize, to: usize) -> PlotGridResult<()> {
        self.core.store.move_row(from, to);
        self.refresh_views()
    }

    /// Recolors one point or its incoming segment.
    pub fn set_point_color(
        &mut self,
        series_index: usize,
        point_index: usize,
        color: Color,
        target: ColorTarget,
    ) -> PlotGridResult<()> {
        self.core
            .store
            .set_point_color(series_index, point_index, color, target);
        self.refresh_views()
    }

    /// Paints every series, point, and segment in one color.
    pub fn repaint_all(&mut self, color: Color) -> PlotGridResult<()> {
        self.core.store.repaint_all(color);
        self.refresh_views()
    }

    /// Empties the store and every overlay, leaving both views blank. The
    /// cached import table survives so columns can be re-selected.
    pub fn clear(&mut self) -> PlotGridResult<()> {
        debug!("clearing store and overlays");
        self.core.store.clear();
        self.core.annotations.clear();
        self.reset_sort_cycle();
        self.refresh_views()
    }
}
