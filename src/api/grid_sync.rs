use tracing::{debug, trace};

use crate::error::PlotGridResult;
use crate::grid::{self, GridView};
use crate::render::Renderer;

use super::PlotGridEngine;

/// Tracks whether grid notifications originate from the user or from the
/// engine's own repopulation pass.
#[derive(Debug, Default)]
pub(super) struct GridSyncState {
    pub(super) suppress_grid_events: bool,
    pub(super) suppressed_notification_count: usize,
}

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Ingests the grid after the user committed a single cell edit.
    ///
    /// Hosts call this from their cell-changed callback. Notifications that
    /// arrive while the engine itself is repopulating the grid are dropped,
    /// otherwise every written cell would echo back as a phantom edit.
    pub fn notify_cell_edited(&mut self) -> PlotGridResult<()> {
        self.ingest_grid_snapshot("cell edit")
    }

    /// Ingests the grid after a multi-cell paste was committed.
    ///
    /// Pasted regions may add rows or leave short columns behind; the store
    /// squares those off while rebuilding.
    pub fn notify_paste_committed(&mut self) -> PlotGridResult<()> {
        self.ingest_grid_snapshot("paste")
    }

    fn ingest_grid_snapshot(&mut self, trigger: &'static str) -> PlotGridResult<()> {
        if self.core.sync.suppress_grid_events {
            self.core.sync.suppressed_notification_count += 1;
            trace!(trigger, "dropping grid notification during repopulation");
            return Ok(());
        }
        let snapshot = self.grid.snapshot();
        debug!(
            trigger,
            rows = snapshot.row_count(),
            series = snapshot.series_count(),
            "ingesting grid snapshot"
        );
        self.core.store.replace_from_grid(&snapshot);
        self.refresh_views()
    }

    /// Pushes the store into the grid, then redraws the chart. Every committed
    /// mutation funnels through here so both views stay in lockstep.
    pub(super) fn refresh_views(&mut self) -> PlotGridResult<()> {
        self.core.sync.suppress_grid_events = true;
        self.repopulate_grid();
        self.core.sync.suppress_grid_events = false;
        self.render()
    }

    fn repopulate_grid(&mut self) {
        let store = &self.core.store;
        let x_header = store
            .column_selection()
            .map_or_else(|| "X".to_owned(), |selection| selection.x_column.clone());
        let series_names: Vec<String> = store.series().iter().map(|s| s.name.clone()).collect();
        self.grid.set_headers(&grid::headers(&x_header, &series_names));
        self.grid.set_row_count(store.row_count());
        for (series_index, series) in store.series().iter().enumerate() {
            for row in 0..series.row_count() {
                if series_index == 0 {
                    self.grid
                        .set_value_cell(row, grid::X_COLUMN, &series.x[row].display_text());
                }
                self.grid.set_value_cell(
                    row,
                    grid::value_column(series_index),
                    &series.y[row].display_text(),
                );
                self.grid
                    .set_color_cell(row, grid::color_column(series_index), series.colors[row]);
            }
        }
    }
}
