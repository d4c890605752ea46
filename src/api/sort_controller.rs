use tracing::{debug, trace};

use crate::error::PlotGridResult;
use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;

/// Counts consecutive header clicks on one column so the third click can
/// restore the pre-sort row order.
#[derive(Debug, Default)]
pub(super) struct SortCycleState {
    pub(super) column: Option<usize>,
    pub(super) consecutive_clicks: u8,
}

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Ingests the grid after the host sorted it by a column header click.
    ///
    /// The view owns the comparator and has already reordered its rows when
    /// this is called. The first two clicks on the same column adopt the
    /// view's order as the store's new row order without touching the pinned
    /// baseline. A third consecutive click abandons the sort, restores the
    /// baseline order, and clears the view's sort indicator.
    pub fn notify_sort_clicked(&mut self, column: usize) -> PlotGridResult<()> {
        if self.core.sync.suppress_grid_events {
            self.core.sync.suppressed_notification_count += 1;
            trace!(column, "dropping sort notification during repopulation");
            return Ok(());
        }
        let clicks = if self.core.sort.column == Some(column) {
            self.core.sort.consecutive_clicks.saturating_add(1)
        } else {
            1
        };
        if clicks >= 3 {
            debug!(column, "third consecutive sort click, restoring baseline order");
            self.core.sort = SortCycleState::default();
            self.core.store.restore_baseline();
            self.grid.clear_sort_indicator();
            return self.refresh_views();
        }
        self.core.sort.column = Some(column);
        self.core.sort.consecutive_clicks = clicks;
        let snapshot = self.grid.snapshot();
        debug!(column, clicks, rows = snapshot.row_count(), "adopting sorted row order");
        self.core.store.apply_sorted_grid(&snapshot);
        self.refresh_views()
    }

    pub(super) fn reset_sort_cycle(&mut self) {
        self.core.sort = SortCycleState::default();
    }
}
