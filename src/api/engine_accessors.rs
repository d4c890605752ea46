use crate::core::{ChartStyle, DatasetStore, PlotKinds, Viewport};
use crate::error::{PlotGridError, PlotGridResult};
use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    #[must_use]
    pub fn store(&self) -> &DatasetStore {
        &self.core.store
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport
    }

    /// Updates the chart surface dimensions and redraws.
    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotGridResult<()> {
        if !viewport.is_valid() {
            return Err(PlotGridError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.viewport = viewport;
        self.render()
    }

    #[must_use]
    pub fn chart_style(&self) -> &ChartStyle {
        &self.core.style
    }

    #[must_use]
    pub fn plot_kinds(&self) -> PlotKinds {
        self.core.plot_kinds
    }

    #[must_use]
    pub fn grid_view(&self) -> &G {
        &self.grid
    }

    /// Mutable adapter access, for hosts that relay user edits through it.
    #[must_use]
    pub fn grid_view_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// True while the engine repopulates the grid and grid notifications are
    /// being ignored.
    #[must_use]
    pub fn is_repopulating(&self) -> bool {
        self.core.sync.suppress_grid_events
    }

    /// Grid notifications ignored so far because they arrived during
    /// repopulation.
    #[must_use]
    pub fn suppressed_notification_count(&self) -> usize {
        self.core.sync.suppressed_notification_count
    }

    /// Column and click count of the sort cycle in progress, if any.
    #[must_use]
    pub fn sort_cycle(&self) -> Option<(usize, u8)> {
        self.core
            .sort
            .column
            .map(|column| (column, self.core.sort.consecutive_clicks))
    }
}
