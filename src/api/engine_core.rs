use crate::core::{ChartStyle, DatasetStore, PlotKinds, Viewport};
use crate::extensions::AnnotationLayer;
use crate::import::ColumnTable;

use super::grid_sync::GridSyncState;
use super::hit_testing::HitRegion;
use super::sort_controller::SortCycleState;

/// Internal engine state used by the public facade (`PlotGridEngine`).
#[derive(Debug)]
pub(super) struct EngineCore {
    pub(super) store: DatasetStore,
    pub(super) viewport: Viewport,
    pub(super) style: ChartStyle,
    pub(super) plot_kinds: PlotKinds,
    pub(super) annotations: AnnotationLayer,
    pub(super) loaded_table: Option<ColumnTable>,
    pub(super) sync: GridSyncState,
    pub(super) sort: SortCycleState,
    /// Point geometry of the most recent frame, for pointer hit tests.
    pub(super) hit_regions: Vec<HitRegion>,
}
