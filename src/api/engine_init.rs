use crate::core::DatasetStore;
use crate::error::{PlotGridError, PlotGridResult};
use crate::extensions::AnnotationLayer;
use crate::grid::GridView;
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::grid_sync::GridSyncState;
use super::sort_controller::SortCycleState;
use super::style_controller::validate_chart_style;
use super::{PlotGridEngine, PlotGridEngineConfig};

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Creates a fully initialized engine and pushes the first refresh into
    /// both views.
    pub fn new(grid: G, renderer: R, config: PlotGridEngineConfig) -> PlotGridResult<Self> {
        if !config.viewport.is_valid() {
            return Err(PlotGridError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        validate_chart_style(&config.style)?;

        let mut store = DatasetStore::new();
        store.set_default_line_color(config.default_line_color);
        store.set_default_point_color(config.default_point_color);

        let mut engine = Self {
            grid,
            renderer,
            core: EngineCore {
                store,
                viewport: config.viewport,
                style: config.style,
                plot_kinds: config.plot_kinds,
                annotations: AnnotationLayer::new(),
                loaded_table: None,
                sync: GridSyncState::default(),
                sort: SortCycleState::default(),
                hit_regions: Vec::new(),
            },
        };
        engine.refresh_views()?;
        Ok(engine)
    }
}
