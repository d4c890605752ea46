use crate::error::PlotGridResult;
use crate::grid::GridView;
use crate::render::Renderer;

use super::engine_core::EngineCore;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PlotGridEngine` owns the dataset store and both view adapters, and keeps
/// them synchronized: every committed mutation repopulates the grid and
/// redraws the chart before the call returns, so the views never show
/// different data.
#[derive(Debug)]
pub struct PlotGridEngine<G: GridView, R: Renderer> {
    pub(super) grid: G,
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Redraws the chart from the current store contents.
    pub fn render(&mut self) -> PlotGridResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotGridResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_views(self) -> (G, R) {
        (self.grid, self.renderer)
    }
}
