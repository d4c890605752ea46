use gtk4 as gtk;

use crate::api::PlotGridEngine;
use crate::core::Viewport;
use crate::error::PlotGridResult;
use crate::grid::GridView;
use crate::render::{CairoContextRenderer, Renderer};

/// Bridges the engine into a GTK4 application.
///
/// The host owns the widgets; the adapter only funnels their callbacks into
/// the engine, so widget wiring stays in application code.
pub struct GtkPlotGridAdapter<G: GridView, R: Renderer> {
    engine: PlotGridEngine<G, R>,
}

impl<G: GridView, R: Renderer> GtkPlotGridAdapter<G, R> {
    #[must_use]
    pub fn new(engine: PlotGridEngine<G, R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &PlotGridEngine<G, R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PlotGridEngine<G, R> {
        &mut self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> PlotGridEngine<G, R> {
        self.engine
    }

    /// Resize-callback body for a `gtk::DrawingArea`.
    ///
    /// GTK reports zero-sized allocations while widgets realize; those are
    /// skipped rather than surfaced as viewport errors.
    pub fn resize(&mut self, width: i32, height: i32) -> PlotGridResult<()> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        self.engine
            .set_viewport(Viewport::new(width as u32, height as u32))
    }
}

impl<G: GridView, R: Renderer + CairoContextRenderer> GtkPlotGridAdapter<G, R> {
    /// Draw-callback body for a `gtk::DrawingArea`: renders the current frame
    /// into the context GTK hands the callback.
    pub fn draw(&mut self, context: &cairo::Context) -> PlotGridResult<()> {
        self.engine.render_on_cairo_context(context)
    }
}
