use crate::core::{ChartStyle, Color, PlotKinds, SeriesStyle};
use crate::error::{PlotGridError, PlotGridResult};
use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Replaces the chart-wide style and redraws.
    ///
    /// Rejected styles leave the engine untouched. The grid is not
    /// repopulated; style never reaches the grid cells.
    pub fn set_chart_style(&mut self, style: ChartStyle) -> PlotGridResult<()> {
        validate_chart_style(&style)?;
        self.core.style = style;
        self.render()
    }

    /// Replaces the set of enabled plot passes and redraws.
    pub fn set_plot_kinds(&mut self, plot_kinds: PlotKinds) -> PlotGridResult<()> {
        self.core.plot_kinds = plot_kinds;
        self.render()
    }

    /// Replaces the colors assigned to rows and series created from now on,
    /// then redraws. Existing rows keep their colors.
    pub fn set_default_colors(&mut self, line: Color, point: Color) -> PlotGridResult<()> {
        self.core.store.set_default_line_color(line);
        self.core.store.set_default_point_color(point);
        self.render()
    }

    /// Replaces one series' style overrides and redraws. Unknown series
    /// indices are ignored.
    pub fn set_series_style(&mut self, series_index: usize, style: SeriesStyle) -> PlotGridResult<()> {
        validate_series_style(&style)?;
        self.core.store.set_series_style(series_index, style);
        self.render()
    }
}

pub(super) fn validate_series_style(style: &SeriesStyle) -> PlotGridResult<()> {
    if let Some(line_width) = style.line_width {
        if !line_width.is_finite() || line_width <= 0.0 {
            return Err(PlotGridError::InvalidData(format!(
                "series style line_width must be finite and positive, got {line_width}"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_chart_style(style: &ChartStyle) -> PlotGridResult<()> {
    require_positive("x_major_interval", style.x_major_interval)?;
    require_positive("x_minor_interval", style.x_minor_interval)?;
    require_positive("y_major_interval", style.y_major_interval)?;
    require_positive("y_minor_interval", style.y_minor_interval)?;
    require_positive("line_width", style.line_width)?;
    require_positive("bar_width", style.bar_width)?;
    require_positive("point_size", style.point_size)?;
    require_positive("title_size", style.title_size)?;
    require_positive("axis_label_size", style.axis_label_size)?;
    require_positive("tick_label_size", style.tick_label_size)?;
    require_positive("legend_size", style.legend_size)?;
    require_non_negative("border_width", style.border_width)?;
    require_non_negative("major_tick_length", style.major_tick_length)?;
    require_non_negative("major_tick_width", style.major_tick_width)?;
    require_non_negative("minor_tick_length", style.minor_tick_length)?;
    require_non_negative("minor_tick_width", style.minor_tick_width)?;
    Ok(())
}

fn require_positive(field: &str, value: f64) -> PlotGridResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlotGridError::InvalidData(format!(
            "chart style field {field} must be finite and positive, got {value}"
        )))
    }
}

fn require_non_negative(field: &str, value: f64) -> PlotGridResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlotGridError::InvalidData(format!(
            "chart style field {field} must be finite and non-negative, got {value}"
        )))
    }
}
