use tracing::warn;

use crate::core::{
    CellValue, ChartStyle, LineStyle, LinearScale, SamplePoint, Series, TickDirection,
    scale_from_extent,
};
use crate::error::PlotGridResult;
use crate::grid::GridView;
use crate::render::{
    LinePrimitive, MarkerPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::PlotGridEngine;
use super::axis_ticks::{format_decimal, minor_ticks_at_interval, ticks_at_interval};
use super::hit_testing::HitRegion;

const PLOT_MARGIN_LEFT_PX: f64 = 70.0;
const PLOT_MARGIN_RIGHT_PX: f64 = 24.0;
const PLOT_MARGIN_TOP_PX: f64 = 40.0;
const PLOT_MARGIN_BOTTOM_PX: f64 = 52.0;
const AXIS_DOMAIN_MARGIN_RATIO: f64 = 0.05;
const MAJOR_GRID_LINE_WIDTH: f64 = 0.8;
const MINOR_GRID_LINE_WIDTH: f64 = 0.5;
const TICK_LABEL_GAP_PX: f64 = 4.0;
const DATA_LABEL_OFFSET_PX: f64 = 8.0;
const LEGEND_SWATCH_LENGTH_PX: f64 = 18.0;
const LEGEND_TEXT_GAP_PX: f64 = 6.0;
const LEGEND_ROW_SPACING_PX: f64 = 6.0;
const LEGEND_BLOCK_WIDTH_PX: f64 = 96.0;

/// Resolved mapping from data space into the plot rectangle for one frame.
#[derive(Debug, Clone, Copy)]
struct PlotDomain {
    x_scale: LinearScale,
    y_scale: LinearScale,
    categorical_x: bool,
    box_mode: bool,
    plot_left: f64,
    plot_right: f64,
    plot_top: f64,
    plot_bottom: f64,
}

impl PlotDomain {
    fn x_to_px(&self, value: f64) -> f64 {
        self.x_scale.to_pixel(value, self.plot_left, self.plot_right)
    }

    /// Pixel rows grow downward, so the y span is handed over inverted.
    fn y_to_px(&self, value: f64) -> f64 {
        self.y_scale.to_pixel(value, self.plot_bottom, self.plot_top)
    }
}

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// This keeps geometry computation deterministic and centralized in the
    /// API layer while renderer backends only execute drawing commands. Pixel
    /// positions of the plotted points are recorded as a side effect and feed
    /// [`hit_test`](Self::hit_test) until the next frame replaces them.
    pub fn build_render_frame(&mut self) -> PlotGridResult<RenderFrame> {
        let viewport = self.core.viewport;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            height,
            self.core.style.background_color,
        ));

        let Some(domain) = self.resolve_plot_domain()? else {
            self.core.hit_regions.clear();
            frame = frame.with_text(TextPrimitive::new(
                "No data to plot",
                width * 0.5,
                height * 0.5,
                self.core.style.title_size,
                self.core.style.border_color,
                TextHAlign::Center,
            ));
            frame.validate()?;
            return Ok(frame);
        };

        frame = self.grid_line_pass(frame, &domain);
        if domain.box_mode {
            frame = self.box_plot_pass(frame, &domain);
        } else {
            for series in self.core.store.series() {
                if series.numeric_y().is_none() {
                    warn!(series = %series.name, "series has non-numeric cells, skipped by plot passes");
                }
            }
            frame = self.bar_pass(frame, &domain);
            frame = self.series_line_pass(frame, &domain);
            frame = self.scatter_pass(frame, &domain);
            frame = self.data_label_pass(frame, &domain);
        }
        frame = self.axis_chrome_pass(frame, &domain);
        frame = self.legend_pass(frame, &domain);

        let mut regions = Vec::new();
        if !domain.box_mode {
            self.collect_hit_regions(&domain, &mut regions);
        }
        self.core.hit_regions = regions;

        frame.validate()?;
        Ok(frame)
    }

    /// Figures out the frame's data-to-pixel mapping, or `None` when there is
    /// nothing plottable and the frame should show the placeholder instead.
    fn resolve_plot_domain(&self) -> PlotGridResult<Option<PlotDomain>> {
        let store = &self.core.store;
        if store.is_empty() || store.row_count() == 0 {
            return Ok(None);
        }

        let viewport = self.core.viewport;
        let plot_left = PLOT_MARGIN_LEFT_PX;
        let plot_right = f64::from(viewport.width) - PLOT_MARGIN_RIGHT_PX;
        let plot_top = PLOT_MARGIN_TOP_PX;
        let plot_bottom = f64::from(viewport.height) - PLOT_MARGIN_BOTTOM_PX;
        if plot_right <= plot_left || plot_bottom <= plot_top {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "viewport too small for the plot margins"
            );
            return Ok(None);
        }

        let box_mode = self.core.plot_kinds.box_plot;
        if box_mode {
            let Some((y_min, y_max)) = cell_level_y_extent(store.series()) else {
                return Ok(None);
            };
            let x_scale = LinearScale::new(-0.5, store.series_count() as f64 - 0.5)?;
            let y_scale = scale_from_extent(y_min, y_max)?.with_margin(AXIS_DOMAIN_MARGIN_RATIO);
            return Ok(Some(PlotDomain {
                x_scale,
                y_scale,
                categorical_x: false,
                box_mode,
                plot_left,
                plot_right,
                plot_top,
                plot_bottom,
            }));
        }

        let first = &store.series()[0];
        let numeric_x: Option<Vec<f64>> = first.x.iter().map(CellValue::as_number).collect();
        let (x_scale, categorical_x) = match &numeric_x {
            Some(xs) => {
                let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
                let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                (
                    scale_from_extent(min, max)?.with_margin(AXIS_DOMAIN_MARGIN_RATIO),
                    false,
                )
            }
            None => (
                scale_from_extent(0.0, (store.row_count() - 1) as f64)?
                    .with_margin(AXIS_DOMAIN_MARGIN_RATIO),
                true,
            ),
        };

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for series in store.series() {
            if let Some(ys) = series.numeric_y() {
                y_min = ys.iter().copied().fold(y_min, f64::min);
                y_max = ys.iter().copied().fold(y_max, f64::max);
            }
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return Ok(None);
        }
        if self.core.plot_kinds.bar {
            // Bars grow from the zero baseline, which must be on screen.
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        let y_scale = scale_from_extent(y_min, y_max)?.with_margin(AXIS_DOMAIN_MARGIN_RATIO);

        Ok(Some(PlotDomain {
            x_scale,
            y_scale,
            categorical_x,
            box_mode,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
        }))
    }

    fn grid_line_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        let style = &self.core.style;
        let (y_min, y_max) = domain.y_scale.domain();
        let (x_min, x_max) = domain.x_scale.domain();

        if style.show_minor_grid {
            for tick in
                minor_ticks_at_interval(y_min, y_max, style.y_minor_interval, style.y_major_interval)
            {
                let py = domain.y_to_px(tick);
                frame = frame.with_line(LinePrimitive::new(
                    domain.plot_left,
                    py,
                    domain.plot_right,
                    py,
                    MINOR_GRID_LINE_WIDTH,
                    style.minor_grid_color,
                ));
            }
            if !domain.categorical_x && !domain.box_mode {
                for tick in minor_ticks_at_interval(
                    x_min,
                    x_max,
                    style.x_minor_interval,
                    style.x_major_interval,
                ) {
                    let px = domain.x_to_px(tick);
                    frame = frame.with_line(LinePrimitive::new(
                        px,
                        domain.plot_top,
                        px,
                        domain.plot_bottom,
                        MINOR_GRID_LINE_WIDTH,
                        style.minor_grid_color,
                    ));
                }
            }
        }

        if style.show_major_grid {
            for tick in ticks_at_interval(y_min, y_max, style.y_major_interval) {
                let py = domain.y_to_px(tick);
                frame = frame.with_line(LinePrimitive::new(
                    domain.plot_left,
                    py,
                    domain.plot_right,
                    py,
                    MAJOR_GRID_LINE_WIDTH,
                    style.major_grid_color,
                ));
            }
            if domain.categorical_x {
                let rows = self.core.store.row_count();
                for index in categorical_tick_indices(rows, style.x_major_interval) {
                    let px = domain.x_to_px(index as f64);
                    frame = frame.with_line(LinePrimitive::new(
                        px,
                        domain.plot_top,
                        px,
                        domain.plot_bottom,
                        MAJOR_GRID_LINE_WIDTH,
                        style.major_grid_color,
                    ));
                }
            } else if !domain.box_mode {
                for tick in ticks_at_interval(x_min, x_max, style.x_major_interval) {
                    let px = domain.x_to_px(tick);
                    frame = frame.with_line(LinePrimitive::new(
                        px,
                        domain.plot_top,
                        px,
                        domain.plot_bottom,
                        MAJOR_GRID_LINE_WIDTH,
                        style.major_grid_color,
                    ));
                }
            }
        }

        frame
    }

    fn series_line_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        let kinds = self.core.plot_kinds;
        if !(kinds.line || (kinds.scatter && kinds.connect_points)) {
            return frame;
        }
        let style = &self.core.style;

        if kinds.smooth {
            let mut inputs: Vec<(usize, Vec<SamplePoint>)> = Vec::new();
            for (series_index, series) in self.core.store.series().iter().enumerate() {
                let Some(ys) = series.numeric_y() else {
                    continue;
                };
                let xs = series_x_positions(series, domain.categorical_x);
                let knots = xs
                    .iter()
                    .zip(&ys)
                    .map(|(&x, &y)| SamplePoint::new(x, y))
                    .collect();
                inputs.push((series_index, knots));
            }
            let curves = smooth_all(&inputs);
            for ((series_index, _), samples) in inputs.iter().zip(curves) {
                let series = &self.core.store.series()[*series_index];
                let width = effective_line_width(series, style);
                let line_style = effective_line_style(series, style);
                for pair in samples.windows(2) {
                    frame = frame.with_line(
                        LinePrimitive::new(
                            domain.x_to_px(pair[0].x),
                            domain.y_to_px(pair[0].y),
                            domain.x_to_px(pair[1].x),
                            domain.y_to_px(pair[1].y),
                            width,
                            series.primary_color,
                        )
                        .with_style(line_style),
                    );
                }
            }
            return frame;
        }

        for series in self.core.store.series() {
            let Some(ys) = series.numeric_y() else {
                continue;
            };
            let xs = series_x_positions(series, domain.categorical_x);
            let width = effective_line_width(series, style);
            let line_style = effective_line_style(series, style);
            for gap in 0..series.row_count().saturating_sub(1) {
                let color = series
                    .line_segment_colors
                    .get(gap)
                    .copied()
                    .unwrap_or(series.primary_color);
                frame = frame.with_line(
                    LinePrimitive::new(
                        domain.x_to_px(xs[gap]),
                        domain.y_to_px(ys[gap]),
                        domain.x_to_px(xs[gap + 1]),
                        domain.y_to_px(ys[gap + 1]),
                        width,
                        color,
                    )
                    .with_style(line_style),
                );
            }
        }
        frame
    }

    fn scatter_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        if !self.core.plot_kinds.scatter {
            return frame;
        }
        let style = &self.core.style;
        for series in self.core.store.series() {
            let Some(ys) = series.numeric_y() else {
                continue;
            };
            let xs = series_x_positions(series, domain.categorical_x);
            let shape = series.style.marker.unwrap_or(style.default_marker);
            let border_color = series.style.border_color.unwrap_or(style.border_color);
            for (row, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
                let fill = series
                    .colors
                    .get(row)
                    .copied()
                    .unwrap_or(series.primary_color);
                let mut marker = MarkerPrimitive::new(
                    domain.x_to_px(x),
                    domain.y_to_px(y),
                    style.point_size,
                    shape,
                    fill,
                );
                if style.border_width > 0.0 {
                    marker = marker.with_border(border_color, style.border_width);
                }
                frame = frame.with_marker(marker);
            }
        }
        frame
    }

    fn bar_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        if !self.core.plot_kinds.bar {
            return frame;
        }
        let style = &self.core.style;
        let baseline = domain.y_to_px(0.0);
        let half = style.bar_width * 0.5;
        for series in self.core.store.series() {
            let Some(ys) = series.numeric_y() else {
                continue;
            };
            let xs = series_x_positions(series, domain.categorical_x);
            for (row, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
                let left = domain.x_to_px(x - half);
                let right = domain.x_to_px(x + half);
                let py = domain.y_to_px(y);
                let fill = series
                    .colors
                    .get(row)
                    .copied()
                    .unwrap_or(series.primary_color);
                let mut rect = RectPrimitive::new(
                    left,
                    py.min(baseline),
                    right - left,
                    (py - baseline).abs(),
                    fill,
                );
                if style.border_width > 0.0 {
                    rect = rect.with_border(style.border_color, style.border_width);
                }
                frame = frame.with_rect(rect);
            }
        }
        frame
    }

    /// Five-number summary per series: whisker stem, caps, quartile box, and
    /// median line, centered on the series index.
    fn box_plot_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        let style = &self.core.style;
        let half = style.bar_width * 0.5;
        for (series_index, series) in self.core.store.series().iter().enumerate() {
            let mut values: Vec<f64> = series.y.iter().filter_map(CellValue::as_number).collect();
            if values.is_empty() {
                continue;
            }
            values.sort_by(f64::total_cmp);
            let low = values[0];
            let high = values[values.len() - 1];
            let q1 = quantile(&values, 0.25);
            let median = quantile(&values, 0.5);
            let q3 = quantile(&values, 0.75);

            let center = series_index as f64;
            let cx = domain.x_to_px(center);
            let box_left = domain.x_to_px(center - half);
            let box_right = domain.x_to_px(center + half);
            let cap_left = domain.x_to_px(center - half * 0.5);
            let cap_right = domain.x_to_px(center + half * 0.5);
            let color = series.primary_color;

            frame = frame
                .with_line(LinePrimitive::new(
                    cx,
                    domain.y_to_px(low),
                    cx,
                    domain.y_to_px(q1),
                    style.line_width,
                    color,
                ))
                .with_line(LinePrimitive::new(
                    cx,
                    domain.y_to_px(q3),
                    cx,
                    domain.y_to_px(high),
                    style.line_width,
                    color,
                ))
                .with_line(LinePrimitive::new(
                    cap_left,
                    domain.y_to_px(low),
                    cap_right,
                    domain.y_to_px(low),
                    style.line_width,
                    color,
                ))
                .with_line(LinePrimitive::new(
                    cap_left,
                    domain.y_to_px(high),
                    cap_right,
                    domain.y_to_px(high),
                    style.line_width,
                    color,
                ))
                .with_rect(
                    RectPrimitive::new(
                        box_left,
                        domain.y_to_px(q3),
                        box_right - box_left,
                        domain.y_to_px(q1) - domain.y_to_px(q3),
                        style.background_color,
                    )
                    .with_border(color, style.line_width),
                )
                .with_line(LinePrimitive::new(
                    box_left,
                    domain.y_to_px(median),
                    box_right,
                    domain.y_to_px(median),
                    style.line_width,
                    color,
                ));

            if !series.name.is_empty() {
                frame = frame.with_text(TextPrimitive::new(
                    series.name.clone(),
                    cx,
                    domain.plot_bottom + style.major_tick_length + TICK_LABEL_GAP_PX,
                    style.tick_label_size,
                    style.border_color,
                    TextHAlign::Center,
                ));
            }
            if style.show_data_labels {
                frame = frame.with_text(TextPrimitive::new(
                    format_decimal(median, style.data_label_decimals),
                    cx,
                    domain.y_to_px(median) - DATA_LABEL_OFFSET_PX,
                    style.tick_label_size,
                    color,
                    TextHAlign::Center,
                ));
            }
        }
        frame
    }

    fn data_label_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        let style = &self.core.style;
        if !style.show_data_labels {
            return frame;
        }
        for (series_index, series) in self.core.store.series().iter().enumerate() {
            let Some(ys) = series.numeric_y() else {
                continue;
            };
            let xs = series_x_positions(series, domain.categorical_x);
            for (row, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
                let x_text = if domain.categorical_x {
                    series.x[row].display_text()
                } else {
                    format_decimal(x, style.data_label_decimals)
                };
                let text = format!("{x_text}, {}", format_decimal(y, style.data_label_decimals));
                let (label_x, label_y) = self
                    .core
                    .annotations
                    .position(series_index, row)
                    .unwrap_or((domain.x_to_px(x), domain.y_to_px(y) - DATA_LABEL_OFFSET_PX));
                let color = series
                    .colors
                    .get(row)
                    .copied()
                    .unwrap_or(series.primary_color);
                frame = frame.with_text(TextPrimitive::new(
                    text,
                    label_x,
                    label_y,
                    style.tick_label_size,
                    color,
                    TextHAlign::Center,
                ));
            }
        }
        frame
    }

    fn axis_chrome_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        let style = &self.core.style;
        let viewport = self.core.viewport;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        if style.border_width > 0.0 {
            let border = style.border_color;
            frame = frame
                .with_line(LinePrimitive::new(
                    domain.plot_left,
                    domain.plot_top,
                    domain.plot_right,
                    domain.plot_top,
                    style.border_width,
                    border,
                ))
                .with_line(LinePrimitive::new(
                    domain.plot_left,
                    domain.plot_bottom,
                    domain.plot_right,
                    domain.plot_bottom,
                    style.border_width,
                    border,
                ))
                .with_line(LinePrimitive::new(
                    domain.plot_left,
                    domain.plot_top,
                    domain.plot_left,
                    domain.plot_bottom,
                    style.border_width,
                    border,
                ))
                .with_line(LinePrimitive::new(
                    domain.plot_right,
                    domain.plot_top,
                    domain.plot_right,
                    domain.plot_bottom,
                    style.border_width,
                    border,
                ));
        }

        let (y_min, y_max) = domain.y_scale.domain();
        let draw_major_marks = style.major_tick_length > 0.0 && style.major_tick_width > 0.0;
        let draw_minor_marks =
            style.show_minor_grid && style.minor_tick_length > 0.0 && style.minor_tick_width > 0.0;
        let (major_out, major_in) = tick_extents(style.tick_direction, style.major_tick_length);
        let (minor_out, minor_in) = tick_extents(style.tick_direction, style.minor_tick_length);

        for tick in ticks_at_interval(y_min, y_max, style.y_major_interval) {
            let py = domain.y_to_px(tick);
            if draw_major_marks {
                frame = frame.with_line(LinePrimitive::new(
                    domain.plot_left - major_out,
                    py,
                    domain.plot_left + major_in,
                    py,
                    style.major_tick_width,
                    style.border_color,
                ));
            }
            frame = frame.with_text(TextPrimitive::new(
                format_decimal(tick, style.tick_label_decimals),
                domain.plot_left - style.major_tick_length - TICK_LABEL_GAP_PX,
                py - style.tick_label_size * 0.5,
                style.tick_label_size,
                style.border_color,
                TextHAlign::Right,
            ));
        }
        if draw_minor_marks {
            for tick in
                minor_ticks_at_interval(y_min, y_max, style.y_minor_interval, style.y_major_interval)
            {
                let py = domain.y_to_px(tick);
                frame = frame.with_line(LinePrimitive::new(
                    domain.plot_left - minor_out,
                    py,
                    domain.plot_left + minor_in,
                    py,
                    style.minor_tick_width,
                    style.border_color,
                ));
            }
        }

        let x_label_y = domain.plot_bottom + style.major_tick_length + TICK_LABEL_GAP_PX;
        if domain.box_mode {
            // Box positions are labeled with series names by the box pass.
        } else if domain.categorical_x {
            let store = &self.core.store;
            if let Some(first) = store.series().first() {
                for index in categorical_tick_indices(store.row_count(), style.x_major_interval) {
                    let px = domain.x_to_px(index as f64);
                    if draw_major_marks {
                        frame = frame.with_line(LinePrimitive::new(
                            px,
                            domain.plot_bottom - major_in,
                            px,
                            domain.plot_bottom + major_out,
                            style.major_tick_width,
                            style.border_color,
                        ));
                    }
                    let text = first.x[index].display_text();
                    if !text.is_empty() {
                        frame = frame.with_text(TextPrimitive::new(
                            text,
                            px,
                            x_label_y,
                            style.tick_label_size,
                            style.border_color,
                            TextHAlign::Center,
                        ));
                    }
                }
            }
        } else {
            let (x_min, x_max) = domain.x_scale.domain();
            for tick in ticks_at_interval(x_min, x_max, style.x_major_interval) {
                let px = domain.x_to_px(tick);
                if draw_major_marks {
                    frame = frame.with_line(LinePrimitive::new(
                        px,
                        domain.plot_bottom - major_in,
                        px,
                        domain.plot_bottom + major_out,
                        style.major_tick_width,
                        style.border_color,
                    ));
                }
                frame = frame.with_text(TextPrimitive::new(
                    format_decimal(tick, style.tick_label_decimals),
                    px,
                    x_label_y,
                    style.tick_label_size,
                    style.border_color,
                    TextHAlign::Center,
                ));
            }
            if draw_minor_marks {
                for tick in minor_ticks_at_interval(
                    x_min,
                    x_max,
                    style.x_minor_interval,
                    style.x_major_interval,
                ) {
                    let px = domain.x_to_px(tick);
                    frame = frame.with_line(LinePrimitive::new(
                        px,
                        domain.plot_bottom - minor_in,
                        px,
                        domain.plot_bottom + minor_out,
                        style.minor_tick_width,
                        style.border_color,
                    ));
                }
            }
        }

        if !style.title.is_empty() {
            frame = frame.with_text(TextPrimitive::new(
                style.title.clone(),
                width * 0.5,
                (domain.plot_top - style.title_size) * 0.5,
                style.title_size,
                style.border_color,
                TextHAlign::Center,
            ));
        }
        if !style.x_label.is_empty() {
            frame = frame.with_text(TextPrimitive::new(
                style.x_label.clone(),
                (domain.plot_left + domain.plot_right) * 0.5,
                height - style.axis_label_size - LEGEND_TEXT_GAP_PX,
                style.axis_label_size,
                style.border_color,
                TextHAlign::Center,
            ));
        }
        if !style.y_label.is_empty() {
            frame = frame.with_text(TextPrimitive::new(
                style.y_label.clone(),
                LEGEND_TEXT_GAP_PX,
                (domain.plot_top - style.axis_label_size) * 0.5,
                style.axis_label_size,
                style.border_color,
                TextHAlign::Left,
            ));
        }

        frame
    }

    fn legend_pass(&self, mut frame: RenderFrame, domain: &PlotDomain) -> RenderFrame {
        let style = &self.core.style;
        if !style.show_legend {
            return frame;
        }
        let swatch_left = domain.plot_right - LEGEND_BLOCK_WIDTH_PX;
        for (index, series) in self.core.store.series().iter().enumerate() {
            if series.name.is_empty() {
                continue;
            }
            let row_y = domain.plot_top
                + 12.0
                + index as f64 * (style.legend_size + LEGEND_ROW_SPACING_PX);
            frame = frame
                .with_line(LinePrimitive::new(
                    swatch_left,
                    row_y,
                    swatch_left + LEGEND_SWATCH_LENGTH_PX,
                    row_y,
                    style.line_width,
                    series.primary_color,
                ))
                .with_text(TextPrimitive::new(
                    series.name.clone(),
                    swatch_left + LEGEND_SWATCH_LENGTH_PX + LEGEND_TEXT_GAP_PX,
                    row_y - style.legend_size * 0.5,
                    style.legend_size,
                    style.border_color,
                    TextHAlign::Left,
                ));
        }
        frame
    }

    fn collect_hit_regions(&self, domain: &PlotDomain, regions: &mut Vec<HitRegion>) {
        let kinds = self.core.plot_kinds;
        if !(kinds.line || kinds.scatter || kinds.bar) {
            return;
        }
        for (series_index, series) in self.core.store.series().iter().enumerate() {
            let Some(ys) = series.numeric_y() else {
                continue;
            };
            let xs = series_x_positions(series, domain.categorical_x);
            for (row, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
                regions.push(HitRegion {
                    series_index,
                    point_index: row,
                    x_px: domain.x_to_px(x),
                    y_px: domain.y_to_px(y),
                });
            }
        }
    }
}

#[cfg(feature = "parallel-smoothing")]
fn smooth_all(inputs: &[(usize, Vec<SamplePoint>)]) -> Vec<Vec<SamplePoint>> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|(_, knots)| crate::core::smooth_series(knots))
        .collect()
}

#[cfg(not(feature = "parallel-smoothing"))]
fn smooth_all(inputs: &[(usize, Vec<SamplePoint>)]) -> Vec<Vec<SamplePoint>> {
    inputs
        .iter()
        .map(|(_, knots)| crate::core::smooth_series(knots))
        .collect()
}

fn effective_line_width(series: &Series, style: &ChartStyle) -> f64 {
    series.style.line_width.unwrap_or(style.line_width)
}

fn effective_line_style(series: &Series, style: &ChartStyle) -> LineStyle {
    series.style.line_style.unwrap_or(style.default_line_style)
}

/// X plot positions for one series: the numeric x cells, or row indices when
/// the x column is categorical.
fn series_x_positions(series: &Series, categorical: bool) -> Vec<f64> {
    if categorical {
        (0..series.row_count()).map(|row| row as f64).collect()
    } else {
        series
            .x
            .iter()
            .enumerate()
            .map(|(row, value)| value.as_number().unwrap_or(row as f64))
            .collect()
    }
}

/// Smallest and largest numeric y cell across all series, ignoring labels.
fn cell_level_y_extent(series: &[Series]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for one in series {
        for value in &one.y {
            if let Some(y) = value.as_number() {
                min = min.min(y);
                max = max.max(y);
            }
        }
    }
    (min.is_finite() && max.is_finite()).then_some((min, max))
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty and
/// ascending.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    let weight = rank - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * weight
}

fn categorical_tick_indices(row_count: usize, major_interval: f64) -> Vec<usize> {
    let step = major_interval.round().max(1.0) as usize;
    (0..row_count).step_by(step).collect()
}

/// How far a tick mark extends outside and inside the plot edge.
fn tick_extents(direction: TickDirection, length: f64) -> (f64, f64) {
    match direction {
        TickDirection::Out => (length, 0.0),
        TickDirection::In => (0.0, length),
        TickDirection::InOut => (length, length),
    }
}

#[cfg(test)]
mod tests {
    use super::quantile;

    #[test]
    fn quantiles_interpolate_between_ranks() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&values, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&values, 0.25) - 1.75).abs() < 1e-12);
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 1.0), 4.0);
    }

    #[test]
    fn single_value_quantiles_collapse_to_that_value() {
        assert_eq!(quantile(&[7.0], 0.25), 7.0);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }
}
