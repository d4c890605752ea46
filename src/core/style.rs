use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Marker glyph drawn for a plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    Plus,
    Cross,
    Star,
}

/// Dash pattern for stroked lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Side of the axis border the tick marks grow toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TickDirection {
    #[default]
    Out,
    In,
    InOut,
}

/// Per-series overrides of the chart-wide drawing settings.
///
/// Every field is optional; `None` falls back to the matching `ChartStyle`
/// default at draw time, so a fresh series follows the chart style until the
/// host pins an explicit value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesStyle {
    #[serde(default)]
    pub marker: Option<MarkerShape>,
    #[serde(default)]
    pub line_style: Option<LineStyle>,
    #[serde(default)]
    pub line_width: Option<f64>,
    #[serde(default)]
    pub border_color: Option<Color>,
}

impl SeriesStyle {
    /// Pins the marker glyph for this series.
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerShape) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Pins the dash pattern for this series.
    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }

    /// Pins the stroke width for this series.
    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Pins the marker border color for this series.
    #[must_use]
    pub fn with_border_color(mut self, border_color: Color) -> Self {
        self.border_color = Some(border_color);
        self
    }
}

/// Which plot passes the chart draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotKinds {
    #[serde(default = "default_true")]
    pub line: bool,
    #[serde(default)]
    pub scatter: bool,
    #[serde(default)]
    pub bar: bool,
    #[serde(default)]
    pub box_plot: bool,
    /// Replaces the segment pass with a monotone-cubic resampled curve.
    #[serde(default)]
    pub smooth: bool,
    /// Connects scatter points even when the line pass is off.
    #[serde(default)]
    pub connect_points: bool,
}

impl Default for PlotKinds {
    fn default() -> Self {
        Self {
            line: true,
            scatter: false,
            bar: false,
            box_plot: false,
            smooth: false,
            connect_points: false,
        }
    }
}

impl PlotKinds {
    /// Toggles the per-gap segment line pass.
    #[must_use]
    pub fn with_line(mut self, enabled: bool) -> Self {
        self.line = enabled;
        self
    }

    /// Toggles the per-point marker pass.
    #[must_use]
    pub fn with_scatter(mut self, enabled: bool) -> Self {
        self.scatter = enabled;
        self
    }

    /// Toggles the vertical bar pass.
    #[must_use]
    pub fn with_bar(mut self, enabled: bool) -> Self {
        self.bar = enabled;
        self
    }

    /// Toggles the per-series box-and-whisker pass.
    #[must_use]
    pub fn with_box_plot(mut self, enabled: bool) -> Self {
        self.box_plot = enabled;
        self
    }

    /// Toggles smoothing of the line pass.
    #[must_use]
    pub fn with_smooth(mut self, enabled: bool) -> Self {
        self.smooth = enabled;
        self
    }

    /// Toggles connecting lines between scatter points.
    #[must_use]
    pub fn with_connect_points(mut self, enabled: bool) -> Self {
        self.connect_points = enabled;
        self
    }
}

/// Chart-wide visual settings: text, grids, ticks, sizes, and colors.
///
/// Defaults track the conventional desktop-matplotlib look the application
/// family ships with, so an unconfigured chart is already presentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default = "default_true")]
    pub show_major_grid: bool,
    #[serde(default)]
    pub show_minor_grid: bool,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub show_data_labels: bool,
    #[serde(default = "default_decimals")]
    pub data_label_decimals: u8,
    #[serde(default = "default_decimals")]
    pub tick_label_decimals: u8,
    #[serde(default = "default_major_interval")]
    pub x_major_interval: f64,
    #[serde(default = "default_minor_interval")]
    pub x_minor_interval: f64,
    #[serde(default = "default_major_interval")]
    pub y_major_interval: f64,
    #[serde(default = "default_minor_interval")]
    pub y_minor_interval: f64,
    #[serde(default)]
    pub default_marker: MarkerShape,
    #[serde(default)]
    pub default_line_style: LineStyle,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_point_size")]
    pub point_size: f64,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_label_size")]
    pub title_size: f64,
    #[serde(default = "default_label_size")]
    pub axis_label_size: f64,
    #[serde(default = "default_tick_label_size")]
    pub tick_label_size: f64,
    #[serde(default = "default_tick_label_size")]
    pub legend_size: f64,
    #[serde(default = "default_major_tick_length")]
    pub major_tick_length: f64,
    #[serde(default = "default_major_tick_width")]
    pub major_tick_width: f64,
    #[serde(default = "default_minor_tick_length")]
    pub minor_tick_length: f64,
    #[serde(default = "default_minor_tick_width")]
    pub minor_tick_width: f64,
    #[serde(default)]
    pub tick_direction: TickDirection,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_major_grid_color")]
    pub major_grid_color: Color,
    #[serde(default = "default_minor_grid_color")]
    pub minor_grid_color: Color,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            show_major_grid: true,
            show_minor_grid: false,
            show_legend: true,
            show_data_labels: false,
            data_label_decimals: default_decimals(),
            tick_label_decimals: default_decimals(),
            x_major_interval: default_major_interval(),
            x_minor_interval: default_minor_interval(),
            y_major_interval: default_major_interval(),
            y_minor_interval: default_minor_interval(),
            default_marker: MarkerShape::default(),
            default_line_style: LineStyle::default(),
            line_width: default_line_width(),
            bar_width: default_bar_width(),
            point_size: default_point_size(),
            border_width: default_border_width(),
            title_size: default_label_size(),
            axis_label_size: default_label_size(),
            tick_label_size: default_tick_label_size(),
            legend_size: default_tick_label_size(),
            major_tick_length: default_major_tick_length(),
            major_tick_width: default_major_tick_width(),
            minor_tick_length: default_minor_tick_length(),
            minor_tick_width: default_minor_tick_width(),
            tick_direction: TickDirection::default(),
            background_color: default_background_color(),
            major_grid_color: default_major_grid_color(),
            minor_grid_color: default_minor_grid_color(),
            border_color: default_border_color(),
        }
    }
}

impl ChartStyle {
    /// Sets the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Toggles the major grid lines.
    #[must_use]
    pub fn with_major_grid(mut self, enabled: bool) -> Self {
        self.show_major_grid = enabled;
        self
    }

    /// Toggles the minor grid lines.
    #[must_use]
    pub fn with_minor_grid(mut self, enabled: bool) -> Self {
        self.show_minor_grid = enabled;
        self
    }

    /// Toggles the legend block.
    #[must_use]
    pub fn with_legend(mut self, enabled: bool) -> Self {
        self.show_legend = enabled;
        self
    }

    /// Toggles per-point data labels.
    #[must_use]
    pub fn with_data_labels(mut self, enabled: bool) -> Self {
        self.show_data_labels = enabled;
        self
    }

    /// Sets the decimal places used by data labels.
    #[must_use]
    pub fn with_data_label_decimals(mut self, decimals: u8) -> Self {
        self.data_label_decimals = decimals;
        self
    }

    /// Sets the decimal places used by tick labels.
    #[must_use]
    pub fn with_tick_label_decimals(mut self, decimals: u8) -> Self {
        self.tick_label_decimals = decimals;
        self
    }

    /// Sets the major tick spacing on the x axis, in data units.
    #[must_use]
    pub fn with_x_major_interval(mut self, interval: f64) -> Self {
        self.x_major_interval = interval;
        self
    }

    /// Sets the minor tick spacing on the x axis, in data units.
    #[must_use]
    pub fn with_x_minor_interval(mut self, interval: f64) -> Self {
        self.x_minor_interval = interval;
        self
    }

    /// Sets the major tick spacing on the y axis, in data units.
    #[must_use]
    pub fn with_y_major_interval(mut self, interval: f64) -> Self {
        self.y_major_interval = interval;
        self
    }

    /// Sets the minor tick spacing on the y axis, in data units.
    #[must_use]
    pub fn with_y_minor_interval(mut self, interval: f64) -> Self {
        self.y_minor_interval = interval;
        self
    }

    /// Sets the fallback stroke width for series without an override.
    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the bar width as a fraction of one x-axis unit.
    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the marker size in pixels.
    #[must_use]
    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    /// Sets the plot background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Stock line color shared by new series and fresh stores.
#[must_use]
pub fn default_line_color() -> Color {
    Color::rgb(0x1f, 0x77, 0xb4)
}

/// Stock point color shared by new series and fresh stores.
#[must_use]
pub fn default_point_color() -> Color {
    Color::rgb(0xff, 0x7f, 0x0e)
}

fn default_true() -> bool {
    true
}

fn default_decimals() -> u8 {
    2
}

fn default_major_interval() -> f64 {
    1.0
}

fn default_minor_interval() -> f64 {
    0.5
}

fn default_line_width() -> f64 {
    2.0
}

fn default_bar_width() -> f64 {
    0.8
}

fn default_point_size() -> f64 {
    10.0
}

fn default_border_width() -> f64 {
    1.0
}

fn default_label_size() -> f64 {
    12.0
}

fn default_tick_label_size() -> f64 {
    10.0
}

fn default_major_tick_length() -> f64 {
    3.5
}

fn default_major_tick_width() -> f64 {
    0.8
}

fn default_minor_tick_length() -> f64 {
    2.0
}

fn default_minor_tick_width() -> f64 {
    0.6
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_major_grid_color() -> Color {
    Color::rgb(0xcc, 0xcc, 0xcc)
}

fn default_minor_grid_color() -> Color {
    Color::rgb(0xee, 0xee, 0xee)
}

fn default_border_color() -> Color {
    Color::BLACK
}
