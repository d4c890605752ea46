use serde::{Deserialize, Serialize};

use crate::core::{ChartStyle, Color, PlotKinds, Viewport, default_line_color, default_point_color};
use crate::error::{PlotGridError, PlotGridResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotGridEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_line_color")]
    pub default_line_color: Color,
    #[serde(default = "default_point_color")]
    pub default_point_color: Color,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub plot_kinds: PlotKinds,
}

impl PlotGridEngineConfig {
    /// Creates a minimal config for the given surface size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            default_line_color: default_line_color(),
            default_point_color: default_point_color(),
            style: ChartStyle::default(),
            plot_kinds: PlotKinds::default(),
        }
    }

    /// Sets the initial color for new series and their gap strokes.
    #[must_use]
    pub fn with_default_line_color(mut self, color: Color) -> Self {
        self.default_line_color = color;
        self
    }

    /// Sets the initial color for unpainted points.
    #[must_use]
    pub fn with_default_point_color(mut self, color: Color) -> Self {
        self.default_point_color = color;
        self
    }

    /// Sets the initial chart style.
    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the initially enabled plot passes.
    #[must_use]
    pub fn with_plot_kinds(mut self, plot_kinds: PlotKinds) -> Self {
        self.plot_kinds = plot_kinds;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotGridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotGridError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotGridResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotGridError::InvalidData(format!("failed to parse config: {e}")))
    }
}
