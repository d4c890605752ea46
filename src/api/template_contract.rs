use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartStyle, Color, PlotKinds, SeriesStyle, default_line_color, default_point_color};
use crate::error::{PlotGridError, PlotGridResult};
use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;
use super::style_controller::{validate_chart_style, validate_series_style};

pub const STYLE_TEMPLATE_JSON_SCHEMA_V1: u32 = 1;

/// Portable capture of everything visual: chart style, enabled plot passes,
/// default colors, and per-series overrides in series order.
///
/// Templates deliberately exclude data, so one saved look can be applied to
/// any dataset. Series overrides are matched by position; extras beyond the
/// target's series count are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTemplate {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub style: ChartStyle,
    #[serde(default)]
    pub plot_kinds: PlotKinds,
    #[serde(default = "default_line_color")]
    pub default_line_color: Color,
    #[serde(default = "default_point_color")]
    pub default_point_color: Color,
    #[serde(default)]
    pub series_styles: Vec<SeriesStyle>,
}

impl StyleTemplate {
    pub fn to_json_pretty(&self) -> PlotGridResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotGridError::Template(format!("failed to serialize style template: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PlotGridResult<Self> {
        let template: Self = serde_json::from_str(input)
            .map_err(|e| PlotGridError::Template(format!("failed to parse style template: {e}")))?;
        if template.schema_version != STYLE_TEMPLATE_JSON_SCHEMA_V1 {
            return Err(PlotGridError::Template(format!(
                "unsupported style template schema version: {}",
                template.schema_version
            )));
        }
        Ok(template)
    }
}

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Captures the current visual state as a template stamped with the
    /// current time.
    pub fn style_template(&self) -> StyleTemplate {
        StyleTemplate {
            schema_version: STYLE_TEMPLATE_JSON_SCHEMA_V1,
            saved_at: Utc::now(),
            style: self.core.style.clone(),
            plot_kinds: self.core.plot_kinds,
            default_line_color: self.core.store.default_line_color(),
            default_point_color: self.core.store.default_point_color(),
            series_styles: self
                .core
                .store
                .series()
                .iter()
                .map(|series| series.style)
                .collect(),
        }
    }

    pub fn style_template_json_pretty(&self) -> PlotGridResult<String> {
        self.style_template().to_json_pretty()
    }

    /// Applies a saved template to the current chart and dataset, then
    /// redraws.
    ///
    /// The template's style is validated before anything is written, so a
    /// rejected template leaves the engine exactly as it was.
    pub fn apply_style_template(&mut self, template: &StyleTemplate) -> PlotGridResult<()> {
        validate_chart_style(&template.style)?;
        for style in &template.series_styles {
            validate_series_style(style)?;
        }
        debug!(
            series_styles = template.series_styles.len(),
            saved_at = %template.saved_at,
            "applying style template"
        );
        self.core.style = template.style.clone();
        self.core.plot_kinds = template.plot_kinds;
        self.core.store.set_default_line_color(template.default_line_color);
        self.core.store.set_default_point_color(template.default_point_color);
        let count = template.series_styles.len().min(self.core.store.series_count());
        for (series_index, style) in template.series_styles.iter().take(count).enumerate() {
            self.core.store.set_series_style(series_index, *style);
        }
        self.render()
    }

    /// Parses a template from JSON and applies it.
    pub fn apply_style_template_json(&mut self, input: &str) -> PlotGridResult<()> {
        let template = StyleTemplate::from_json_str(input)?;
        self.apply_style_template(&template)
    }
}

#[cfg(test)]
mod tests {
    use super::{STYLE_TEMPLATE_JSON_SCHEMA_V1, StyleTemplate};
    use crate::core::ChartStyle;
    use chrono::Utc;

    fn template() -> StyleTemplate {
        StyleTemplate {
            schema_version: STYLE_TEMPLATE_JSON_SCHEMA_V1,
            saved_at: Utc::now(),
            style: ChartStyle::default().with_title("saved look"),
            plot_kinds: Default::default(),
            default_line_color: crate::core::default_line_color(),
            default_point_color: crate::core::default_point_color(),
            series_styles: Vec::new(),
        }
    }

    #[test]
    fn template_json_round_trips() {
        let original = template();
        let json = original.to_json_pretty().expect("serialize");
        let parsed = StyleTemplate::from_json_str(&json).expect("parse");
        assert_eq!(parsed.style.title, "saved look");
        assert_eq!(parsed.schema_version, STYLE_TEMPLATE_JSON_SCHEMA_V1);
    }

    #[test]
    fn future_schema_versions_are_rejected() {
        let mut future = template();
        future.schema_version = 99;
        let json = future.to_json_pretty().expect("serialize");
        let err = StyleTemplate::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("schema version"));
    }
}
