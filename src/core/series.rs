use serde::{Deserialize, Serialize};

use crate::core::smoothing::SamplePoint;
use crate::core::{CellValue, Color, SeriesStyle};

/// One plotted series.
///
/// All series in a store share the row axis: `x`, `y`, and `colors` always
/// have the same length, and `line_segment_colors` holds exactly one entry
/// per adjacent row pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<CellValue>,
    pub y: Vec<CellValue>,
    /// Per-point fill colors, one per row.
    pub colors: Vec<Color>,
    /// Color applied to new rows, repaints, and the smoothed curve.
    pub primary_color: Color,
    /// Per-gap stroke colors, one per adjacent row pair.
    pub line_segment_colors: Vec<Color>,
    #[serde(default)]
    pub style: SeriesStyle,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, primary_color: Color) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
            colors: Vec::new(),
            primary_color,
            line_segment_colors: Vec::new(),
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.x.len()
    }

    /// Gap-color count the row axis requires.
    #[must_use]
    pub fn expected_segment_count(&self) -> usize {
        self.x.len().saturating_sub(1)
    }

    /// Truncates or pads `line_segment_colors` back to one entry per gap,
    /// padding with `primary_color`.
    pub fn resync_segment_colors(&mut self) {
        let expected = self.expected_segment_count();
        if self.line_segment_colors.len() > expected {
            self.line_segment_colors.truncate(expected);
        } else {
            while self.line_segment_colors.len() < expected {
                self.line_segment_colors.push(self.primary_color);
            }
        }
    }

    /// Numeric y column, or `None` when any cell is a label.
    #[must_use]
    pub fn numeric_y(&self) -> Option<Vec<f64>> {
        self.y.iter().map(CellValue::as_number).collect()
    }

    /// Fully numeric (x, y) projection, or `None` when any cell is a label.
    #[must_use]
    pub fn numeric_points(&self) -> Option<Vec<SamplePoint>> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(x, y)| match (x.as_number(), y.as_number()) {
                (Some(x), Some(y)) => Some(SamplePoint::new(x, y)),
                _ => None,
            })
            .collect()
    }
}
