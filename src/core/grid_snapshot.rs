use serde::{Deserialize, Serialize};

use crate::core::{CellValue, Color};

/// Plain-data copy of everything an editable grid currently displays.
///
/// Snapshots are the only direction data flows from a grid widget back into
/// the store, so they carry parsed cell values rather than raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GridSnapshot {
    /// Series names in column order, one per value/color column pair.
    pub series_names: Vec<String>,
    pub rows: Vec<GridRow>,
}

/// One grid row: the shared x cell plus one cell per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub x: CellValue,
    pub cells: Vec<GridCell>,
}

/// One series cell of a row: its y value and, when painted, its point color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub y: CellValue,
    pub color: Option<Color>,
}

impl GridSnapshot {
    #[must_use]
    pub fn new(series_names: Vec<String>) -> Self {
        Self {
            series_names,
            rows: Vec::new(),
        }
    }

    /// Appends a row (builder form).
    #[must_use]
    pub fn with_row(mut self, row: GridRow) -> Self {
        self.rows.push(row);
        self
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series_names.len()
    }
}

impl GridRow {
    #[must_use]
    pub fn new(x: CellValue) -> Self {
        Self {
            x,
            cells: Vec::new(),
        }
    }

    /// Appends a series cell (builder form).
    #[must_use]
    pub fn with_cell(mut self, cell: GridCell) -> Self {
        self.cells.push(cell);
        self
    }
}

impl GridCell {
    #[must_use]
    pub fn new(y: CellValue) -> Self {
        Self { y, color: None }
    }

    /// Attaches the painted point color (builder form).
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
