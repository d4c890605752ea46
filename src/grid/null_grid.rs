use std::cmp::Ordering;

use crate::core::{CellValue, Color, GridCell, GridRow, GridSnapshot};
use crate::grid::{GridView, color_column, value_column};

/// In-memory grid used by tests and headless hosts.
///
/// Cells hold raw text exactly as a widget would, so snapshots go through the
/// same permissive parsing as real adapters. Counters record engine-issued
/// commands; the `edit_*` and `sort_rows_by_column` helpers simulate user
/// interaction without touching the counters.
#[derive(Debug, Default)]
pub struct NullGridView {
    headers: Vec<String>,
    texts: Vec<Vec<String>>,
    colors: Vec<Vec<Option<Color>>>,
    sort_indicator: Option<(usize, bool)>,
    pub set_value_cell_count: usize,
    pub set_color_cell_count: usize,
    pub clear_sort_indicator_count: usize,
}

impl NullGridView {
    #[must_use]
    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.texts.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        self.texts.get(row)?.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn cell_color(&self, row: usize, column: usize) -> Option<Color> {
        self.colors.get(row)?.get(column).copied().flatten()
    }

    /// Column and ascending flag of the visible sort indicator, if any.
    #[must_use]
    pub fn sort_indicator(&self) -> Option<(usize, bool)> {
        self.sort_indicator
    }

    /// Simulates the user typing into a cell.
    pub fn edit_cell_text(&mut self, row: usize, column: usize, text: impl Into<String>) {
        if let Some(slot) = self.texts.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *slot = text.into();
        }
    }

    /// Simulates the user painting a color cell.
    pub fn edit_cell_color(&mut self, row: usize, column: usize, color: Color) {
        if let Some(slot) = self.colors.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *slot = Some(color);
        }
    }

    /// Simulates a paste growing the grid by one blank row.
    pub fn append_blank_row(&mut self) {
        self.texts.push(vec![String::new(); self.headers.len()]);
        self.colors.push(vec![None; self.headers.len()]);
    }

    /// Reorders rows by one column the way a sortable table widget does:
    /// numeric comparison when both cells parse, lexical otherwise, and the
    /// sort indicator moves to the column.
    pub fn sort_rows_by_column(&mut self, column: usize, ascending: bool) {
        let mut order: Vec<usize> = (0..self.texts.len()).collect();
        order.sort_by(|&left, &right| {
            let ordering = compare_cell_text(
                self.cell_text(left, column).unwrap_or(""),
                self.cell_text(right, column).unwrap_or(""),
            );
            if ascending { ordering } else { ordering.reverse() }
        });
        self.texts = order.iter().map(|&row| self.texts[row].clone()).collect();
        self.colors = order.iter().map(|&row| self.colors[row].clone()).collect();
        self.sort_indicator = Some((column, ascending));
    }
}

impl GridView for NullGridView {
    fn set_headers(&mut self, headers: &[String]) {
        self.headers = headers.to_vec();
        for row in &mut self.texts {
            row.resize(headers.len(), String::new());
        }
        for row in &mut self.colors {
            row.resize(headers.len(), None);
        }
    }

    fn set_row_count(&mut self, row_count: usize) {
        self.texts
            .resize_with(row_count, || vec![String::new(); self.headers.len()]);
        self.colors
            .resize_with(row_count, || vec![None; self.headers.len()]);
    }

    fn set_value_cell(&mut self, row: usize, column: usize, text: &str) {
        if let Some(slot) = self.texts.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *slot = text.to_owned();
            self.set_value_cell_count += 1;
        }
    }

    fn set_color_cell(&mut self, row: usize, column: usize, color: Color) {
        if let Some(slot) = self.colors.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *slot = Some(color);
            self.set_color_cell_count += 1;
        }
    }

    fn clear_sort_indicator(&mut self) {
        self.sort_indicator = None;
        self.clear_sort_indicator_count += 1;
    }

    fn snapshot(&self) -> GridSnapshot {
        let series_count = self.headers.len().saturating_sub(1) / 2;
        let series_names = (0..series_count)
            .map(|series_index| {
                self.headers
                    .get(value_column(series_index))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect();

        let mut snapshot = GridSnapshot::new(series_names);
        for row in 0..self.texts.len() {
            let mut grid_row = GridRow::new(CellValue::parse(self.cell_text(row, 0).unwrap_or("")));
            for series_index in 0..series_count {
                let text = self.cell_text(row, value_column(series_index)).unwrap_or("");
                let mut cell = GridCell::new(CellValue::parse(text));
                cell.color = self.cell_color(row, color_column(series_index));
                grid_row.cells.push(cell);
            }
            snapshot.rows.push(grid_row);
        }
        snapshot
    }
}

/// Numeric-aware cell comparison: numbers sort before labels.
fn compare_cell_text(left: &str, right: &str) -> Ordering {
    match (
        CellValue::parse(left).as_number(),
        CellValue::parse(right).as_number(),
    ) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.cmp(right),
    }
}
