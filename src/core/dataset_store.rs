use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::style::{default_line_color, default_point_color};
use crate::core::{CellValue, Color, GridSnapshot, Series, SeriesStyle};

/// Which color slot of a point a recolor request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTarget {
    /// The point's own fill color.
    Point,
    /// The stroke of the segment arriving from the previous row.
    IncomingSegment,
}

/// The import columns the current series were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub x_column: String,
    pub y_columns: Vec<String>,
}

/// Single source of truth for everything the grid and the chart display.
///
/// Mutations keep the shared row axis intact: every series has the same row
/// count, one point color per row, and one gap color per adjacent row pair.
/// Out-of-range indices are ignored rather than reported, matching how an
/// interactive host deals with stale selections.
///
/// Every mutation except the sort pair (`apply_sorted_grid`,
/// `restore_baseline`) re-pins the baseline row order that a completed sort
/// cycle falls back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStore {
    series: Vec<Series>,
    baseline: Vec<Series>,
    column_selection: Option<ColumnSelection>,
    default_line_color: Color,
    default_point_color: Color,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            baseline: Vec::new(),
            column_selection: None,
            default_line_color: default_line_color(),
            default_point_color: default_point_color(),
        }
    }
}

impl DatasetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_at(&self, series_index: usize) -> Option<&Series> {
        self.series.get(series_index)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Length of the shared row axis.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.series.first().map_or(0, Series::row_count)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn column_selection(&self) -> Option<&ColumnSelection> {
        self.column_selection.as_ref()
    }

    #[must_use]
    pub fn default_line_color(&self) -> Color {
        self.default_line_color
    }

    #[must_use]
    pub fn default_point_color(&self) -> Color {
        self.default_point_color
    }

    /// Color given to new series and their gap strokes. Existing series keep
    /// their colors until repainted.
    pub fn set_default_line_color(&mut self, color: Color) {
        self.default_line_color = color;
    }

    /// Color given to unpainted point cells. Existing points keep theirs.
    pub fn set_default_point_color(&mut self, color: Color) {
        self.default_point_color = color;
    }

    /// Rebuilds every series from imported columns, remembering the
    /// selection for later re-imports.
    ///
    /// Ragged inputs truncate to the shortest column so the shared row axis
    /// holds. An empty `y_columns` map clears the store.
    pub fn replace_from_columns(
        &mut self,
        x_column: impl Into<String>,
        x_values: Vec<CellValue>,
        y_columns: IndexMap<String, Vec<CellValue>>,
    ) {
        let x_column = x_column.into();
        if y_columns.is_empty() {
            debug!(x_column, "column selection without y columns clears the store");
            self.series.clear();
            self.column_selection = None;
            self.refresh_baseline();
            return;
        }

        let row_count = y_columns
            .values()
            .map(Vec::len)
            .fold(x_values.len(), usize::min);
        let mut x_values = x_values;
        x_values.truncate(row_count);

        let mut series_list = Vec::with_capacity(y_columns.len());
        let mut selected_names = Vec::with_capacity(y_columns.len());
        for (name, mut values) in y_columns {
            values.truncate(row_count);
            let mut series = Series::new(name.clone(), self.default_line_color);
            series.x = x_values.clone();
            series.y = values;
            series.colors = vec![self.default_point_color; row_count];
            series.line_segment_colors = vec![self.default_line_color; row_count.saturating_sub(1)];
            selected_names.push(name);
            series_list.push(series);
        }

        debug!(
            series_count = series_list.len(),
            row_count, x_column, "replaced store from selected columns"
        );
        self.series = series_list;
        self.column_selection = Some(ColumnSelection {
            x_column,
            y_columns: selected_names,
        });
        self.refresh_baseline();
    }

    /// Rebuilds every series from a grid snapshot after a user edit.
    pub fn replace_from_grid(&mut self, snapshot: &GridSnapshot) {
        self.rebuild_from_snapshot(snapshot, true);
    }

    /// [`replace_from_grid`](Self::replace_from_grid) minus the baseline
    /// refresh, for view-side row reordering that must stay undoable.
    pub fn apply_sorted_grid(&mut self, snapshot: &GridSnapshot) {
        self.rebuild_from_snapshot(snapshot, false);
    }

    fn rebuild_from_snapshot(&mut self, snapshot: &GridSnapshot, refresh_baseline: bool) {
        let row_count = snapshot.rows.len();
        let mut rebuilt = Vec::with_capacity(snapshot.series_names.len());
        for (series_index, name) in snapshot.series_names.iter().enumerate() {
            let previous = self.series.get(series_index);
            let primary_color = previous.map_or(self.default_line_color, |series| series.primary_color);
            let mut series = Series::new(name.clone(), primary_color);
            series.style = previous.map_or_else(SeriesStyle::default, |series| series.style);
            series.x.reserve(row_count);
            series.y.reserve(row_count);
            series.colors.reserve(row_count);
            for row in &snapshot.rows {
                series.x.push(row.x.clone());
                match row.cells.get(series_index) {
                    Some(cell) => {
                        series.y.push(cell.y.clone());
                        series.colors.push(cell.color.unwrap_or(self.default_point_color));
                    }
                    None => {
                        // rows pasted wider than they are deep come back short
                        series.y.push(CellValue::Number(0.0));
                        series.colors.push(self.default_point_color);
                    }
                }
            }
            series.line_segment_colors =
                previous.map_or_else(Vec::new, |series| series.line_segment_colors.clone());
            series.resync_segment_colors();
            rebuilt.push(series);
        }

        debug!(
            series_count = rebuilt.len(),
            row_count, refresh_baseline, "rebuilt store from grid snapshot"
        );
        self.series = rebuilt;
        if refresh_baseline {
            self.refresh_baseline();
        }
    }

    /// Appends one row to every series.
    ///
    /// The new x continues a numeric axis from its last value and falls back
    /// to the one-based row count after labels. On an empty store this
    /// bootstraps a single-row starter series instead.
    pub fn add_row(&mut self) {
        if self.series.is_empty() {
            let mut series = Series::new("Series 1", self.default_line_color);
            series.x.push(CellValue::Number(1.0));
            series.y.push(CellValue::Number(0.0));
            series.colors.push(self.default_point_color);
            trace!("add_row bootstrapped a starter series");
            self.series.push(series);
            self.refresh_baseline();
            return;
        }

        for series in &mut self.series {
            let next_x = next_x_value(series);
            series.x.push(next_x);
            series.y.push(CellValue::Number(0.0));
            series.colors.push(series.primary_color);
            series.resync_segment_colors();
        }
        trace!(row_count = self.row_count(), "appended a row to every series");
        self.refresh_baseline();
    }

    /// Removes the given rows from every series, ignoring out-of-range and
    /// duplicate indices.
    pub fn remove_rows(&mut self, row_indices: &[usize]) {
        if row_indices.is_empty() || self.series.is_empty() {
            return;
        }
        let mut ordered = row_indices.to_vec();
        // highest first so the remaining indices stay valid while removing
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        ordered.dedup();

        for &row in &ordered {
            for series in &mut self.series {
                if row < series.x.len() {
                    series.x.remove(row);
                    series.y.remove(row);
                    series.colors.remove(row);
                }
                if row < series.line_segment_colors.len() {
                    series.line_segment_colors.remove(row);
                }
            }
        }
        for series in &mut self.series {
            series.resync_segment_colors();
        }
        trace!(
            requested = ordered.len(),
            row_count = self.row_count(),
            "removed rows"
        );
        self.refresh_baseline();
    }

    /// Moves one row of every series to a new position. Gap colors stay
    /// attached to their axis slot rather than traveling with the row.
    pub fn move_row(&mut self, from: usize, to: usize) {
        let row_count = self.row_count();
        if from >= row_count || to >= row_count {
            warn!(from, to, row_count, "ignoring move_row outside the row axis");
            return;
        }

        for series in &mut self.series {
            let x = series.x.remove(from);
            series.x.insert(to, x);
            let y = series.y.remove(from);
            series.y.insert(to, y);
            let color = series.colors.remove(from);
            series.colors.insert(to, color);
        }
        trace!(from, to, "moved row");
        self.refresh_baseline();
    }

    /// Recolors one point, or the segment arriving at it. The first point of
    /// a series has no incoming segment, so segment requests for it are
    /// ignored.
    pub fn set_point_color(
        &mut self,
        series_index: usize,
        point_index: usize,
        color: Color,
        target: ColorTarget,
    ) {
        let Some(series) = self.series.get_mut(series_index) else {
            warn!(series_index, "ignoring recolor for unknown series");
            return;
        };
        match target {
            ColorTarget::Point => {
                let Some(slot) = series.colors.get_mut(point_index) else {
                    warn!(series_index, point_index, "ignoring recolor for unknown point");
                    return;
                };
                *slot = color;
            }
            ColorTarget::IncomingSegment => {
                if point_index == 0 {
                    trace!(series_index, "first point has no incoming segment");
                    return;
                }
                let Some(slot) = series.line_segment_colors.get_mut(point_index - 1) else {
                    warn!(series_index, point_index, "ignoring recolor for unknown segment");
                    return;
                };
                *slot = color;
            }
        }
        trace!(series_index, point_index, color = %color, ?target, "recolored");
        self.refresh_baseline();
    }

    /// Paints every series, point, and segment in one color.
    pub fn repaint_all(&mut self, color: Color) {
        for series in &mut self.series {
            series.primary_color = color;
            series.colors.fill(color);
            series.line_segment_colors.fill(color);
        }
        debug!(series_count = self.series.len(), color = %color, "repainted every series");
        self.refresh_baseline();
    }

    /// Replaces one series' style record. Unknown indices are ignored.
    pub fn set_series_style(&mut self, series_index: usize, style: SeriesStyle) {
        let Some(series) = self.series.get_mut(series_index) else {
            warn!(series_index, "ignoring style for unknown series");
            return;
        };
        series.style = style;
        self.refresh_baseline();
    }

    /// Drops every series, the sort baseline, and the cached column
    /// selection. Idempotent.
    pub fn clear(&mut self) {
        debug!(series_count = self.series.len(), "cleared dataset store");
        self.series.clear();
        self.baseline.clear();
        self.column_selection = None;
    }

    /// Reinstates the row order pinned before the current sort cycle.
    pub fn restore_baseline(&mut self) {
        self.series = self.baseline.clone();
        debug!(series_count = self.series.len(), "restored pre-sort baseline");
    }

    fn refresh_baseline(&mut self) {
        self.baseline = self.series.clone();
    }
}

/// Next x cell for an appended row: numeric continuation when the axis ends
/// numeric, one-based row count otherwise.
fn next_x_value(series: &Series) -> CellValue {
    match series.x.last().and_then(CellValue::as_number) {
        Some(last) => CellValue::Number(last + 1.0),
        None => CellValue::Number(series.x.len() as f64 + 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorTarget, DatasetStore};
    use crate::core::{CellValue, Color};
    use indexmap::IndexMap;

    fn numbers(values: &[f64]) -> Vec<CellValue> {
        values.iter().map(|&value| CellValue::Number(value)).collect()
    }

    fn sample_store() -> DatasetStore {
        let mut store = DatasetStore::new();
        let mut columns = IndexMap::new();
        columns.insert("a".to_owned(), numbers(&[10.0, 20.0, 30.0]));
        store.replace_from_columns("t", numbers(&[1.0, 2.0, 3.0]), columns);
        store
    }

    #[test]
    fn baseline_survives_sort_and_restore() {
        let mut store = sample_store();
        let mut snapshot = crate::core::GridSnapshot::new(vec!["a".to_owned()]);
        for row in [2usize, 0, 1] {
            let series = &store.series()[0];
            snapshot = snapshot.with_row(
                crate::core::GridRow::new(series.x[row].clone()).with_cell(
                    crate::core::GridCell::new(series.y[row].clone()).with_color(series.colors[row]),
                ),
            );
        }
        store.apply_sorted_grid(&snapshot);
        assert_eq!(store.series()[0].x, numbers(&[3.0, 1.0, 2.0]));
        store.restore_baseline();
        assert_eq!(store.series()[0].x, numbers(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn segment_recolor_skips_the_first_point() {
        let mut store = sample_store();
        let before = store.series()[0].line_segment_colors.clone();
        store.set_point_color(0, 0, Color::BLACK, ColorTarget::IncomingSegment);
        assert_eq!(store.series()[0].line_segment_colors, before);
        store.set_point_color(0, 2, Color::BLACK, ColorTarget::IncomingSegment);
        assert_eq!(store.series()[0].line_segment_colors[1], Color::BLACK);
    }
}
