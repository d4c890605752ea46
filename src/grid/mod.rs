mod layout;
mod null_grid;

pub use layout::{
    GridColumnRole, X_COLUMN, color_column, column_count, column_role, headers, value_column,
};
pub use null_grid::NullGridView;

use crate::core::{Color, GridSnapshot};

/// Contract implemented by any editable-grid widget adapter.
///
/// The engine pushes full repopulations through the command methods and reads
/// user edits back exclusively through `snapshot`, so widget toolkits stay
/// isolated from dataset semantics. Adapters are expected to parse cell text
/// with [`CellValue::parse`](crate::core::CellValue::parse) when building
/// snapshots.
pub trait GridView {
    /// Installs the full header row, implying the column count.
    fn set_headers(&mut self, headers: &[String]);

    /// Grows or shrinks the grid to `row_count` rows.
    fn set_row_count(&mut self, row_count: usize);

    /// Writes the display text of one x or y cell.
    fn set_value_cell(&mut self, row: usize, column: usize, text: &str);

    /// Paints one point-color cell.
    fn set_color_cell(&mut self, row: usize, column: usize, color: Color);

    /// Removes the header sort indicator after a sort cycle completes.
    fn clear_sort_indicator(&mut self);

    /// Reads the full grid contents back in displayed row order.
    fn snapshot(&self) -> GridSnapshot;
}
