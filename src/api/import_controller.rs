use std::path::Path;

use tracing::debug;

use crate::error::{PlotGridError, PlotGridResult};
use crate::grid::GridView;
use crate::import::ColumnTable;
use crate::render::Renderer;

use super::PlotGridEngine;

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Parses delimited text and caches it as the loaded column table.
    ///
    /// Loading only stages the table; nothing is plotted until the host picks
    /// columns with [`select_columns`](Self::select_columns). A parse failure
    /// keeps whatever table was loaded before.
    pub fn load_column_table_str(&mut self, input: &str) -> PlotGridResult<()> {
        let table = ColumnTable::parse_str(input)?;
        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "column table loaded"
        );
        self.core.loaded_table = Some(table);
        Ok(())
    }

    /// Reads a delimited text file and caches it as the loaded column table.
    pub fn load_column_table_file(&mut self, path: impl AsRef<Path>) -> PlotGridResult<()> {
        let table = ColumnTable::from_file(path)?;
        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "column table loaded"
        );
        self.core.loaded_table = Some(table);
        Ok(())
    }

    /// The most recently loaded column table, if any.
    pub fn loaded_table(&self) -> Option<&ColumnTable> {
        self.core.loaded_table.as_ref()
    }

    /// Plots columns from the loaded table: one x column and one series per
    /// y column, replacing the current dataset.
    pub fn select_columns(&mut self, x_column: &str, y_columns: &[&str]) -> PlotGridResult<()> {
        let table = self
            .core
            .loaded_table
            .as_ref()
            .ok_or_else(|| PlotGridError::Import("no column table loaded".to_owned()))?;
        let (x_values, selected) = table.select(x_column, y_columns)?;
        self.replace_from_columns(x_column, x_values, selected)
    }
}
