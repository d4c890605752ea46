//! Pragmatic delimited-text reader for spreadsheet exports.
//!
//! One header row, then data rows. The delimiter is sniffed, cells parse
//! through the permissive [`CellValue`] rules, and ragged rows are squared
//! off rather than rejected. Quoting and escaping are out of scope.

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::CellValue;
use crate::error::{PlotGridError, PlotGridResult};

/// Candidate cell separators, in priority order for ties.
const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// Lines sampled when sniffing the delimiter.
const SNIFF_SAMPLE_LINES: usize = 8;

/// Ordered column table parsed from delimited text.
///
/// Column order follows the header row, every column has the same length,
/// and duplicate or blank header names are made unique so columns stay
/// addressable by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnTable {
    columns: IndexMap<String, Vec<CellValue>>,
}

impl ColumnTable {
    /// Parses delimited text with a header row.
    ///
    /// Short rows pad with empty labels and long rows drop the excess cells,
    /// so every column comes out the same length.
    pub fn parse_str(input: &str) -> PlotGridResult<Self> {
        let mut lines = input.lines().filter(|line| !line.trim().is_empty());
        let Some(header_line) = lines.next() else {
            return Err(PlotGridError::Import(
                "input has no header row".to_owned(),
            ));
        };

        let delimiter = sniff_delimiter(input);
        let mut columns: IndexMap<String, Vec<CellValue>> = IndexMap::new();
        for (index, cell) in header_line.split(delimiter).enumerate() {
            let name = header_name(cell, index, &columns);
            columns.insert(name, Vec::new());
        }

        let column_count = columns.len();
        for line in lines {
            let mut cells = line.split(delimiter);
            for values in columns.values_mut() {
                let text = cells.next().unwrap_or("").trim();
                values.push(CellValue::parse(text));
            }
        }
        debug!(
            columns = column_count,
            rows = columns.first().map_or(0, |(_, values)| values.len()),
            delimiter = %delimiter.escape_default(),
            "parsed column table"
        );
        Ok(Self { columns })
    }

    /// Reads and parses a delimited-text file.
    pub fn from_file(path: impl AsRef<Path>) -> PlotGridResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|err| {
            PlotGridError::Import(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::parse_str(&input)
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolves an x column and a set of y columns for the store, preserving
    /// the requested y order.
    pub fn select(
        &self,
        x_column: &str,
        y_columns: &[&str],
    ) -> PlotGridResult<(Vec<CellValue>, IndexMap<String, Vec<CellValue>>)> {
        let x_values = self
            .column(x_column)
            .ok_or_else(|| unknown_column(x_column))?
            .to_vec();
        let mut selected = IndexMap::with_capacity(y_columns.len());
        for &name in y_columns {
            let values = self.column(name).ok_or_else(|| unknown_column(name))?;
            selected.insert(name.to_owned(), values.to_vec());
        }
        Ok((x_values, selected))
    }
}

fn unknown_column(name: &str) -> PlotGridError {
    PlotGridError::Import(format!("unknown column: {name:?}"))
}

/// Trimmed header cell, with blanks named positionally and duplicates
/// suffixed until unique.
fn header_name(cell: &str, index: usize, taken: &IndexMap<String, Vec<CellValue>>) -> String {
    let trimmed = cell.trim();
    let base = if trimmed.is_empty() {
        format!("column {}", index + 1)
    } else {
        trimmed.to_owned()
    };
    if !taken.contains_key(&base) {
        return base;
    }
    let mut suffix = 2usize;
    loop {
        let candidate = format!("{base} ({suffix})");
        if !taken.contains_key(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Picks the candidate that appears the same number of times on every
/// sampled line, preferring higher counts and earlier candidates on ties.
fn sniff_delimiter(input: &str) -> char {
    let sample: Vec<&str> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_SAMPLE_LINES)
        .collect();

    let mut best = (DELIMITER_CANDIDATES[0], 0usize);
    for candidate in DELIMITER_CANDIDATES {
        let mut counts = sample.iter().map(|line| line.matches(candidate).count());
        let Some(first) = counts.next() else { continue };
        if first == 0 || counts.any(|count| count != first) {
            continue;
        }
        if first > best.1 {
            best = (candidate, first);
        }
    }
    best.0
}
