//! Column arithmetic shared by the engine and grid adapters: the x column
//! comes first, followed by one value/color column pair per series.

/// Grid column holding the shared x cells.
pub const X_COLUMN: usize = 0;

#[must_use]
pub fn column_count(series_count: usize) -> usize {
    1 + series_count * 2
}

/// Grid column holding a series' y cells.
#[must_use]
pub fn value_column(series_index: usize) -> usize {
    1 + series_index * 2
}

/// Grid column holding a series' point-color cells.
#[must_use]
pub fn color_column(series_index: usize) -> usize {
    2 + series_index * 2
}

/// What a grid column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumnRole {
    X,
    Value { series_index: usize },
    PointColor { series_index: usize },
}

/// Inverse of the column layout.
#[must_use]
pub fn column_role(column: usize) -> GridColumnRole {
    if column == X_COLUMN {
        return GridColumnRole::X;
    }
    let offset = column - 1;
    let series_index = offset / 2;
    if offset % 2 == 0 {
        GridColumnRole::Value { series_index }
    } else {
        GridColumnRole::PointColor { series_index }
    }
}

/// Header texts for the full column layout.
#[must_use]
pub fn headers(x_header: &str, series_names: &[String]) -> Vec<String> {
    let mut headers = Vec::with_capacity(column_count(series_names.len()));
    headers.push(x_header.to_owned());
    for name in series_names {
        headers.push(name.clone());
        headers.push(format!("{name} color"));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::{GridColumnRole, color_column, column_count, column_role, headers, value_column};

    #[test]
    fn column_roles_round_trip() {
        assert_eq!(column_role(0), GridColumnRole::X);
        for series_index in 0..4 {
            assert_eq!(
                column_role(value_column(series_index)),
                GridColumnRole::Value { series_index }
            );
            assert_eq!(
                column_role(color_column(series_index)),
                GridColumnRole::PointColor { series_index }
            );
        }
    }

    #[test]
    fn headers_pair_each_series_with_a_color_column() {
        let headers = headers("t", &["a".to_owned(), "b".to_owned()]);
        assert_eq!(headers, ["t", "a", "a color", "b", "b color"]);
        assert_eq!(headers.len(), column_count(2));
    }
}
