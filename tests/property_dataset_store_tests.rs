use indexmap::IndexMap;
use plotgrid_rs::core::{
    CellValue, Color, ColorTarget, DatasetStore, GridCell, GridRow, GridSnapshot,
};
use proptest::prelude::*;

fn numbers(values: &[f64]) -> Vec<CellValue> {
    values.iter().copied().map(CellValue::Number).collect()
}

fn seeded_store(rows: usize) -> DatasetStore {
    let mut store = DatasetStore::new();
    let xs: Vec<f64> = (0..rows).map(|row| row as f64).collect();
    let ys: Vec<f64> = (0..rows).map(|row| (row * row) as f64).collect();
    let mut columns = IndexMap::new();
    columns.insert("a".to_owned(), numbers(&ys));
    columns.insert("b".to_owned(), numbers(&xs));
    store.replace_from_columns("t", numbers(&xs), columns);
    store
}

fn snapshot_in_order(store: &DatasetStore, order: &[usize]) -> GridSnapshot {
    let names = store
        .series()
        .iter()
        .map(|series| series.name.clone())
        .collect();
    let mut snapshot = GridSnapshot::new(names);
    for &row in order {
        let mut grid_row = GridRow::new(store.series()[0].x[row].clone());
        for series in store.series() {
            grid_row = grid_row
                .with_cell(GridCell::new(series.y[row].clone()).with_color(series.colors[row]));
        }
        snapshot = snapshot.with_row(grid_row);
    }
    snapshot
}

fn apply_op(store: &mut DatasetStore, selector: u8, a: usize, b: usize) {
    match selector % 6 {
        0 => store.add_row(),
        1 => store.remove_rows(&[a % 12, b % 12]),
        2 => store.move_row(a % 12, b % 12),
        3 => {
            let target = if b % 2 == 0 {
                ColorTarget::Point
            } else {
                ColorTarget::IncomingSegment
            };
            store.set_point_color(a % 4, b % 12, Color::rgb(a as u8, b as u8, 0x7f), target);
        }
        4 => store.repaint_all(Color::rgb(b as u8, a as u8, 0x3f)),
        _ => {
            let rows = a % 5;
            let values: Vec<f64> = (0..rows).map(|row| row as f64).collect();
            let mut columns = IndexMap::new();
            columns.insert("fresh".to_owned(), numbers(&values));
            store.replace_from_columns("t", numbers(&values), columns);
        }
    }
}

fn assert_row_axis_aligned(store: &DatasetStore) {
    for series in store.series() {
        assert_eq!(series.x.len(), series.y.len());
        assert_eq!(series.y.len(), series.colors.len());
        assert_eq!(
            series.line_segment_colors.len(),
            series.x.len().saturating_sub(1)
        );
        assert_eq!(series.x.len(), store.row_count());
    }
}

proptest! {
    #[test]
    fn the_row_axis_survives_any_op_sequence(
        ops in prop::collection::vec((0u8..6, 0usize..16, 0usize..16), 1..40)
    ) {
        let mut store = seeded_store(4);
        for (selector, a, b) in ops {
            apply_op(&mut store, selector, a, b);
            assert_row_axis_aligned(&store);
        }
    }

    #[test]
    fn sorted_orders_apply_and_restore_exactly(
        rows in 2usize..10,
        rotation in 1usize..10
    ) {
        let mut store = seeded_store(rows);
        let before = store.series().to_vec();

        let order: Vec<usize> = (0..rows).map(|row| (row + rotation) % rows).collect();
        let snapshot = snapshot_in_order(&store, &order);
        store.apply_sorted_grid(&snapshot);

        for (series_index, series) in store.series().iter().enumerate() {
            for (position, &source_row) in order.iter().enumerate() {
                prop_assert_eq!(&series.y[position], &before[series_index].y[source_row]);
            }
        }

        store.restore_baseline();
        prop_assert_eq!(store.series(), before.as_slice());
    }

    #[test]
    fn grid_round_trips_preserve_values_and_colors(rows in 1usize..10) {
        let mut store = seeded_store(rows);
        let before = store.series().to_vec();

        let identity: Vec<usize> = (0..rows).collect();
        let snapshot = snapshot_in_order(&store, &identity);
        store.replace_from_grid(&snapshot);

        for (series, original) in store.series().iter().zip(&before) {
            prop_assert_eq!(&series.x, &original.x);
            prop_assert_eq!(&series.y, &original.y);
            prop_assert_eq!(&series.colors, &original.colors);
        }
    }
}
