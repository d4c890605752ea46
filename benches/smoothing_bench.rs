use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use plotgrid_rs::api::{PlotGridEngine, PlotGridEngineConfig};
use plotgrid_rs::core::{CellValue, PlotKinds, SamplePoint, Viewport, smooth_series};
use plotgrid_rs::grid::NullGridView;
use plotgrid_rs::render::NullRenderer;
use std::hint::black_box;

fn sine_knots(count: usize) -> Vec<SamplePoint> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 0.1;
            SamplePoint::new(x, (x * 0.7).sin() * 50.0 + x * 0.2)
        })
        .collect()
}

fn bench_smooth_series_1k(c: &mut Criterion) {
    let knots = sine_knots(1_000);
    c.bench_function("smooth_series_1k", |b| {
        b.iter(|| {
            let _ = smooth_series(black_box(&knots));
        })
    });
}

fn bench_smooth_series_10k(c: &mut Criterion) {
    let knots = sine_knots(10_000);
    c.bench_function("smooth_series_10k", |b| {
        b.iter(|| {
            let _ = smooth_series(black_box(&knots));
        })
    });
}

fn bench_render_frame_4_series_1k_rows(c: &mut Criterion) {
    let config = PlotGridEngineConfig::new(Viewport::new(1920, 1080))
        .with_plot_kinds(PlotKinds::default().with_scatter(true));
    let mut engine = PlotGridEngine::new(NullGridView::default(), NullRenderer::default(), config)
        .expect("engine init");

    let rows = 1_000usize;
    let xs: Vec<CellValue> = (0..rows).map(|i| CellValue::Number(i as f64)).collect();
    let mut columns = IndexMap::new();
    for series_index in 0..4 {
        let values = (0..rows)
            .map(|i| {
                let x = i as f64 * 0.05;
                CellValue::Number((x + series_index as f64).sin() * 20.0)
            })
            .collect();
        columns.insert(format!("series {series_index}"), values);
    }
    engine
        .replace_from_columns("t", xs, columns)
        .expect("dataset load");

    c.bench_function("render_frame_4_series_1k_rows", |b| {
        b.iter(|| {
            let _ = engine.build_render_frame().expect("frame build");
        })
    });
}

criterion_group!(
    benches,
    bench_smooth_series_1k,
    bench_smooth_series_10k,
    bench_render_frame_4_series_1k_rows
);
criterion_main!(benches);
