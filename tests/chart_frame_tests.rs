use indexmap::IndexMap;
use plotgrid_rs::api::{PlotGridEngine, PlotGridEngineConfig};
use plotgrid_rs::core::{
    CellValue, ChartStyle, Color, ColorTarget, PlotKinds, SMOOTH_SAMPLE_COUNT, Viewport,
    default_line_color, default_point_color,
};
use plotgrid_rs::grid::NullGridView;
use plotgrid_rs::render::{LinePrimitive, NullRenderer, RenderFrame};

fn engine_styled(
    style: ChartStyle,
    plot_kinds: PlotKinds,
) -> PlotGridEngine<NullGridView, NullRenderer> {
    let config = PlotGridEngineConfig::new(Viewport::new(800, 600))
        .with_style(style)
        .with_plot_kinds(plot_kinds);
    PlotGridEngine::new(NullGridView::default(), NullRenderer::default(), config)
        .expect("engine init")
}

fn bare_style() -> ChartStyle {
    ChartStyle::default().with_legend(false)
}

fn numbers(values: &[f64]) -> Vec<CellValue> {
    values.iter().copied().map(CellValue::Number).collect()
}

fn labels(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|text| CellValue::Label((*text).to_owned()))
        .collect()
}

fn load_one_series(
    engine: &mut PlotGridEngine<NullGridView, NullRenderer>,
    x: Vec<CellValue>,
    y: Vec<CellValue>,
) {
    let mut columns = IndexMap::new();
    columns.insert("revenue".to_owned(), y);
    engine.replace_from_columns("month", x, columns).expect("replace");
}

/// Data strokes are the only lines drawn at the chart-wide line width, so the
/// width singles them out among grid, border, and tick lines.
fn data_lines<'a>(frame: &'a RenderFrame, style: &ChartStyle) -> Vec<&'a LinePrimitive> {
    frame
        .lines
        .iter()
        .filter(|line| line.stroke_width == style.line_width)
        .collect()
}

#[test]
fn an_empty_store_renders_the_placeholder() {
    let mut engine = engine_styled(ChartStyle::default(), PlotKinds::default());
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "No data to plot");
    assert!(frame.lines.is_empty());
    assert!(frame.markers.is_empty());
}

#[test]
fn tiny_viewports_fall_back_to_the_placeholder() {
    let mut engine = engine_styled(ChartStyle::default(), PlotKinds::default());
    load_one_series(&mut engine, numbers(&[1.0, 2.0]), numbers(&[10.0, 20.0]));
    engine.set_viewport(Viewport::new(90, 600)).expect("viewport");

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "No data to plot");
}

#[test]
fn non_numeric_y_everywhere_shows_the_placeholder() {
    let mut engine = engine_styled(ChartStyle::default(), PlotKinds::default());
    load_one_series(
        &mut engine,
        numbers(&[1.0, 2.0]),
        labels(&["up", "down"]),
    );

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.texts[0].text, "No data to plot");
}

#[test]
fn line_segments_carry_their_gap_colors() {
    let style = bare_style();
    let mut engine = engine_styled(style.clone(), PlotKinds::default());
    load_one_series(
        &mut engine,
        numbers(&[1.0, 2.0, 3.0]),
        numbers(&[10.0, 20.0, 30.0]),
    );
    let red = Color::rgb(0xff, 0x00, 0x00);
    engine
        .set_point_color(0, 2, red, ColorTarget::IncomingSegment)
        .expect("recolor");

    let frame = engine.build_render_frame().expect("frame");
    let segments = data_lines(&frame, &style);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].color, default_line_color());
    assert_eq!(segments[1].color, red);
}

#[test]
fn smooth_mode_resamples_the_series() {
    let style = bare_style();
    let mut engine = engine_styled(style.clone(), PlotKinds::default().with_smooth(true));
    load_one_series(
        &mut engine,
        numbers(&[1.0, 2.0, 3.0, 4.0]),
        numbers(&[10.0, 30.0, 20.0, 40.0]),
    );

    let frame = engine.build_render_frame().expect("frame");
    let segments = data_lines(&frame, &style);
    assert_eq!(segments.len(), SMOOTH_SAMPLE_COUNT - 1);
    assert!(
        segments
            .iter()
            .all(|line| line.color == default_line_color()),
        "the smoothed curve uses the series primary color"
    );
}

#[test]
fn label_series_are_skipped_by_plot_passes() {
    let style = bare_style();
    let mut engine = engine_styled(style.clone(), PlotKinds::default());
    let mut columns = IndexMap::new();
    columns.insert("revenue".to_owned(), numbers(&[10.0, 20.0, 30.0]));
    columns.insert("notes".to_owned(), labels(&["ok", "dip", "peak"]));
    engine
        .replace_from_columns("month", numbers(&[1.0, 2.0, 3.0]), columns)
        .expect("replace");

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(
        data_lines(&frame, &style).len(),
        2,
        "only the numeric series contributes segments"
    );
}

#[test]
fn scatter_markers_take_per_point_colors() {
    let kinds = PlotKinds::default().with_line(false).with_scatter(true);
    let mut engine = engine_styled(bare_style(), kinds);
    load_one_series(
        &mut engine,
        numbers(&[1.0, 2.0, 3.0]),
        numbers(&[10.0, 20.0, 30.0]),
    );
    let green = Color::rgb(0x00, 0x80, 0x00);
    engine
        .set_point_color(0, 1, green, ColorTarget::Point)
        .expect("recolor");

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.markers.len(), 3);
    assert_eq!(frame.markers[0].fill_color, default_point_color());
    assert_eq!(frame.markers[1].fill_color, green);
    assert!(data_lines(&frame, &bare_style()).is_empty());
}

#[test]
fn bars_stand_on_the_zero_baseline() {
    let kinds = PlotKinds::default().with_line(false).with_bar(true);
    let mut engine = engine_styled(bare_style(), kinds);
    load_one_series(&mut engine, numbers(&[1.0, 2.0]), numbers(&[5.0, -3.0]));

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.rects.len(), 3, "background plus one bar per row");

    let positive = &frame.rects[1];
    let negative = &frame.rects[2];
    assert!(
        (positive.y + positive.height - negative.y).abs() < 1e-9,
        "both bars meet at the zero baseline"
    );
    assert!(negative.y > 40.0 && negative.y < 548.0, "the baseline is on screen");
}

#[test]
fn box_mode_suppresses_the_point_passes() {
    let kinds = PlotKinds::default().with_scatter(true).with_box_plot(true);
    let style = bare_style();
    let mut engine = engine_styled(style.clone(), kinds);
    let mut columns = IndexMap::new();
    columns.insert("a".to_owned(), numbers(&[1.0, 2.0, 3.0, 4.0]));
    columns.insert("b".to_owned(), numbers(&[10.0, 12.0, 14.0, 16.0]));
    engine
        .replace_from_columns("t", numbers(&[1.0, 2.0, 3.0, 4.0]), columns)
        .expect("replace");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.markers.is_empty(), "no scatter markers in box mode");
    assert_eq!(frame.rects.len(), 3, "background plus one quartile box per series");

    let box_lines = data_lines(&frame, &style);
    assert_eq!(box_lines.len(), 10, "stem, stem, cap, cap, median per series");
    let horizontal = box_lines.iter().filter(|line| line.y1 == line.y2).count();
    let vertical = box_lines.iter().filter(|line| line.x1 == line.x2).count();
    assert_eq!(horizontal, 6);
    assert_eq!(vertical, 4);

    let name_texts = frame.texts.iter().filter(|text| text.text == "a").count();
    assert_eq!(name_texts, 1, "series names label the box positions");
    assert!(engine.hit_test(400.0, 300.0).is_none(), "box mode records no hit regions");
}

#[test]
fn quartile_boxes_follow_the_sorted_values() {
    let kinds = PlotKinds::default().with_box_plot(true);
    let mut engine = engine_styled(bare_style(), kinds);
    load_one_series(
        &mut engine,
        numbers(&[1.0, 2.0, 3.0, 4.0]),
        numbers(&[4.0, 1.0, 3.0, 2.0]),
    );

    let frame = engine.build_render_frame().expect("frame");
    let quartile_box = &frame.rects[1];
    assert!(quartile_box.height > 0.0);
    assert_eq!(quartile_box.border_color, default_line_color());

    // median of 1..4 sits exactly between the box edges
    let median_line = frame
        .lines
        .iter()
        .find(|line| line.y1 == line.y2 && line.x1 == quartile_box.x)
        .expect("median line");
    let center = quartile_box.y + quartile_box.height * 0.5;
    assert!((median_line.y1 - center).abs() < 1e-9);
}

#[test]
fn categorical_x_cells_become_tick_labels() {
    let mut engine = engine_styled(bare_style(), PlotKinds::default());
    load_one_series(
        &mut engine,
        labels(&["alpha", "beta", "gamma"]),
        numbers(&[10.0, 20.0, 30.0]),
    );

    let frame = engine.build_render_frame().expect("frame");
    for label in ["alpha", "beta", "gamma"] {
        assert_eq!(
            frame.texts.iter().filter(|text| text.text == label).count(),
            1,
            "{label} labels its row position"
        );
    }
}

#[test]
fn data_labels_follow_pinned_annotations() {
    let style = bare_style().with_data_labels(true);
    let mut engine = engine_styled(style, PlotKinds::default());
    load_one_series(
        &mut engine,
        numbers(&[1.0, 2.0, 3.0]),
        numbers(&[10.0, 20.0, 30.0]),
    );
    engine
        .set_annotation_position(0, 1, 333.5, 111.25)
        .expect("annotation");

    let frame = engine.build_render_frame().expect("frame");
    let pinned = frame
        .texts
        .iter()
        .find(|text| text.text == "2.00, 20.00")
        .expect("data label for the annotated point");
    assert_eq!(pinned.x, 333.5);
    assert_eq!(pinned.y, 111.25);
    assert!(frame.texts.iter().any(|text| text.text == "1.00, 10.00"));

    load_one_series(&mut engine, numbers(&[1.0]), numbers(&[10.0]));
    assert_eq!(
        engine.annotation_position(0, 1),
        None,
        "replacing the dataset drops pinned labels"
    );
}

#[test]
fn the_legend_lists_named_series() {
    let style = ChartStyle::default();
    let mut engine = engine_styled(style, PlotKinds::default());
    let mut columns = IndexMap::new();
    columns.insert("revenue".to_owned(), numbers(&[10.0, 20.0]));
    columns.insert("cost".to_owned(), numbers(&[4.0, 5.0]));
    engine
        .replace_from_columns("month", numbers(&[1.0, 2.0]), columns)
        .expect("replace");

    let frame = engine.build_render_frame().expect("frame");
    for name in ["revenue", "cost"] {
        assert_eq!(
            frame.texts.iter().filter(|text| text.text == name).count(),
            1,
            "{name} appears in the legend"
        );
    }
}

#[test]
fn chrome_labels_render_when_set() {
    let style = bare_style()
        .with_title("Quarterly report")
        .with_x_label("Month")
        .with_y_label("Revenue");
    let mut engine = engine_styled(style, PlotKinds::default());
    load_one_series(&mut engine, numbers(&[1.0, 2.0]), numbers(&[10.0, 20.0]));

    let frame = engine.build_render_frame().expect("frame");
    for text in ["Quarterly report", "Month", "Revenue"] {
        assert!(
            frame.texts.iter().any(|candidate| candidate.text == text),
            "{text} missing from the frame"
        );
    }
}
