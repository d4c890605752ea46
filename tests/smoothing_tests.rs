use approx::{assert_abs_diff_eq, assert_relative_eq};
use plotgrid_rs::core::{SMOOTH_SAMPLE_COUNT, SamplePoint, smooth_series};

fn knots(points: &[(f64, f64)]) -> Vec<SamplePoint> {
    points.iter().map(|&(x, y)| SamplePoint::new(x, y)).collect()
}

#[test]
fn resamples_to_the_fixed_count_with_pinned_endpoints() {
    let samples = smooth_series(&knots(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]));

    assert_eq!(samples.len(), SMOOTH_SAMPLE_COUNT);
    assert_eq!(samples[0].x, 0.0);
    assert_abs_diff_eq!(samples[0].y, 0.0, epsilon = 1e-9);
    assert_eq!(samples[SMOOTH_SAMPLE_COUNT - 1].x, 3.0);
    assert_relative_eq!(samples[SMOOTH_SAMPLE_COUNT - 1].y, 9.0, epsilon = 1e-9);

    for pair in samples.windows(2) {
        assert!(pair[1].x > pair[0].x, "sample xs must be strictly increasing");
    }
}

#[test]
fn monotone_input_stays_monotone() {
    let samples = smooth_series(&knots(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]));
    for pair in samples.windows(2) {
        assert!(
            pair[1].y >= pair[0].y - 1e-9,
            "curve dipped between {} and {}",
            pair[0].x,
            pair[1].x
        );
    }
}

#[test]
fn never_overshoots_a_plateau() {
    let samples = smooth_series(&knots(&[(0.0, 0.0), (1.0, 10.0), (2.0, 10.0)]));
    for sample in &samples {
        assert!(sample.y <= 10.0 + 1e-9, "overshoot at x = {}", sample.x);
        assert!(sample.y >= -1e-9, "undershoot at x = {}", sample.x);
    }
}

#[test]
fn duplicate_x_knots_are_averaged() {
    let samples = smooth_series(&knots(&[(1.0, 2.0), (1.0, 4.0)]));
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0], SamplePoint::new(1.0, 3.0));
}

#[test]
fn non_finite_knots_are_dropped() {
    let samples = smooth_series(&knots(&[(0.0, 0.0), (f64::NAN, 5.0), (1.0, 1.0)]));

    assert_eq!(samples.len(), SMOOTH_SAMPLE_COUNT);
    assert_eq!(samples[0].x, 0.0);
    assert_eq!(samples[SMOOTH_SAMPLE_COUNT - 1].x, 1.0);
    let mid = samples[SMOOTH_SAMPLE_COUNT / 2];
    assert_relative_eq!(mid.y, mid.x, epsilon = 1e-9);
}

#[test]
fn unsorted_input_is_fitted_in_x_order() {
    let samples = smooth_series(&knots(&[(2.0, 4.0), (0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(samples[0].x, 0.0);
    assert_eq!(samples[SMOOTH_SAMPLE_COUNT - 1].x, 2.0);
    for pair in samples.windows(2) {
        assert!(pair[1].y >= pair[0].y - 1e-9);
    }
}

#[test]
fn flat_data_stays_flat() {
    let samples = smooth_series(&knots(&[(0.0, 7.0), (1.0, 7.0), (2.0, 7.0)]));
    for sample in &samples {
        assert_abs_diff_eq!(sample.y, 7.0, epsilon = 1e-9);
    }
}

#[test]
fn degenerate_inputs_pass_through() {
    assert!(smooth_series(&[]).is_empty());
    let single = smooth_series(&knots(&[(4.0, 2.0)]));
    assert_eq!(single, vec![SamplePoint::new(4.0, 2.0)]);
}
