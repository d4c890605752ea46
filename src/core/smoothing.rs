use ordered_float::OrderedFloat;

/// Number of evaluation samples per smoothed series.
pub const SMOOTH_SAMPLE_COUNT: usize = 300;

/// One fully numeric point fed to or produced by the smoother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Monotone cubic (Fritsch-Carlson) resampling of one series.
///
/// The input is sorted by x and exact duplicate x values are averaged before
/// fitting, so the interpolant always sees strictly increasing knots. Fewer
/// than two distinct knots fall back to the prepared input unchanged. The
/// curve passes through every knot and never overshoots locally monotone
/// data.
#[must_use]
pub fn smooth_series(points: &[SamplePoint]) -> Vec<SamplePoint> {
    let knots = prepare_knots(points);
    if knots.len() < 2 {
        return knots;
    }

    let xs: Vec<f64> = knots.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = knots.iter().map(|point| point.y).collect();
    let slopes = monotone_slopes(&xs, &ys);

    let x_start = xs[0];
    let x_end = xs[xs.len() - 1];
    let step_count = (SMOOTH_SAMPLE_COUNT - 1) as f64;
    let mut samples = Vec::with_capacity(SMOOTH_SAMPLE_COUNT);
    let mut segment = 0usize;
    for index in 0..SMOOTH_SAMPLE_COUNT {
        // exact endpoints keep the resampled curve pinned to the data extent
        let x = if index == SMOOTH_SAMPLE_COUNT - 1 {
            x_end
        } else {
            x_start + (x_end - x_start) * index as f64 / step_count
        };
        while segment + 2 < xs.len() && xs[segment + 1] < x {
            segment += 1;
        }
        let y = hermite(
            x,
            xs[segment],
            xs[segment + 1],
            ys[segment],
            ys[segment + 1],
            slopes[segment],
            slopes[segment + 1],
        );
        samples.push(SamplePoint::new(x, y));
    }
    samples
}

/// Drops non-finite points, sorts by x, and averages duplicate x runs.
fn prepare_knots(points: &[SamplePoint]) -> Vec<SamplePoint> {
    let mut sorted: Vec<SamplePoint> = points
        .iter()
        .copied()
        .filter(|point| point.x.is_finite() && point.y.is_finite())
        .collect();
    sorted.sort_by_key(|point| OrderedFloat(point.x));

    let mut averaged = Vec::with_capacity(sorted.len());
    let mut index = 0;
    while index < sorted.len() {
        let x = sorted[index].x;
        let mut sum = 0.0;
        let mut count = 0usize;
        while index < sorted.len() && sorted[index].x == x {
            sum += sorted[index].y;
            count += 1;
            index += 1;
        }
        averaged.push(SamplePoint::new(x, sum / count as f64));
    }
    averaged
}

/// Fritsch-Carlson knot slopes; requires strictly increasing `xs` of len >= 2.
fn monotone_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let gaps: Vec<f64> = xs.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let deltas: Vec<f64> = gaps
        .iter()
        .enumerate()
        .map(|(index, gap)| (ys[index + 1] - ys[index]) / gap)
        .collect();
    if n == 2 {
        return vec![deltas[0], deltas[0]];
    }

    let mut slopes = vec![0.0; n];
    for index in 1..n - 1 {
        let left = deltas[index - 1];
        let right = deltas[index];
        if sign(left) * sign(right) <= 0 {
            slopes[index] = 0.0;
        } else {
            // weighted harmonic mean keeps the interpolant monotone
            let weight_left = 2.0 * gaps[index] + gaps[index - 1];
            let weight_right = gaps[index] + 2.0 * gaps[index - 1];
            slopes[index] = (weight_left + weight_right) / (weight_left / left + weight_right / right);
        }
    }
    slopes[0] = endpoint_slope(gaps[0], gaps[1], deltas[0], deltas[1]);
    slopes[n - 1] = endpoint_slope(
        gaps[n - 2],
        gaps[n - 3],
        deltas[n - 2],
        deltas[n - 3],
    );
    slopes
}

/// One-sided three-point slope estimate with monotonicity clamps.
fn endpoint_slope(gap_near: f64, gap_far: f64, delta_near: f64, delta_far: f64) -> f64 {
    let slope = ((2.0 * gap_near + gap_far) * delta_near - gap_near * delta_far)
        / (gap_near + gap_far);
    if sign(slope) != sign(delta_near) {
        0.0
    } else if sign(delta_near) != sign(delta_far) && slope.abs() > 3.0 * delta_near.abs() {
        3.0 * delta_near
    } else {
        slope
    }
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Cubic Hermite evaluation on one knot interval.
fn hermite(x: f64, x0: f64, x1: f64, y0: f64, y1: f64, slope0: f64, slope1: f64) -> f64 {
    let gap = x1 - x0;
    let t = (x - x0) / gap;
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * y0 + h10 * gap * slope0 + h01 * y1 + h11 * gap * slope1
}

#[cfg(test)]
mod tests {
    use super::{SMOOTH_SAMPLE_COUNT, SamplePoint, smooth_series};

    #[test]
    fn single_knot_passes_through_unchanged() {
        let smoothed = smooth_series(&[SamplePoint::new(2.0, 5.0)]);
        assert_eq!(smoothed, vec![SamplePoint::new(2.0, 5.0)]);
    }

    #[test]
    fn duplicate_x_values_collapse_to_their_average() {
        let smoothed = smooth_series(&[SamplePoint::new(1.0, 2.0), SamplePoint::new(1.0, 4.0)]);
        assert_eq!(smoothed, vec![SamplePoint::new(1.0, 3.0)]);
    }

    #[test]
    fn two_knots_resample_linearly() {
        let smoothed = smooth_series(&[SamplePoint::new(0.0, 0.0), SamplePoint::new(10.0, 10.0)]);
        assert_eq!(smoothed.len(), SMOOTH_SAMPLE_COUNT);
        assert_eq!(smoothed[0], SamplePoint::new(0.0, 0.0));
        assert_eq!(smoothed[SMOOTH_SAMPLE_COUNT - 1], SamplePoint::new(10.0, 10.0));
        for sample in &smoothed {
            assert!((sample.y - sample.x).abs() < 1e-9, "sample {sample:?} is off the line");
        }
    }

    #[test]
    fn monotone_input_never_overshoots() {
        let knots = [
            SamplePoint::new(0.0, 0.0),
            SamplePoint::new(1.0, 0.1),
            SamplePoint::new(2.0, 9.9),
            SamplePoint::new(3.0, 10.0),
        ];
        let smoothed = smooth_series(&knots);
        for pair in smoothed.windows(2) {
            assert!(pair[1].y >= pair[0].y - 1e-9, "curve dipped at {pair:?}");
        }
        for sample in &smoothed {
            assert!((-1e-9..=10.0 + 1e-9).contains(&sample.y));
        }
    }

    #[test]
    fn non_finite_points_are_dropped_before_fitting() {
        let smoothed = smooth_series(&[
            SamplePoint::new(f64::NAN, 1.0),
            SamplePoint::new(0.0, f64::INFINITY),
            SamplePoint::new(3.0, 3.0),
        ]);
        assert_eq!(smoothed, vec![SamplePoint::new(3.0, 3.0)]);
    }
}
