use tracing::warn;

/// Caps runaway tick generation when an interval is tiny relative to the
/// plotted span.
const MAX_TICKS_PER_AXIS: usize = 512;

pub(super) fn ticks_at_interval(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || !interval.is_finite() {
        return Vec::new();
    }
    if interval <= 0.0 || max < min {
        return Vec::new();
    }
    if (max - min) / interval > MAX_TICKS_PER_AXIS as f64 {
        warn!(
            min,
            max, interval, "tick interval too fine for the plotted span, skipping ticks"
        );
        return Vec::new();
    }

    let epsilon = interval * 1e-9;
    let first = (min / interval).ceil() * interval;
    let mut ticks = Vec::new();
    for step in 0..=MAX_TICKS_PER_AXIS {
        let value = first + step as f64 * interval;
        if value > max + epsilon {
            break;
        }
        // Multiples straddling the origin come out as -0.0 otherwise.
        ticks.push(if value.abs() < epsilon { 0.0 } else { value });
    }
    ticks
}

pub(super) fn minor_ticks_at_interval(
    min: f64,
    max: f64,
    minor_interval: f64,
    major_interval: f64,
) -> Vec<f64> {
    let tolerance = minor_interval * 1e-6;
    ticks_at_interval(min, max, minor_interval)
        .into_iter()
        .filter(|value| !is_near_multiple(*value, major_interval, tolerance))
        .collect()
}

pub(super) fn format_decimal(value: f64, decimals: u8) -> String {
    format!("{value:.precision$}", precision = decimals as usize)
}

fn is_near_multiple(value: f64, interval: f64, tolerance: f64) -> bool {
    if !interval.is_finite() || interval <= 0.0 {
        return false;
    }
    let nearest = (value / interval).round() * interval;
    (value - nearest).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::{format_decimal, minor_ticks_at_interval, ticks_at_interval};

    #[test]
    fn ticks_cover_both_aligned_endpoints() {
        let ticks = ticks_at_interval(0.0, 10.0, 2.0);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn ticks_start_at_the_first_multiple_inside_the_span() {
        let ticks = ticks_at_interval(0.3, 1.0, 0.25);
        assert_eq!(ticks.len(), 3);
        assert!((ticks[0] - 0.5).abs() < 1e-12);
        assert!((ticks[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ticks_spanning_the_origin_include_exact_zero() {
        let ticks = ticks_at_interval(-1.0, 1.0, 0.5);
        let origin = ticks
            .iter()
            .copied()
            .find(|t| t.abs() < 1e-12)
            .expect("origin tick");
        assert!(!origin.is_sign_negative(), "origin tick must not be -0.0");
    }

    #[test]
    fn runaway_interval_yields_no_ticks() {
        let ticks = ticks_at_interval(0.0, 1_000_000.0, 1e-6);
        assert!(ticks.is_empty());
    }

    #[test]
    fn minor_ticks_skip_positions_claimed_by_major_ticks() {
        let minors = minor_ticks_at_interval(0.0, 2.0, 0.5, 1.0);
        assert_eq!(minors, vec![0.5, 1.5]);
    }

    #[test]
    fn decimal_formatting_honors_the_requested_precision() {
        assert_eq!(format_decimal(3.14159, 2), "3.14");
        assert_eq!(format_decimal(5.0, 0), "5");
    }
}
