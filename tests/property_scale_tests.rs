use plotgrid_rs::core::{LinearScale, SamplePoint, scale_from_extent, smooth_series};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let value = domain_start + value_factor * span;
        let scale = LinearScale::new(domain_start, domain_start + span).expect("valid scale");

        let px = scale.to_pixel(value, 70.0, 776.0);
        let recovered = scale.from_pixel(px, 70.0, 776.0);

        prop_assert!((recovered - value).abs() <= span * 1e-9 + 1e-9);
    }

    #[test]
    fn inverted_axis_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let value = domain_start + value_factor * span;
        let scale = LinearScale::new(domain_start, domain_start + span).expect("valid scale");

        // y axes hand the pixel span over inverted
        let px = scale.to_pixel(value, 548.0, 40.0);
        let recovered = scale.from_pixel(px, 548.0, 40.0);

        prop_assert!((recovered - value).abs() <= span * 1e-9 + 1e-9);
    }

    #[test]
    fn extent_scales_always_contain_their_inputs(
        min in -1_000_000.0f64..1_000_000.0,
        extra in 0.0f64..1_000_000.0
    ) {
        let max = min + extra;
        let scale = scale_from_extent(min, max).expect("scale");
        let (start, end) = scale.domain();

        prop_assert!(start <= min);
        prop_assert!(end >= max);
        prop_assert!(start < end, "even a flat extent widens into a usable domain");
    }

    #[test]
    fn margins_preserve_the_domain_midpoint(
        start in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        ratio in 0.0f64..0.5
    ) {
        let scale = LinearScale::new(start, start + span).expect("valid scale");
        let padded = scale.with_margin(ratio);

        let (before_start, before_end) = scale.domain();
        let (after_start, after_end) = padded.domain();
        let mid_before = (before_start + before_end) * 0.5;
        let mid_after = (after_start + after_end) * 0.5;

        prop_assert!((mid_before - mid_after).abs() <= 1e-6);
        prop_assert!(after_start <= before_start && after_end >= before_end);
    }

    #[test]
    fn smoothing_stays_inside_the_data_envelope(
        ys in prop::collection::vec(-1_000.0f64..1_000.0, 2..12)
    ) {
        let knots: Vec<SamplePoint> = ys
            .iter()
            .enumerate()
            .map(|(index, &y)| SamplePoint::new(index as f64, y))
            .collect();
        let samples = smooth_series(&knots);

        let min = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for sample in &samples {
            prop_assert!(
                sample.y >= min - 1e-6 && sample.y <= max + 1e-6,
                "sample ({}, {}) left the envelope [{min}, {max}]",
                sample.x,
                sample.y
            );
        }
    }

    #[test]
    fn smoothing_pins_the_endpoints(
        ys in prop::collection::vec(-1_000.0f64..1_000.0, 2..12)
    ) {
        let knots: Vec<SamplePoint> = ys
            .iter()
            .enumerate()
            .map(|(index, &y)| SamplePoint::new(index as f64, y))
            .collect();
        let samples = smooth_series(&knots);

        let first = samples.first().expect("samples");
        let last = samples.last().expect("samples");
        prop_assert!((first.y - ys[0]).abs() <= 1e-9);
        prop_assert!((last.y - ys[ys.len() - 1]).abs() <= 1e-9);
    }
}
