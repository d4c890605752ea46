use serde::{Deserialize, Serialize};

use crate::error::{PlotGridError, PlotGridResult};

/// Pixel dimensions of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Linear mapping between a data domain and a pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    /// The domain must be finite and strictly ascending.
    pub fn new(domain_start: f64, domain_end: f64) -> PlotGridResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_end <= domain_start {
            return Err(PlotGridError::InvalidData(format!(
                "scale domain must be finite and ascending, got [{domain_start}, {domain_end}]"
            )));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value into `[pixel_start, pixel_end]`.
    ///
    /// `pixel_end < pixel_start` yields an inverted axis, which is how the
    /// y axis maps onto a surface whose pixel rows grow downward.
    #[must_use]
    pub fn to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        pixel_start + normalized * (pixel_end - pixel_start)
    }

    /// Inverse of [`to_pixel`](Self::to_pixel).
    #[must_use]
    pub fn from_pixel(self, pixel: f64, pixel_start: f64, pixel_end: f64) -> f64 {
        let pixel_span = pixel_end - pixel_start;
        if pixel_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - pixel_start) / pixel_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Expands the domain by `ratio` of its span on each side.
    #[must_use]
    pub fn with_margin(self, ratio: f64) -> Self {
        let padding = (self.domain_end - self.domain_start) * ratio;
        Self {
            domain_start: self.domain_start - padding,
            domain_end: self.domain_end + padding,
        }
    }
}

/// Builds a scale from a data extent, widening degenerate single-value
/// extents so a flat column still gets a usable axis.
pub fn scale_from_extent(min: f64, max: f64) -> PlotGridResult<LinearScale> {
    if min == max {
        LinearScale::new(min - 1.0, max + 1.0)
    } else {
        LinearScale::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, scale_from_extent};

    #[test]
    fn maps_domain_endpoints_to_pixel_endpoints() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        assert_eq!(scale.to_pixel(0.0, 100.0, 500.0), 100.0);
        assert_eq!(scale.to_pixel(10.0, 100.0, 500.0), 500.0);
        assert_eq!(scale.to_pixel(5.0, 100.0, 500.0), 300.0);
    }

    #[test]
    fn inverted_pixel_span_flips_the_axis() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        assert_eq!(scale.to_pixel(0.0, 400.0, 40.0), 400.0);
        assert_eq!(scale.to_pixel(10.0, 400.0, 40.0), 40.0);
        assert_eq!(scale.from_pixel(400.0, 400.0, 40.0), 0.0);
    }

    #[test]
    fn rejects_non_ascending_or_non_finite_domains() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::new(2.0, 1.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());
        assert!(LinearScale::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn degenerate_extent_is_widened() {
        let scale = scale_from_extent(5.0, 5.0).expect("scale");
        assert_eq!(scale.domain(), (4.0, 6.0));
    }

    #[test]
    fn margin_expands_both_sides() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale").with_margin(0.1);
        assert_eq!(scale.domain(), (-1.0, 11.0));
    }
}
