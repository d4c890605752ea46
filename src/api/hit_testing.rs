use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::grid::GridView;
use crate::render::Renderer;

use super::PlotGridEngine;

/// Pointer distance within which a plotted point counts as hit.
pub const HIT_TEST_RADIUS_PX: f64 = 12.0;

/// Nearest plotted point to a queried pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestMatch {
    pub series_index: usize,
    pub point_index: usize,
    pub x_px: f64,
    pub y_px: f64,
    pub distance_px: f64,
}

/// Pixel position of one plotted point, recorded while the last frame was
/// built.
#[derive(Debug, Clone, Copy)]
pub(super) struct HitRegion {
    pub(super) series_index: usize,
    pub(super) point_index: usize,
    pub(super) x_px: f64,
    pub(super) y_px: f64,
}

impl<G: GridView, R: Renderer> PlotGridEngine<G, R> {
    /// Resolves a pointer position against the points plotted by the last
    /// rendered frame.
    ///
    /// Returns the nearest point within [`HIT_TEST_RADIUS_PX`], or `None` when
    /// nothing is in reach. Positions are frame pixels, so hosts pass the same
    /// coordinates they received from their pointer events.
    pub fn hit_test(&self, x_px: f64, y_px: f64) -> Option<HitTestMatch> {
        if !x_px.is_finite() || !y_px.is_finite() {
            return None;
        }
        let mut candidates: SmallVec<[(OrderedFloat<f64>, HitTestMatch); 4]> = SmallVec::new();
        for region in &self.core.hit_regions {
            let distance = ((region.x_px - x_px).powi(2) + (region.y_px - y_px).powi(2)).sqrt();
            if distance <= HIT_TEST_RADIUS_PX {
                candidates.push((
                    OrderedFloat(distance),
                    HitTestMatch {
                        series_index: region.series_index,
                        point_index: region.point_index,
                        x_px: region.x_px,
                        y_px: region.y_px,
                        distance_px: distance,
                    },
                ));
            }
        }

        candidates
            .into_iter()
            .min_by_key(|item| item.0)
            .map(|(_, hit)| hit)
    }
}
