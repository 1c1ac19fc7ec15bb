use log::error;

use crate::geometry::Coordinate;
use crate::geometry::primitives::Rect;
use crate::overlay::Turn;
use crate::robustness::{RescalePolicy, RescaleStrategy};
use crate::util::RescaleConfig;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Both corners of the envelope the strategy was built from land inside the integer range,
/// widened by whatever the rounded multiplier overshoots the exact one.
pub fn rescale_maps_envelope_into_range<T: Coordinate, const D: usize>(
    strategy: &RescaleStrategy<T, D>,
    envelope: &Rect<T, D>,
    config: &RescaleConfig,
) -> bool {
    let diff = envelope.max_extent().as_f64();
    let overshoot = (strategy.multiplier() * diff - config.range).max(0.0);
    let bound = (config.half_range() + overshoot) as i64 + 1;
    for corner in [envelope.min, envelope.max] {
        let robust = strategy.robust_point(&corner);
        if robust.coords().iter().any(|&c| c < -bound || c > bound) {
            error!("rescaled corner {robust:?} of {corner:?} exceeds +-{bound}");
            return false;
        }
    }
    true
}

/// Every turn refers to an existing segment of both inputs.
pub fn turns_reference_valid_segments(turns: &[Turn], n_segments: [usize; 2]) -> bool {
    turns.iter().all(|t| {
        t.operations
            .iter()
            .enumerate()
            .all(|(i, op)| op.seg_id.source_index == i && op.seg_id.segment_index < n_segments[i])
    })
}
