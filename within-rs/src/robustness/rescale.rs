use anyhow::{Result, bail};
use log::{debug, warn};

use crate::error::WithinError;
use crate::geometry::Coordinate;
use crate::geometry::geo_traits::Envelope;
use crate::geometry::primitives::{Point, Rect};
use crate::robustness::policy::envelope_of;
use crate::util::{RescaleConfig, assertions};

/// Maps coordinates of type `T` onto the coordinate type used for robust computations.
///
/// Implemented by [`RescaleStrategy`] (floating point onto an `i64` grid)
/// and by [`NoRescale`] (identity, for coordinates that are already exact).
pub trait RescalePolicy<T: Coordinate, const D: usize>: Sized {
    /// Coordinate type produced by the policy
    type Robust: Coordinate;

    /// Builds the policy covering all `geometries`.
    fn from_geometries(geometries: &[&dyn Envelope<T, D>], config: &RescaleConfig) -> Result<Self>;

    /// Maps `value`, a coordinate along dimension `dim`.
    fn apply(&self, dim: usize, value: T) -> Self::Robust;

    /// Checked version of [`RescalePolicy::apply`], fails instead of saturating.
    fn try_apply(&self, dim: usize, value: T) -> Result<Self::Robust> {
        Ok(self.apply(dim, value))
    }

    fn robust_point(&self, point: &Point<T, D>) -> Point<Self::Robust, D> {
        Point(std::array::from_fn(|d| self.apply(d, point.get(d))))
    }
}

/// Policy for coordinates that need no rescaling: every value maps onto itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRescale;

impl<T: Coordinate, const D: usize> RescalePolicy<T, D> for NoRescale {
    type Robust = T;

    fn from_geometries(_geometries: &[&dyn Envelope<T, D>], _config: &RescaleConfig) -> Result<Self> {
        Ok(NoRescale)
    }

    #[inline(always)]
    fn apply(&self, _dim: usize, value: T) -> T {
        value
    }
}

/// Affine map from a floating point box onto a large integer range:
/// `int_min[d] + (value - fp_min[d]) * multiplier`.
///
/// The map is monotonic in every dimension, so the relative order of coordinates is preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RescaleStrategy<T, const D: usize = 2> {
    fp_min: Point<T, D>,
    int_min: Point<i64, D>,
    multiplier: f64,
}

impl<T: Coordinate, const D: usize> RescaleStrategy<T, D> {
    pub fn new(fp_min: Point<T, D>, int_min: Point<i64, D>, multiplier: f64) -> Self {
        Self {
            fp_min,
            int_min,
            multiplier,
        }
    }

    /// Maps the minimum corner of `envelope` onto `(-range/2, ..)` and scales its largest extent onto `range`.
    pub fn from_envelope(envelope: &Rect<T, D>, config: &RescaleConfig) -> Result<Self> {
        let diff = envelope.max_extent().as_f64();
        if !(diff > 0.0 && diff.is_finite()) {
            bail!(WithinError::DegenerateExtent);
        }

        let mut multiplier = config.rounding.apply(config.range / diff);
        if multiplier <= 0.0 {
            //extent exceeds the range, rounding would collapse every coordinate
            warn!("[RS] max extent {diff} exceeds range {}, using the exact multiplier", config.range);
            multiplier = config.range / diff;
        }

        let origin = -config.half_range() as i64;
        let strategy = Self::new(envelope.min, Point([origin; D]), multiplier);
        debug!("[RS] envelope: {envelope:?}, max extent: {diff}, multiplier: {multiplier}");
        debug_assert!(assertions::rescale_maps_envelope_into_range(&strategy, envelope, config));

        Ok(strategy)
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    #[inline(always)]
    fn rescaled(&self, dim: usize, value: T) -> f64 {
        let a = self.int_min.get(dim) as f64;
        let b = self.fp_min.get(dim).as_f64();
        a + (value.as_f64() - b) * self.multiplier
    }
}

impl<T: Coordinate, const D: usize> RescalePolicy<T, D> for RescaleStrategy<T, D> {
    type Robust = i64;

    fn from_geometries(geometries: &[&dyn Envelope<T, D>], config: &RescaleConfig) -> Result<Self> {
        Self::from_envelope(&envelope_of(geometries)?, config)
    }

    /// Float to integer conversion truncates towards zero and saturates at the bounds of `i64`.
    #[inline(always)]
    fn apply(&self, dim: usize, value: T) -> i64 {
        self.rescaled(dim, value) as i64
    }

    fn try_apply(&self, dim: usize, value: T) -> Result<i64> {
        let rescaled = self.rescaled(dim, value);
        if !rescaled.is_finite() || rescaled < i64::MIN as f64 || rescaled >= i64::MAX as f64 {
            bail!(WithinError::Overflow { value: rescaled });
        }
        Ok(rescaled as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_strategy() -> RescaleStrategy<f64> {
        let envelope = Rect::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        RescaleStrategy::from_envelope(&envelope, &RescaleConfig::default()).unwrap()
    }

    #[test]
    fn affine_map() {
        let s = RescaleStrategy::new(Point::new(1.0, 2.0), Point::new(-100, -100), 10.0);
        assert_eq!(s.apply(0, 1.0), -100);
        assert_eq!(s.apply(0, 3.5), -75);
        assert_eq!(s.apply(1, 2.0), -100);
        assert_eq!(s.apply(1, 12.0), 0);
    }

    #[test]
    fn envelope_spans_the_range() {
        let s = unit_strategy();
        assert_eq!(s.multiplier(), 1_000_000.0);
        assert_eq!(s.robust_point(&Point::new(0.0, 0.0)), Point::new(-5_000_000, -5_000_000));
        assert_eq!(s.robust_point(&Point::new(10.0, 5.0)), Point::new(5_000_000, 0));
    }

    #[test]
    fn order_is_preserved() {
        let s = unit_strategy();
        let values = [0.0, 1e-7, 2e-7, 0.5, 3.3333333, 3.3333334, 9.9999999, 10.0];
        for w in values.windows(2) {
            assert!(s.apply(0, w[0]) <= s.apply(0, w[1]), "{w:?}");
        }
    }

    #[test]
    fn degenerate_envelope_is_rejected() {
        let envelope = Rect::from_point(Point::new(3.0, 3.0));
        let err = RescaleStrategy::from_envelope(&envelope, &RescaleConfig::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<WithinError>(), Some(&WithinError::DegenerateExtent));
    }

    #[test]
    fn huge_extent_keeps_a_positive_multiplier() {
        let envelope = Rect::from_corners(Point::new(0.0, 0.0), Point::new(1e12, 1.0));
        let s = RescaleStrategy::from_envelope(&envelope, &RescaleConfig::default()).unwrap();
        assert!(s.multiplier() > 0.0);
        assert!(s.apply(0, 0.0) < s.apply(0, 1e12));
    }

    #[test]
    fn checked_apply_detects_overflow() {
        let s = RescaleStrategy::new(Point::new(0.0, 0.0), Point::new(0, 0), 1e10);
        assert!(s.try_apply(0, 1e3).is_ok());
        let err = s.try_apply(0, 1e12).unwrap_err();
        assert!(matches!(err.downcast_ref::<WithinError>(), Some(WithinError::Overflow { .. })));
        //the unchecked version saturates
        assert_eq!(s.apply(0, 1e12), i64::MAX);
    }

    #[test]
    fn no_rescale_is_identity() {
        let p = Point::new(7_i64, -3);
        assert_eq!(RescalePolicy::<i64, 2>::robust_point(&NoRescale, &p), p);
        assert_eq!(RescalePolicy::<f64, 2>::apply(&NoRescale, 0, 0.25), 0.25);
    }
}
