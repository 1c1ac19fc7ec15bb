use anyhow::{Result, bail};
use log::debug;

use crate::error::WithinError;
use crate::geometry::Coordinate;
use crate::geometry::geo_traits::Envelope;
use crate::geometry::primitives::Rect;
use crate::robustness::recalculate::Recalculate;
use crate::robustness::{NoRescale, RescalePolicy, RescaleStrategy};
use crate::util::{RescaleConfig, Rounding};

/// Selects the rescale policy of a coordinate type at compile time.
///
/// Floating point coordinates are rescaled onto an `i64` grid,
/// integral coordinates are used as they are.
pub trait RobustPolicy<const D: usize>: Coordinate {
    type Policy: RescalePolicy<Self, D, Robust = <Self as Coordinate>::Robust>;
}

impl<const D: usize> RobustPolicy<D> for f32 {
    type Policy = RescaleStrategy<f32, D>;
}

impl<const D: usize> RobustPolicy<D> for f64 {
    type Policy = RescaleStrategy<f64, D>;
}

impl<const D: usize> RobustPolicy<D> for i32 {
    type Policy = NoRescale;
}

impl<const D: usize> RobustPolicy<D> for i64 {
    type Policy = NoRescale;
}

/// Union of the envelopes of all `geometries`.
/// Fails with [`WithinError::EmptyGeometry`] if none of them holds a point.
pub fn envelope_of<T: Coordinate, const D: usize>(geometries: &[&dyn Envelope<T, D>]) -> Result<Rect<T, D>> {
    let envelope = geometries
        .iter()
        .filter_map(|g| g.envelope())
        .reduce(Rect::bounding_rect);

    match envelope {
        Some(envelope) => Ok(envelope),
        None => bail!(WithinError::EmptyGeometry),
    }
}

/// Rescale policy of coordinate type `T`, covering all `geometries`.
pub fn get_rescale_policy<T, const D: usize>(
    geometries: &[&dyn Envelope<T, D>],
    config: &RescaleConfig,
) -> Result<T::Policy>
where
    T: RobustPolicy<D>,
{
    <T::Policy as RescalePolicy<T, D>>::from_geometries(geometries, config)
}

/// Rescale policy covering a single geometry, with the default configuration.
pub fn get_rescale_policy1<T, const D: usize, G>(g: &G) -> Result<T::Policy>
where
    T: RobustPolicy<D>,
    G: Envelope<T, D>,
{
    get_rescale_policy(&[g as &dyn Envelope<T, D>], &RescaleConfig::default())
}

/// Rescale policy covering two geometries, with the default configuration.
pub fn get_rescale_policy2<T, const D: usize, G1, G2>(g1: &G1, g2: &G2) -> Result<T::Policy>
where
    T: RobustPolicy<D>,
    G1: Envelope<T, D>,
    G2: Envelope<T, D>,
{
    get_rescale_policy(
        &[g1 as &dyn Envelope<T, D>, g2 as &dyn Envelope<T, D>],
        &RescaleConfig::default(),
    )
}

/// Maps every geometry in `geometries` onto one shared robust grid, configured by `config`
/// (usually [`RescaleConfig::zoom`]). Integral coordinates are copied unchanged.
///
/// The output keeps the order and shape of the input.
pub fn zoom_to_robust<T, G>(geometries: &[G], config: &RescaleConfig) -> Result<Vec<G::Output>>
where
    T: RobustPolicy<2>,
    G: Envelope<T, 2> + Recalculate<T::Policy>,
{
    let envelopes = geometries
        .iter()
        .map(|g| g as &dyn Envelope<T, 2>)
        .collect::<Vec<_>>();
    let policy = get_rescale_policy(&envelopes, config)?;
    debug!("[RS] zooming {} geometries onto a range of {}", geometries.len(), config.range);

    geometries.iter().map(|g| g.recalculate(&policy)).collect()
}

/// Maps two geometries onto one shared robust grid, using the exact (unrounded) zoom multiplier.
pub fn zoom_to_robust2<T, G1, G2>(g1: &G1, g2: &G2) -> Result<(G1::Output, G2::Output)>
where
    T: RobustPolicy<2>,
    G1: Envelope<T, 2> + Recalculate<T::Policy>,
    G2: Envelope<T, 2> + Recalculate<T::Policy>,
{
    let config = RescaleConfig {
        rounding: Rounding::Exact,
        ..RescaleConfig::zoom()
    };
    let policy = get_rescale_policy(&[g1 as &dyn Envelope<T, 2>, g2 as &dyn Envelope<T, 2>], &config)?;
    Ok((g1.recalculate(&policy)?, g2.recalculate(&policy)?))
}
