mod policy;
mod recalculate;
mod rescale;

#[doc(inline)]
pub use policy::{
    RobustPolicy, envelope_of, get_rescale_policy, get_rescale_policy1, get_rescale_policy2, zoom_to_robust,
    zoom_to_robust2,
};
#[doc(inline)]
pub use recalculate::Recalculate;
#[doc(inline)]
pub use rescale::{NoRescale, RescalePolicy, RescaleStrategy};

use crate::geometry::Coordinate;

/// Maps `value`, a coordinate along dimension `dim`, through `policy`.
#[inline(always)]
pub fn apply_rescale<T, P, const D: usize>(policy: &P, value: T, dim: usize) -> P::Robust
where
    T: Coordinate,
    P: RescalePolicy<T, D>,
{
    policy.apply(dim, value)
}
