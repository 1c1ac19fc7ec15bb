use thiserror::Error;

use crate::geometry::geo_enums::{CoordSystem, GeoKind};
use crate::within::Strategy;

/// Failures surfaced by the `within` predicate and the rescaling layer.
///
/// Public functions return [`anyhow::Result`], wrapping one of these variants.
/// Callers that need to branch on the failure can use [`anyhow::Error::downcast_ref`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WithinError {
    /// No algorithm is registered for this pair of geometry kinds.
    #[error("within is not implemented for {kind1:?} in {kind2:?}")]
    NotImplemented { kind1: GeoKind, kind2: GeoKind },

    /// The two operands have a different number of dimensions.
    #[error("dimension mismatch: {left}D vs {right}D")]
    DimensionMismatch { left: usize, right: usize },

    /// The envelope of the input has zero extent in every dimension, no scale factor can be derived.
    #[error("cannot derive a rescale factor from an envelope with zero extent")]
    DegenerateExtent,

    /// None of the inputs contains a single point.
    #[error("cannot derive a rescale policy from empty geometries")]
    EmptyGeometry,

    /// A rescaled coordinate does not fit in the robust integer type.
    #[error("rescaled coordinate {value} does not fit in the robust coordinate type")]
    Overflow { value: f64 },

    /// The output geometry handed to a recalculation is not shaped like the input.
    #[error("output geometry has {actual} points, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The explicitly supplied strategy cannot evaluate this pair of geometry kinds.
    #[error("strategy {strategy:?} cannot evaluate {kind1:?} in {kind2:?}")]
    IncompatibleStrategy {
        strategy: Strategy,
        kind1: GeoKind,
        kind2: GeoKind,
    },

    /// The operands live in different coordinate systems.
    #[error("coordinate systems do not match: {cs1:?} vs {cs2:?}")]
    IncompatibleCoordinateSystems { cs1: CoordSystem, cs2: CoordSystem },
}
