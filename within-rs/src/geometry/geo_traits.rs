use anyhow::Result;

use crate::geometry::Coordinate;
use crate::geometry::geo_enums::{GeoKind, GeoPosition};
use crate::geometry::primitives::{Point, Rect};
use crate::within::Strategy;

/// Trait for types that have an axis-aligned bounding box.
pub trait Envelope<T: Coordinate, const D: usize> {
    /// Smallest box covering the geometry, `None` if the geometry holds no points
    fn envelope(&self) -> Option<Rect<T, D>>;
}

/// Trait for types that can report which [`GeoKind`] they are.
pub trait GeoKinded {
    fn kind(&self) -> GeoKind;
}

/// Trait for geometries that can locate a point relative to themselves.
pub trait PointInGeometry<T: Coordinate> {
    /// Position of `point` relative to `self`.
    /// Fails when `strategy` cannot be used for this kind of geometry.
    fn position_of(&self, point: &Point<T>, strategy: &Strategy) -> Result<GeoPosition>;
}
