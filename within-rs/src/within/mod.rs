use anyhow::Result;

use crate::geometry::Coordinate;
use crate::geometry::geo_enums::{CoordSystem, GeoKind};
use crate::geometry::geo_traits::GeoKinded;
use crate::geometry::point_in_geometry;
use crate::geometry::primitives::{Linestring, Point, Polygon, Rect, Ring};
use crate::robustness::RobustPolicy;

mod dispatch;

/// Linestring in ring or polygon containment, decided on the integer grid
pub mod linear_areal;

/// Linestring in linestring containment, decided from the turns between both
pub mod linear_linear;

mod strategy;

#[doc(inline)]
pub use strategy::{Strategy, default_strategy};

/// Strict containment of `self` in `Rhs`.
///
/// Implemented for every supported pair of concrete geometry types, so unsupported pairs do not compile.
/// [`Geometry`](crate::geometry::Geometry) and [`GeometryRef`](crate::geometry::GeometryRef) implement it
/// against every kind and resolve the pair at runtime.
pub trait Within<Rhs: ?Sized> {
    /// Whether `self` lies within `other`, evaluated with `strategy`
    fn within_with(&self, other: &Rhs, strategy: &Strategy) -> Result<bool>;
}

/// Whether `g1` lies within `g2`, using the [`default_strategy`] for their kinds (cartesian coordinates).
pub fn within<G1, G2>(g1: &G1, g2: &G2) -> Result<bool>
where
    G1: Within<G2> + GeoKinded + ?Sized,
    G2: GeoKinded + ?Sized,
{
    let strategy = default_strategy(g1.kind(), g2.kind(), CoordSystem::Cartesian, CoordSystem::Cartesian)?;
    g1.within_with(g2, &strategy)
}

/// Whether `g1` lies within `g2`, using an explicit `strategy`.
pub fn within_with<G1, G2>(g1: &G1, g2: &G2, strategy: &Strategy) -> Result<bool>
where
    G1: Within<G2> + ?Sized,
    G2: ?Sized,
{
    g1.within_with(g2, strategy)
}

impl<T: Coordinate, const D1: usize, const D2: usize> Within<Rect<T, D2>> for Point<T, D1> {
    fn within_with(&self, other: &Rect<T, D2>, strategy: &Strategy) -> Result<bool> {
        strategy.point_in_box(self, other)
    }
}

impl<T: Coordinate, const D1: usize, const D2: usize> Within<Rect<T, D2>> for Rect<T, D1> {
    fn within_with(&self, other: &Rect<T, D2>, strategy: &Strategy) -> Result<bool> {
        strategy.box_in_box(self, other)
    }
}

impl<T: Coordinate> Within<Ring<T>> for Point<T> {
    fn within_with(&self, other: &Ring<T>, strategy: &Strategy) -> Result<bool> {
        strategy.ensure_supports(GeoKind::Point, GeoKind::Ring)?;
        Ok(point_in_geometry(self, other, strategy)?.is_interior())
    }
}

impl<T: Coordinate> Within<Polygon<T>> for Point<T> {
    fn within_with(&self, other: &Polygon<T>, strategy: &Strategy) -> Result<bool> {
        strategy.ensure_supports(GeoKind::Point, GeoKind::Polygon)?;
        Ok(point_in_geometry(self, other, strategy)?.is_interior())
    }
}

impl<T: Coordinate> Within<Linestring<T>> for Point<T> {
    fn within_with(&self, other: &Linestring<T>, strategy: &Strategy) -> Result<bool> {
        Ok(point_in_geometry(self, other, strategy)?.is_interior())
    }
}

impl<T: RobustPolicy<2>> Within<Linestring<T>> for Linestring<T> {
    fn within_with(&self, other: &Linestring<T>, strategy: &Strategy) -> Result<bool> {
        linear_linear::linestring_within_linestring(self, other, strategy)
    }
}

impl<T: RobustPolicy<2>> Within<Ring<T>> for Linestring<T> {
    fn within_with(&self, other: &Ring<T>, strategy: &Strategy) -> Result<bool> {
        strategy.ensure_supports(GeoKind::Linestring, GeoKind::Ring)?;
        linear_areal::linestring_within_ring(self, other, strategy)
    }
}

impl<T: RobustPolicy<2>> Within<Polygon<T>> for Linestring<T> {
    fn within_with(&self, other: &Polygon<T>, strategy: &Strategy) -> Result<bool> {
        strategy.ensure_supports(GeoKind::Linestring, GeoKind::Polygon)?;
        linear_areal::linestring_within_polygon(self, other, strategy)
    }
}
