use anyhow::{Result, bail};

use crate::error::WithinError;
use crate::geometry::geo_traits::GeoKinded;
use crate::geometry::primitives::{Linestring, Point, Polygon, Rect, Ring};
use crate::geometry::{Geometry, GeometryRef};
use crate::robustness::RobustPolicy;
use crate::within::{Strategy, Within};

/// Resolves the concrete kinds of both operands and forwards to the typed implementation.
fn dispatch<T: RobustPolicy<2>>(g1: GeometryRef<'_, T>, g2: GeometryRef<'_, T>, strategy: &Strategy) -> Result<bool> {
    match g1 {
        GeometryRef::Point(p) => match g2 {
            GeometryRef::Box(b) => p.within_with(b, strategy),
            GeometryRef::Ring(r) => p.within_with(r, strategy),
            GeometryRef::Polygon(poly) => p.within_with(poly, strategy),
            GeometryRef::Linestring(ls) => p.within_with(ls, strategy),
            GeometryRef::Point(_) => not_implemented(g1, g2),
        },
        GeometryRef::Box(b1) => match g2 {
            GeometryRef::Box(b2) => b1.within_with(b2, strategy),
            _ => not_implemented(g1, g2),
        },
        GeometryRef::Linestring(ls1) => match g2 {
            GeometryRef::Linestring(ls2) => ls1.within_with(ls2, strategy),
            GeometryRef::Ring(r) => ls1.within_with(r, strategy),
            GeometryRef::Polygon(poly) => ls1.within_with(poly, strategy),
            GeometryRef::Point(_) | GeometryRef::Box(_) => not_implemented(g1, g2),
        },
        GeometryRef::Ring(_) | GeometryRef::Polygon(_) => not_implemented(g1, g2),
    }
}

fn not_implemented<T: RobustPolicy<2>>(g1: GeometryRef<'_, T>, g2: GeometryRef<'_, T>) -> Result<bool> {
    bail!(WithinError::NotImplemented {
        kind1: g1.kind(),
        kind2: g2.kind(),
    })
}

impl<T: RobustPolicy<2>> Within<GeometryRef<'_, T>> for GeometryRef<'_, T> {
    fn within_with(&self, other: &GeometryRef<'_, T>, strategy: &Strategy) -> Result<bool> {
        dispatch(*self, *other, strategy)
    }
}

impl<T: RobustPolicy<2>> Within<Geometry<T>> for Geometry<T> {
    fn within_with(&self, other: &Geometry<T>, strategy: &Strategy) -> Result<bool> {
        dispatch(self.as_ref(), other.as_ref(), strategy)
    }
}

macro_rules! impl_within_variant {
    ($($geom:ident),*) => {$(
        impl<T: RobustPolicy<2>> Within<$geom<T>> for Geometry<T> {
            fn within_with(&self, other: &$geom<T>, strategy: &Strategy) -> Result<bool> {
                dispatch(self.as_ref(), GeometryRef::from(other), strategy)
            }
        }

        impl<T: RobustPolicy<2>> Within<Geometry<T>> for $geom<T> {
            fn within_with(&self, other: &Geometry<T>, strategy: &Strategy) -> Result<bool> {
                dispatch(GeometryRef::from(self), other.as_ref(), strategy)
            }
        }
    )*};
}

impl_within_variant!(Point, Rect, Ring, Polygon, Linestring);
