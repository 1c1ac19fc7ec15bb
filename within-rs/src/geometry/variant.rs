use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoKind;
use crate::geometry::geo_traits::{Envelope, GeoKinded};
use crate::geometry::primitives::{Linestring, Point, Polygon, Rect, Ring};

/// Runtime-typed geometry: one of the concrete 2D kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry<T> {
    Point(Point<T>),
    Box(Rect<T>),
    Ring(Ring<T>),
    Polygon(Polygon<T>),
    Linestring(Linestring<T>),
}

/// Borrowed counterpart of [`Geometry`], used to resolve the concrete kinds of a pair
/// without cloning either operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryRef<'a, T> {
    Point(&'a Point<T>),
    Box(&'a Rect<T>),
    Ring(&'a Ring<T>),
    Polygon(&'a Polygon<T>),
    Linestring(&'a Linestring<T>),
}

impl<T: Coordinate> Geometry<T> {
    pub fn as_ref(&self) -> GeometryRef<'_, T> {
        match self {
            Geometry::Point(p) => GeometryRef::Point(p),
            Geometry::Box(b) => GeometryRef::Box(b),
            Geometry::Ring(r) => GeometryRef::Ring(r),
            Geometry::Polygon(p) => GeometryRef::Polygon(p),
            Geometry::Linestring(l) => GeometryRef::Linestring(l),
        }
    }
}

impl<T: Coordinate> GeoKinded for GeometryRef<'_, T> {
    fn kind(&self) -> GeoKind {
        match self {
            GeometryRef::Point(_) => GeoKind::Point,
            GeometryRef::Box(_) => GeoKind::Box,
            GeometryRef::Ring(_) => GeoKind::Ring,
            GeometryRef::Polygon(_) => GeoKind::Polygon,
            GeometryRef::Linestring(_) => GeoKind::Linestring,
        }
    }
}

impl<T: Coordinate> GeoKinded for Geometry<T> {
    fn kind(&self) -> GeoKind {
        self.as_ref().kind()
    }
}

impl<T: Coordinate> Envelope<T, 2> for GeometryRef<'_, T> {
    fn envelope(&self) -> Option<Rect<T>> {
        match self {
            GeometryRef::Point(p) => p.envelope(),
            GeometryRef::Box(b) => b.envelope(),
            GeometryRef::Ring(r) => r.envelope(),
            GeometryRef::Polygon(p) => p.envelope(),
            GeometryRef::Linestring(l) => l.envelope(),
        }
    }
}

impl<T: Coordinate> Envelope<T, 2> for Geometry<T> {
    fn envelope(&self) -> Option<Rect<T>> {
        self.as_ref().envelope()
    }
}

macro_rules! impl_geometry_conversions {
    ($($variant:ident => $geom:ident),*) => {$(
        impl<T: Coordinate> From<$geom<T>> for Geometry<T> {
            fn from(g: $geom<T>) -> Self {
                Geometry::$variant(g)
            }
        }

        impl<'a, T: Coordinate> From<&'a $geom<T>> for GeometryRef<'a, T> {
            fn from(g: &'a $geom<T>) -> Self {
                GeometryRef::$variant(g)
            }
        }
    )*};
}

impl_geometry_conversions!(
    Point => Point,
    Box => Rect,
    Ring => Ring,
    Polygon => Polygon,
    Linestring => Linestring
);

impl<'a, T: Coordinate> From<&'a Geometry<T>> for GeometryRef<'a, T> {
    fn from(g: &'a Geometry<T>) -> Self {
        g.as_ref()
    }
}
