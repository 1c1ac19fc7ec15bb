use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoKind;
use crate::geometry::geo_traits::{Envelope, GeoKinded};
use crate::geometry::primitives::Rect;

/// Geometric primitive representing a point in `D` dimensions (2D by default)
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point<T, const D: usize = 2>(pub [T; D]);

impl<T: Coordinate, const D: usize> Point<T, D> {
    /// Value along dimension `dim`
    pub fn get(&self, dim: usize) -> T {
        self.0[dim]
    }

    pub fn coords(&self) -> &[T; D] {
        &self.0
    }
}

impl<T: Coordinate> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point([x, y])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T: Coordinate> From<(T, T)> for Point<T> {
    fn from(p: (T, T)) -> Self {
        Point([p.0, p.1])
    }
}

impl<T: Coordinate, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(coords: [T; D]) -> Self {
        Point(coords)
    }
}

impl<T: Coordinate> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x(), p.y())
    }
}

impl<T: Coordinate, const D: usize> Envelope<T, D> for Point<T, D> {
    fn envelope(&self) -> Option<Rect<T, D>> {
        Some(Rect::from_point(*self))
    }
}

impl<T: Coordinate, const D: usize> GeoKinded for Point<T, D> {
    fn kind(&self) -> GeoKind {
        GeoKind::Point
    }
}
