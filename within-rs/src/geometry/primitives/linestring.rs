use itertools::Itertools;

use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoKind;
use crate::geometry::geo_traits::{Envelope, GeoKinded};
use crate::geometry::primitives::rect::envelope_of_points;
use crate::geometry::primitives::{Point, Rect, Segment};

/// Open, ordered sequence of points
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Linestring<T>(pub Vec<Point<T>>);

impl<T: Coordinate> Linestring<T> {
    pub fn new(points: Vec<Point<T>>) -> Self {
        Linestring(points)
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Point<T>> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Point<T>> {
        self.0.last()
    }

    /// A linestring is closed when it has at least two points and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.len() > 1 && self.first() == self.last()
    }

    /// Whether `point` is one of the two end points of a non-closed linestring
    pub fn is_terminal(&self, point: &Point<T>) -> bool {
        !self.is_closed() && (self.first() == Some(point) || self.last() == Some(point))
    }

    /// Consecutive point pairs, zero-length segments included
    pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.0
            .iter()
            .tuple_windows()
            .map(|(s, e)| Segment::new(*s, *e))
    }
}

impl<T: Coordinate> From<Vec<(T, T)>> for Linestring<T> {
    fn from(points: Vec<(T, T)>) -> Self {
        Linestring(points.into_iter().map(Point::from).collect())
    }
}

impl<T: Coordinate> Envelope<T, 2> for Linestring<T> {
    fn envelope(&self) -> Option<Rect<T>> {
        envelope_of_points(&self.0)
    }
}

impl<T: Coordinate> GeoKinded for Linestring<T> {
    fn kind(&self) -> GeoKind {
        GeoKind::Linestring
    }
}
