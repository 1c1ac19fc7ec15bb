use std::cmp::Ordering;

use crate::geometry::Coordinate;
use crate::geometry::primitives::{Point, Rect};

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Segment<T> {
    pub start: Point<T>,
    pub end: Point<T>,
}

impl<T: Coordinate> Segment<T> {
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Segment { start, end }
    }

    /// Zero-length segment
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Side of `point` relative to the directed line through `self`, see [`Coordinate::orientation`]
    pub fn side_of(&self, point: &Point<T>) -> Ordering {
        T::orientation(self.start.0, self.end.0, point.0)
    }

    pub fn bbox(&self) -> Rect<T> {
        Rect::from_corners(self.start, self.end)
    }

    /// Whether `point` lies on the segment, endpoints included
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.side_of(point) == Ordering::Equal && self.bbox().contains_point(point)
    }

    /// Whether `point` lies on the segment, endpoints excluded
    pub fn contains_in_interior(&self, point: &Point<T>) -> bool {
        *point != self.start && *point != self.end && self.contains(point)
    }

    pub fn is_endpoint(&self, point: &Point<T>) -> bool {
        *point == self.start || *point == self.end
    }

    /// Whether both segments lie on the same carrier line
    pub fn is_collinear_with(&self, other: &Segment<T>) -> bool {
        self.side_of(&other.start) == Ordering::Equal && self.side_of(&other.end) == Ordering::Equal
    }

    /// Whether the segments intersect in a single point interior to both
    pub fn crosses(&self, other: &Segment<T>) -> bool {
        let [a, b] = [self.side_of(&other.start), self.side_of(&other.end)];
        let [c, d] = [other.side_of(&self.start), other.side_of(&self.end)];
        [a, b, c, d].iter().all(|&o| o != Ordering::Equal) && a != b && c != d
    }

    /// The dimension along which the segment is not constant, used to order collinear points
    pub(crate) fn dominant_axis(&self) -> usize {
        match self.start.x() == self.end.x() {
            true => 1,
            false => 0,
        }
    }
}
