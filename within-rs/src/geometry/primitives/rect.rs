use anyhow::Result;
use anyhow::ensure;

use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoKind;
use crate::geometry::geo_traits::{Envelope, GeoKinded};
use crate::geometry::primitives::Point;

/// Axis-aligned box in `D` dimensions, defined by its minimum and maximum corner
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect<T, const D: usize = 2> {
    pub min: Point<T, D>,
    pub max: Point<T, D>,
}

impl<T: Coordinate, const D: usize> Rect<T, D> {
    pub fn try_new(min: Point<T, D>, max: Point<T, D>) -> Result<Self> {
        ensure!(
            (0..D).all(|d| min.get(d) <= max.get(d)),
            "invalid box, min: {min:?}, max: {max:?}"
        );
        Ok(Rect { min, max })
    }

    /// Smallest box containing both corners, in whatever order they are given
    pub fn from_corners(c1: Point<T, D>, c2: Point<T, D>) -> Self {
        let min = Point(std::array::from_fn(|d| c1.get(d).min_coord(c2.get(d))));
        let max = Point(std::array::from_fn(|d| c1.get(d).max_coord(c2.get(d))));
        Rect { min, max }
    }

    /// Zero-extent box around a single point
    pub fn from_point(p: Point<T, D>) -> Self {
        Rect { min: p, max: p }
    }

    /// Grows `self` so that it also covers `other`.
    pub fn expand(&mut self, other: &Rect<T, D>) {
        for d in 0..D {
            self.min.0[d] = self.min.0[d].min_coord(other.min.0[d]);
            self.max.0[d] = self.max.0[d].max_coord(other.max.0[d]);
        }
    }

    /// Grows `self` so that it also covers `point`.
    pub fn expand_point(&mut self, point: &Point<T, D>) {
        self.expand(&Rect::from_point(*point))
    }

    /// Returns the smallest box that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect<T, D>, b: Rect<T, D>) -> Rect<T, D> {
        let mut bounds = a;
        bounds.expand(&b);
        bounds
    }

    /// Extent along dimension `dim`
    pub fn extent(&self, dim: usize) -> T {
        (self.max.get(dim) - self.min.get(dim)).abs()
    }

    /// Largest extent over all dimensions, zero for a degenerate box.
    pub fn max_extent(&self) -> T {
        (0..D)
            .map(|d| self.extent(d))
            .fold(T::zero(), |acc, e| acc.max_coord(e))
    }

    pub fn contains_point(&self, point: &Point<T, D>) -> bool {
        (0..D).all(|d| self.min.get(d) <= point.get(d) && point.get(d) <= self.max.get(d))
    }

    pub fn overlaps(&self, other: &Rect<T, D>) -> bool {
        (0..D).all(|d| {
            self.min.get(d).max_coord(other.min.get(d)) <= self.max.get(d).min_coord(other.max.get(d))
        })
    }
}

impl<T: Coordinate> Rect<T> {
    /// The four corners in counterclockwise order, starting at the minimum corner
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            Point::new(self.min.x(), self.min.y()),
            Point::new(self.max.x(), self.min.y()),
            Point::new(self.max.x(), self.max.y()),
            Point::new(self.min.x(), self.max.y()),
        ]
    }
}

impl<T: Coordinate, const D: usize> Envelope<T, D> for Rect<T, D> {
    fn envelope(&self) -> Option<Rect<T, D>> {
        Some(*self)
    }
}

impl<T: Coordinate, const D: usize> GeoKinded for Rect<T, D> {
    fn kind(&self) -> GeoKind {
        GeoKind::Box
    }
}

/// Envelope of a sequence of points, `None` when the sequence is empty
pub fn envelope_of_points<'a, T, I>(points: I) -> Option<Rect<T>>
where
    T: Coordinate,
    I: IntoIterator<Item = &'a Point<T>>,
{
    points.into_iter().fold(None, |acc: Option<Rect<T>>, p| match acc {
        None => Some(Rect::from_point(*p)),
        Some(mut r) => {
            r.expand_point(p);
            Some(r)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn max_extent_3d() {
        let r = Rect::try_new(Point([1.0, -2.0, 5.0]), Point([4.0, 5.0, 7.0])).unwrap();
        assert_eq!(r.max_extent(), 7.0);
    }

    #[test_case([0, 0], [0, 0], 0; "degenerate")]
    #[test_case([0, 0], [3, 1], 3; "wide")]
    #[test_case([-4, -10], [0, 10], 20; "tall")]
    fn max_extent_2d(min: [i64; 2], max: [i64; 2], expected: i64) {
        let r = Rect::try_new(Point(min), Point(max)).unwrap();
        assert_eq!(r.max_extent(), expected);
    }

    #[test]
    fn max_extent_1d() {
        let r = Rect::from_corners(Point([3.5]), Point([-1.5]));
        assert_eq!(r.max_extent(), 5.0);
    }

    #[test]
    fn invalid_box_rejected() {
        assert!(Rect::try_new(Point::new(1.0, 0.0), Point::new(0.0, 1.0)).is_err());
    }

    #[test]
    fn expand_covers_both() {
        let mut r = Rect::from_point(Point::new(0.0, 0.0));
        r.expand(&Rect::from_corners(Point::new(2.0, -1.0), Point::new(3.0, 4.0)));
        assert_eq!(r.min, Point::new(0.0, -1.0));
        assert_eq!(r.max, Point::new(3.0, 4.0));
    }

    #[test]
    fn envelope_of_no_points() {
        assert!(envelope_of_points::<f64, _>(&[]).is_none());
    }
}
