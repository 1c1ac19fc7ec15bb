use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoKind;
use crate::geometry::geo_traits::{Envelope, GeoKinded};
use crate::geometry::primitives::rect::envelope_of_points;
use crate::geometry::primitives::{Point, Rect, Segment};

/// Closed sequence of points bounding an area.
///
/// The closing edge is virtual: the ring may or may not repeat its first point at the end,
/// [`Ring::edge_iter`] always yields the closing edge exactly once.
/// Both orientations are accepted.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Ring<T> {
    pub points: Vec<Point<T>>,
}

impl<T: Coordinate> Ring<T> {
    pub fn new(points: Vec<Point<T>>) -> Self {
        Ring { points }
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point repeats the first one
    pub fn is_explicitly_closed(&self) -> bool {
        self.len() > 1 && self.points.first() == self.points.last()
    }

    pub fn n_edges(&self) -> usize {
        match self.len() {
            0 | 1 => 0,
            n if self.is_explicitly_closed() => n - 1,
            n => n,
        }
    }

    pub fn edge(&self, i: usize) -> Segment<T> {
        let j = (i + 1) % self.len();
        Segment::new(self.points[i], self.points[j])
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        (0..self.n_edges()).map(move |i| self.edge(i))
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn signed_area(&self) -> f64 {
        let sigma: f64 = self
            .edge_iter()
            .map(|e| {
                let (x_i, y_i) = (e.start.x().as_f64(), e.start.y().as_f64());
                let (x_j, y_j) = (e.end.x().as_f64(), e.end.y().as_f64());
                (y_i + y_j) * (x_i - x_j)
            })
            .sum();
        0.5 * sigma
    }
}

impl<T: Coordinate> From<Vec<(T, T)>> for Ring<T> {
    fn from(points: Vec<(T, T)>) -> Self {
        Ring::new(points.into_iter().map(Point::from).collect())
    }
}

impl<T: Coordinate> From<Rect<T>> for Ring<T> {
    fn from(r: Rect<T>) -> Self {
        Ring::new(r.corners().to_vec())
    }
}

impl<T: Coordinate> Envelope<T, 2> for Ring<T> {
    fn envelope(&self) -> Option<Rect<T>> {
        envelope_of_points(&self.points)
    }
}

impl<T: Coordinate> GeoKinded for Ring<T> {
    fn kind(&self) -> GeoKind {
        GeoKind::Ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_edge_is_virtual() {
        let open: Ring<f64> = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].into();
        let closed: Ring<f64> =
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)].into();
        assert_eq!(open.n_edges(), 4);
        assert_eq!(closed.n_edges(), 4);
        assert_eq!(open.edge_iter().last(), closed.edge_iter().last());
        assert_eq!(open.signed_area(), 100.0);
    }

    #[test]
    fn ring_from_rect_is_counterclockwise() {
        let r = Rect::from_corners(Point::new(0, 0), Point::new(2, 3));
        let ring = Ring::from(r);
        assert_eq!(ring.signed_area(), 6.0);
    }
}
