use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoKind;
use crate::geometry::geo_traits::{Envelope, GeoKinded};
use crate::geometry::primitives::{Rect, Ring};

/// Polygon defined by an exterior ring and a (possibly empty) set of interior rings (holes).
/// The holes are assumed to lie inside the exterior ring, this is not verified.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon<T> {
    pub exterior: Ring<T>,
    pub interiors: Vec<Ring<T>>,
}

impl<T: Coordinate> Polygon<T> {
    pub fn new(exterior: Ring<T>, interiors: Vec<Ring<T>>) -> Self {
        Polygon {
            exterior,
            interiors,
        }
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring<T>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }
}

impl<T: Coordinate> From<Ring<T>> for Polygon<T> {
    fn from(exterior: Ring<T>) -> Self {
        Polygon::new(exterior, vec![])
    }
}

impl<T: Coordinate> Envelope<T, 2> for Polygon<T> {
    //holes lie inside the exterior ring
    fn envelope(&self) -> Option<Rect<T>> {
        self.exterior.envelope()
    }
}

impl<T: Coordinate> GeoKinded for Polygon<T> {
    fn kind(&self) -> GeoKind {
        GeoKind::Polygon
    }
}
