use anyhow::Result;

use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::PointInGeometry;
use crate::geometry::primitives::{Linestring, Point, Polygon, Ring};
use crate::within::Strategy;

/// Position of `point` relative to `geometry`: [`GeoPosition::Exterior`] (-1),
/// [`GeoPosition::Boundary`] (0) or [`GeoPosition::Interior`] (+1).
pub fn point_in_geometry<T, G>(point: &Point<T>, geometry: &G, strategy: &Strategy) -> Result<GeoPosition>
where
    T: Coordinate,
    G: PointInGeometry<T> + ?Sized,
{
    geometry.position_of(point, strategy)
}

impl<T: Coordinate> PointInGeometry<T> for Linestring<T> {
    /// The end points of a non-closed linestring form its boundary, every other point on it is interior.
    /// The strategy is not consulted.
    fn position_of(&self, point: &Point<T>, _strategy: &Strategy) -> Result<GeoPosition> {
        let on_linestring =
            self.points().contains(point) || self.segments().any(|s| s.contains(point));

        let position = match on_linestring {
            false => GeoPosition::Exterior,
            true if self.is_terminal(point) => GeoPosition::Boundary,
            true => GeoPosition::Interior,
        };
        Ok(position)
    }
}

impl<T: Coordinate> PointInGeometry<T> for Ring<T> {
    fn position_of(&self, point: &Point<T>, strategy: &Strategy) -> Result<GeoPosition> {
        strategy.point_in_ring(point, self)
    }
}

impl<T: Coordinate> PointInGeometry<T> for Polygon<T> {
    fn position_of(&self, point: &Point<T>, strategy: &Strategy) -> Result<GeoPosition> {
        match self.exterior.position_of(point, strategy)? {
            GeoPosition::Interior => {
                for hole in &self.interiors {
                    match hole.position_of(point, strategy)? {
                        GeoPosition::Interior => return Ok(GeoPosition::Exterior),
                        GeoPosition::Boundary => return Ok(GeoPosition::Boundary),
                        GeoPosition::Exterior => {}
                    }
                }
                Ok(GeoPosition::Interior)
            }
            position => Ok(position),
        }
    }
}
