use std::cmp::Ordering;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::error::WithinError;
use crate::geometry::Coordinate;
use crate::geometry::geo_enums::{CoordSystem, GeoKind, GeoPosition};
use crate::geometry::primitives::{Point, Rect, Ring, Segment};
use crate::util::FPA;

/// Algorithm used to decide containment for a pair of geometry kinds.
///
/// Strategies are plain values: [`default_strategy`] picks one from the kinds and coordinate
/// systems of the operands, callers can also pass one explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Strict per-dimension comparison of a point against a box
    PointInBox,
    /// Per-dimension comparison of two boxes
    BoxInBox,
    /// Winding number, detects the boundary. Works for cartesian and spherical coordinates.
    Winding(CoordSystem),
    /// W. R. Franklin's crossing test (cartesian, no boundary detection)
    Franklin,
    /// E. Haines' crossings-multiply test (cartesian, no boundary detection)
    CrossingsMultiply,
}

/// Selects the strategy for a pair of geometry kinds and their coordinate systems.
///
/// | kinds | strategy |
/// |---|---|
/// | point / box | [`Strategy::PointInBox`] |
/// | box / box | [`Strategy::BoxInBox`] |
/// | point / ring, point / polygon | [`Strategy::Winding`] in the operands' coordinate system |
/// | point / linestring, linestring / linestring | [`Strategy::Winding`] (not consulted by the algorithm) |
/// | linestring / ring, linestring / polygon | [`Strategy::Winding`], cartesian only |
///
/// Other pairs fail with [`WithinError::NotImplemented`],
/// operands in different coordinate systems with [`WithinError::IncompatibleCoordinateSystems`].
pub fn default_strategy(
    kind1: GeoKind,
    kind2: GeoKind,
    cs1: CoordSystem,
    cs2: CoordSystem,
) -> Result<Strategy> {
    let strategy = match (kind1, kind2) {
        (GeoKind::Point, GeoKind::Box) => Strategy::PointInBox,
        (GeoKind::Box, GeoKind::Box) => Strategy::BoxInBox,
        (GeoKind::Point | GeoKind::Linestring, k) if k.is_areal() => Strategy::Winding(cs1),
        (GeoKind::Point, GeoKind::Linestring) | (GeoKind::Linestring, GeoKind::Linestring) => {
            Strategy::Winding(cs1)
        }
        _ => bail!(WithinError::NotImplemented { kind1, kind2 }),
    };
    if cs1 != cs2 {
        bail!(WithinError::IncompatibleCoordinateSystems { cs1, cs2 });
    }
    Ok(strategy)
}

impl Strategy {
    /// Whether this strategy can evaluate `kind1` within `kind2`
    pub fn supports(&self, kind1: GeoKind, kind2: GeoKind) -> bool {
        match (kind1, kind2) {
            (GeoKind::Point, GeoKind::Box) => *self == Strategy::PointInBox,
            (GeoKind::Box, GeoKind::Box) => *self == Strategy::BoxInBox,
            (GeoKind::Point, k) if k.is_areal() => matches!(
                self,
                Strategy::Winding(_) | Strategy::Franklin | Strategy::CrossingsMultiply
            ),
            //pieces are located on the integer grid, which has no spherical counterpart
            (GeoKind::Linestring, k) if k.is_areal() => *self == Strategy::Winding(CoordSystem::Cartesian),
            //the linear algorithms do not consult the strategy
            (GeoKind::Point, GeoKind::Linestring) | (GeoKind::Linestring, GeoKind::Linestring) => {
                true
            }
            _ => false,
        }
    }

    pub(crate) fn ensure_supports(&self, kind1: GeoKind, kind2: GeoKind) -> Result<()> {
        if !self.supports(kind1, kind2) {
            bail!(WithinError::IncompatibleStrategy {
                strategy: *self,
                kind1,
                kind2,
            });
        }
        Ok(())
    }

    /// Strict containment of a point in a box: the point must lie strictly between
    /// the box' bounds in every dimension.
    pub fn point_in_box<T: Coordinate, const D1: usize, const D2: usize>(
        &self,
        point: &Point<T, D1>,
        rect: &Rect<T, D2>,
    ) -> Result<bool> {
        ensure_same_dimension(D1, D2)?;
        self.ensure_supports(GeoKind::Point, GeoKind::Box)?;
        Ok((0..D1).all(|d| rect.min.get(d) < point.get(d) && point.get(d) < rect.max.get(d)))
    }

    /// Containment of `inner` in `outer`: `inner` may touch the boundary of `outer`
    /// but must have a non-zero extent in every dimension.
    pub fn box_in_box<T: Coordinate, const D1: usize, const D2: usize>(
        &self,
        inner: &Rect<T, D1>,
        outer: &Rect<T, D2>,
    ) -> Result<bool> {
        ensure_same_dimension(D1, D2)?;
        self.ensure_supports(GeoKind::Box, GeoKind::Box)?;
        Ok((0..D1).all(|d| {
            outer.min.get(d) <= inner.min.get(d)
                && inner.max.get(d) <= outer.max.get(d)
                && inner.min.get(d) < inner.max.get(d)
        }))
    }

    /// Position of a point relative to a ring.
    /// [`Strategy::Franklin`] and [`Strategy::CrossingsMultiply`] never report [`GeoPosition::Boundary`].
    pub fn point_in_ring<T: Coordinate>(&self, point: &Point<T>, ring: &Ring<T>) -> Result<GeoPosition> {
        match self {
            Strategy::Winding(cs) => Ok(winding(point, ring, *cs)),
            Strategy::Franklin => Ok(franklin(point, ring)),
            Strategy::CrossingsMultiply => Ok(crossings_multiply(point, ring)),
            Strategy::PointInBox | Strategy::BoxInBox => bail!(WithinError::IncompatibleStrategy {
                strategy: *self,
                kind1: GeoKind::Point,
                kind2: GeoKind::Ring,
            }),
        }
    }
}

pub(crate) fn ensure_same_dimension(left: usize, right: usize) -> Result<()> {
    if left != right {
        bail!(WithinError::DimensionMismatch { left, right });
    }
    Ok(())
}

//based on: https://en.wikipedia.org/wiki/Point_in_polygon#Winding_number_algorithm
fn winding<T: Coordinate>(point: &Point<T>, ring: &Ring<T>, cs: CoordSystem) -> GeoPosition {
    let mut winding_number = 0i32;
    for edge in ring.edge_iter() {
        let side = match cs {
            CoordSystem::Cartesian => edge.side_of(point),
            CoordSystem::Spherical => spherical_side(&edge, point),
        };
        if side == Ordering::Equal && edge.bbox().contains_point(point) {
            return GeoPosition::Boundary;
        }

        let (y, y_start, y_end) = (point.y(), edge.start.y(), edge.end.y());
        if y_start <= y {
            //upward crossing with the point on the left
            if y_end > y && side == Ordering::Greater {
                winding_number += 1;
            }
        } else if y_end <= y && side == Ordering::Less {
            //downward crossing with the point on the right
            winding_number -= 1;
        }
    }
    match winding_number {
        0 => GeoPosition::Exterior,
        _ => GeoPosition::Interior,
    }
}

/// Side of `point` relative to the great circle through the edge, coordinates are longitude/latitude in degrees.
fn spherical_side<T: Coordinate>(edge: &Segment<T>, point: &Point<T>) -> Ordering {
    let to_unit = |p: &Point<T>| {
        let (lon, lat) = (p.x().as_f64().to_radians(), p.y().as_f64().to_radians());
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    };
    let [ax, ay, az] = to_unit(&edge.start);
    let [bx, by, bz] = to_unit(&edge.end);
    let [cx, cy, cz] = to_unit(point);

    //normal of the plane through the great circle
    let (nx, ny, nz) = (ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx);
    let dot = nx * cx + ny * cy + nz * cz;

    FPA(dot).sign()
}

//https://wrfranklin.org/Research/Short_Notes/pnpoly.html
fn franklin<T: Coordinate>(point: &Point<T>, ring: &Ring<T>) -> GeoPosition {
    let (px, py) = (point.x().as_f64(), point.y().as_f64());
    let mut inside = false;
    for edge in ring.edge_iter() {
        let (xi, yi) = (edge.end.x().as_f64(), edge.end.y().as_f64());
        let (xj, yj) = (edge.start.x().as_f64(), edge.start.y().as_f64());
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
    }
    match inside {
        true => GeoPosition::Interior,
        false => GeoPosition::Exterior,
    }
}

//E. Haines, "Point in Polygon Strategies", Graphics Gems IV
fn crossings_multiply<T: Coordinate>(point: &Point<T>, ring: &Ring<T>) -> GeoPosition {
    let (tx, ty) = (point.x().as_f64(), point.y().as_f64());
    let mut inside = false;
    for edge in ring.edge_iter() {
        let (x0, y0) = (edge.start.x().as_f64(), edge.start.y().as_f64());
        let (x1, y1) = (edge.end.x().as_f64(), edge.end.y().as_f64());
        let (yflag0, yflag1) = (y0 >= ty, y1 >= ty);
        if yflag0 != yflag1 && (((y1 - ty) * (x0 - x1) >= (x1 - tx) * (y0 - y1)) == yflag1) {
            inside = !inside;
        }
    }
    match inside {
        true => GeoPosition::Interior,
        false => GeoPosition::Exterior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn square() -> Ring<f64> {
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)].into()
    }

    fn concave() -> Ring<f64> {
        //U shape, opening at the top
        vec![
            (0.0, 0.0),
            (9.0, 0.0),
            (9.0, 9.0),
            (6.0, 9.0),
            (6.0, 3.0),
            (3.0, 3.0),
            (3.0, 9.0),
            (0.0, 9.0),
        ]
        .into()
    }

    #[test_case(Strategy::Winding(CoordSystem::Cartesian); "winding")]
    #[test_case(Strategy::Franklin; "franklin")]
    #[test_case(Strategy::CrossingsMultiply; "crossings multiply")]
    fn strategies_agree_off_the_boundary(strategy: Strategy) {
        let cases = [
            ((5.0, 5.0), square(), GeoPosition::Interior),
            ((15.0, 5.0), square(), GeoPosition::Exterior),
            ((1.5, 7.0), concave(), GeoPosition::Interior),
            ((4.5, 7.0), concave(), GeoPosition::Exterior),
            ((4.5, 1.5), concave(), GeoPosition::Interior),
        ];
        for (p, ring, expected) in cases {
            assert_eq!(strategy.point_in_ring(&p.into(), &ring).unwrap(), expected, "{p:?}");
        }
    }

    #[test]
    fn winding_is_orientation_agnostic() {
        let mut clockwise = square();
        clockwise.points.reverse();
        let strategy = Strategy::Winding(CoordSystem::Cartesian);
        let p = Point::new(5.0, 5.0);
        assert_eq!(strategy.point_in_ring(&p, &clockwise).unwrap(), GeoPosition::Interior);
    }

    #[test_case((10.0, 5.0); "edge")]
    #[test_case((10.0, 10.0); "vertex")]
    #[test_case((5.0, 0.0); "bottom edge")]
    fn winding_detects_boundary(p: (f64, f64)) {
        let strategy = Strategy::Winding(CoordSystem::Cartesian);
        assert_eq!(strategy.point_in_ring(&p.into(), &square()).unwrap(), GeoPosition::Boundary);
    }

    #[test]
    fn spherical_winding() {
        let ring: Ring<f64> = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].into();
        let strategy = Strategy::Winding(CoordSystem::Spherical);
        assert_eq!(
            strategy.point_in_ring(&Point::new(5.0, 5.0), &ring).unwrap(),
            GeoPosition::Interior
        );
        assert_eq!(
            strategy.point_in_ring(&Point::new(20.0, 5.0), &ring).unwrap(),
            GeoPosition::Exterior
        );
        //the equator is a great circle
        assert_eq!(
            strategy.point_in_ring(&Point::new(5.0, 0.0), &ring).unwrap(),
            GeoPosition::Boundary
        );
    }

    #[test]
    fn box_strategies_reject_rings() {
        let err = Strategy::BoxInBox
            .point_in_ring(&Point::new(5.0, 5.0), &square())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithinError>(),
            Some(WithinError::IncompatibleStrategy { .. })
        ));
    }

    #[test]
    fn default_strategy_table() {
        use CoordSystem::*;
        use GeoKind::*;
        assert_eq!(default_strategy(Point, Box, Cartesian, Cartesian).unwrap(), Strategy::PointInBox);
        assert_eq!(default_strategy(Box, Box, Cartesian, Cartesian).unwrap(), Strategy::BoxInBox);
        assert_eq!(
            default_strategy(Point, Polygon, Spherical, Spherical).unwrap(),
            Strategy::Winding(Spherical)
        );
        assert_eq!(
            default_strategy(Point, Ring, Cartesian, Cartesian).unwrap(),
            Strategy::Winding(Cartesian)
        );
        assert_eq!(
            default_strategy(Linestring, Polygon, Cartesian, Cartesian).unwrap(),
            Strategy::Winding(Cartesian)
        );
        assert!(!Strategy::Winding(Spherical).supports(Linestring, Ring));
        assert!(!Strategy::Franklin.supports(Linestring, Polygon));
        assert!(default_strategy(Polygon, Polygon, Cartesian, Cartesian).is_err());
        let err = default_strategy(Point, Ring, Cartesian, Spherical).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithinError>(),
            Some(WithinError::IncompatibleCoordinateSystems { .. })
        ));
    }

    #[test]
    fn strict_point_in_box() {
        let rect = Rect::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let strategy = Strategy::PointInBox;
        assert!(strategy.point_in_box(&Point::new(5.0, 5.0), &rect).unwrap());
        assert!(!strategy.point_in_box(&Point::new(10.0, 5.0), &rect).unwrap());
        assert!(!strategy.point_in_box(&Point::new(-1.0, 5.0), &rect).unwrap());
    }

    #[test]
    fn box_in_box_rules() {
        let outer = Rect::from_corners(Point::new(0, 0), Point::new(10, 10));
        let strategy = Strategy::BoxInBox;
        let inner = Rect::from_corners(Point::new(0, 2), Point::new(5, 5));
        let flat = Rect::from_corners(Point::new(2, 2), Point::new(5, 2));
        let sticking_out = Rect::from_corners(Point::new(2, 2), Point::new(11, 5));
        assert!(strategy.box_in_box(&inner, &outer).unwrap());
        assert!(!strategy.box_in_box(&flat, &outer).unwrap());
        assert!(!strategy.box_in_box(&sticking_out, &outer).unwrap());
    }
}
