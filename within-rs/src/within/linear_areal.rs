use std::cmp::Ordering;

use anyhow::{Result, bail};
use itertools::Itertools;
use log::debug;

use crate::geometry::Coordinate;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{Envelope, PointInGeometry};
use crate::geometry::point_in_geometry;
use crate::geometry::primitives::{Linestring, Point, Polygon, Ring};
use crate::robustness::{Recalculate, RobustPolicy, get_rescale_policy};
use crate::util::RescaleConfig;
use crate::WithinError;
use crate::within::Strategy;

/// Whether `ls` lies within `ring`: no part of it outside, and some part strictly inside.
pub fn linestring_within_ring<T>(ls: &Linestring<T>, ring: &Ring<T>, strategy: &Strategy) -> Result<bool>
where
    T: RobustPolicy<2>,
{
    if let Some(within) = trivial_case(ls, ring, strategy)? {
        return Ok(within);
    }
    let policy = get_rescale_policy::<T, 2>(&[ls, ring as &dyn Envelope<T, 2>], &RescaleConfig::default())?;
    let area = Polygon::from(doubled(ring.recalculate(&policy)?)?);
    within_robust_area(&doubled_linestring(ls.recalculate(&policy)?)?, &area, strategy)
}

/// Whether `ls` lies within `polygon`: no part of it outside (holes included), and some part strictly inside.
pub fn linestring_within_polygon<T>(ls: &Linestring<T>, polygon: &Polygon<T>, strategy: &Strategy) -> Result<bool>
where
    T: RobustPolicy<2>,
{
    if let Some(within) = trivial_case(ls, polygon, strategy)? {
        return Ok(within);
    }
    let policy = get_rescale_policy::<T, 2>(&[ls, polygon as &dyn Envelope<T, 2>], &RescaleConfig::default())?;
    let robust = polygon.recalculate(&policy)?;
    let area = Polygon::new(
        doubled(robust.exterior)?,
        robust.interiors.into_iter().map(doubled).collect::<Result<_>>()?,
    );
    within_robust_area(&doubled_linestring(ls.recalculate(&policy)?)?, &area, strategy)
}

fn trivial_case<T, G>(ls: &Linestring<T>, area: &G, strategy: &Strategy) -> Result<Option<bool>>
where
    T: Coordinate,
    G: PointInGeometry<T> + Envelope<T, 2>,
{
    match ls.points() {
        [] => Ok(Some(false)),
        _ if area.envelope().is_none() => Ok(Some(false)),
        [point] => Ok(Some(point_in_geometry(point, area, strategy)?.is_interior())),
        _ => Ok(None),
    }
}

/// Every coordinate is doubled, so midpoints between mapped vertices stay on the grid.
fn doubled<R: Coordinate>(ring: Ring<R>) -> Result<Ring<R>> {
    Ok(Ring::new(ring.points.into_iter().map(double_point).collect::<Result<_>>()?))
}

fn doubled_linestring<R: Coordinate>(ls: Linestring<R>) -> Result<Linestring<R>> {
    Ok(Linestring::new(ls.0.into_iter().map(double_point).collect::<Result<_>>()?))
}

fn double_point<R: Coordinate>(p: Point<R>) -> Result<Point<R>> {
    let mut doubled = p;
    for c in doubled.0.iter_mut() {
        match c.checked_sum(*c) {
            Some(d) => *c = d,
            None => bail!(WithinError::Overflow { value: c.as_f64() * 2.0 }),
        }
    }
    Ok(doubled)
}

/// Splits every segment of `ls` at the vertices of `area` it passes through and locates the middle of each piece.
///
/// Without proper crossings, every piece lies entirely inside, outside or on the boundary of `area`.
fn within_robust_area<R: Coordinate>(ls: &Linestring<R>, area: &Polygon<R>, strategy: &Strategy) -> Result<bool> {
    let edges = area
        .rings()
        .flat_map(|r| r.edge_iter())
        .filter(|e| !e.is_degenerate())
        .collect_vec();

    let two = R::one() + R::one();
    let mut has_interior = false;

    for segment in ls.segments().filter(|s| !s.is_degenerate()) {
        if edges.iter().any(|e| segment.crosses(e)) {
            debug!("[LA] {segment:?} crosses the boundary");
            return Ok(false);
        }
        let ax = segment.dominant_axis();
        let splits = edges
            .iter()
            .flat_map(|e| [e.start, e.end])
            .filter(|v| segment.contains_in_interior(v))
            .chain([segment.start, segment.end])
            .sorted_by(|a, b| a.get(ax).partial_cmp(&b.get(ax)).unwrap_or(Ordering::Equal))
            .dedup()
            .collect_vec();

        for (p, q) in splits.iter().tuple_windows() {
            //both ends are even, halving first keeps the sum in range
            let mid = Point(std::array::from_fn(|d| p.get(d) / two + q.get(d) / two));
            match area.position_of(&mid, strategy)? {
                GeoPosition::Exterior => {
                    debug!("[LA] piece {p:?} -> {q:?} lies outside");
                    return Ok(false);
                }
                GeoPosition::Interior => has_interior = true,
                GeoPosition::Boundary => {}
            }
        }
    }
    Ok(has_interior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_enums::CoordSystem;
    use test_case::test_case;

    const WINDING: Strategy = Strategy::Winding(CoordSystem::Cartesian);

    fn square() -> Ring<f64> {
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)].into()
    }

    fn notched() -> Ring<i64> {
        //U shape, opening at the top
        vec![(0, 0), (9, 0), (9, 9), (6, 9), (6, 3), (3, 3), (3, 9), (0, 9)].into()
    }

    #[test_case(vec![(2.0, 2.0), (8.0, 2.0)], true; "strictly inside")]
    #[test_case(vec![(0.0, 0.0), (10.0, 0.0)], false; "on the boundary only")]
    #[test_case(vec![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)], true; "partly on the boundary")]
    #[test_case(vec![(5.0, 5.0), (15.0, 5.0)], false; "crossing out")]
    #[test_case(vec![(12.0, 5.0), (15.0, 5.0)], false; "outside")]
    #[test_case(vec![(5.0, 5.0)], true; "single point")]
    #[test_case(vec![], false; "empty")]
    fn linestring_in_square(ls: Vec<(f64, f64)>, expected: bool) {
        let within = linestring_within_ring(&ls.into(), &square(), &WINDING).unwrap();
        assert_eq!(within, expected);
    }

    #[test_case(vec![(1, 1), (8, 1)], true; "along the bottom")]
    #[test_case(vec![(1, 8), (8, 8)], false; "across the notch")]
    #[test_case(vec![(2, 2), (4, 4)], false; "through a reflex vertex")]
    #[test_case(vec![(1, 1), (3, 3), (6, 3), (8, 1)], true; "along the notch floor")]
    fn linestring_in_notched_ring(ls: Vec<(i64, i64)>, expected: bool) {
        let within = linestring_within_ring(&ls.into(), &notched(), &WINDING).unwrap();
        assert_eq!(within, expected);
    }

    #[test]
    fn holes_are_outside() {
        let hole: Ring<f64> = vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)].into();
        let polygon = Polygon::new(square(), vec![hole]);

        let below: Linestring<f64> = vec![(1.0, 1.0), (9.0, 1.0)].into();
        let through: Linestring<f64> = vec![(1.0, 5.0), (9.0, 5.0)].into();
        let around: Linestring<f64> = vec![(1.0, 1.0), (4.0, 4.0), (6.0, 4.0)].into();

        assert!(linestring_within_polygon(&below, &polygon, &WINDING).unwrap());
        assert!(!linestring_within_polygon(&through, &polygon, &WINDING).unwrap());
        assert!(linestring_within_polygon(&around, &polygon, &WINDING).unwrap());
    }

    #[test]
    fn doubling_large_integral_coordinates() {
        let big = 2_000_000_000_i32;
        let ring: Ring<i32> = vec![(0, 0), (big, 0), (big, big), (0, big)].into();
        let ls: Linestring<i32> = vec![(10, 10), (20, 20)].into();

        let err = linestring_within_ring(&ls, &ring, &WINDING).unwrap_err();
        assert!(matches!(err.downcast_ref::<WithinError>(), Some(WithinError::Overflow { .. })));

        //the same configuration fits once widened
        let ring: Ring<i64> = vec![(0, 0), (2_000_000_000, 0), (2_000_000_000, 2_000_000_000), (0, 2_000_000_000)].into();
        let ls: Linestring<i64> = vec![(10, 10), (20, 20)].into();
        assert!(linestring_within_ring(&ls, &ring, &WINDING).unwrap());
    }

    #[test]
    fn midpoints_near_the_doubled_limit() {
        //doubled coordinates reach i32::MAX - 1, their sum would not fit
        let top = i32::MAX / 2;
        let ring: Ring<i32> = vec![(0, 0), (top, 0), (top, top), (0, top)].into();
        let ls: Linestring<i32> = vec![(top - 10, 5), (top - 2, 5)].into();
        assert!(linestring_within_ring(&ls, &ring, &WINDING).unwrap());
    }
}
