use anyhow::Result;
use log::debug;

use crate::geometry::point_in_geometry;
use crate::geometry::primitives::Linestring;
use crate::overlay::{Method, Operation, Turn, get_turns};
use crate::robustness::{Recalculate, RescalePolicy, RobustPolicy, get_rescale_policy2};
use crate::within::Strategy;

/// Whether `ls1` lies within `ls2`.
///
/// Floating point input is rescaled onto an integer grid covering both linestrings
/// before the turns between them are computed, integral input is used as is.
pub fn linestring_within_linestring<T>(ls1: &Linestring<T>, ls2: &Linestring<T>, strategy: &Strategy) -> Result<bool>
where
    T: RobustPolicy<2>,
{
    if let Some(within) = trivial_case(ls1, ls2, strategy)? {
        return Ok(within);
    }
    let policy = get_rescale_policy2(ls1, ls2)?;
    classify(ls1, ls2, &policy, strategy)
}

/// Like [`linestring_within_linestring`], with an explicit rescale policy.
pub fn linestring_within_linestring_with_policy<T, P>(
    ls1: &Linestring<T>,
    ls2: &Linestring<T>,
    policy: &P,
    strategy: &Strategy,
) -> Result<bool>
where
    T: RobustPolicy<2>,
    P: RescalePolicy<T, 2>,
{
    match trivial_case(ls1, ls2, strategy)? {
        Some(within) => Ok(within),
        None => classify(ls1, ls2, policy, strategy),
    }
}

/// Decides the cases where one of the linestrings has too few points to compute turns.
fn trivial_case<T: RobustPolicy<2>>(
    ls1: &Linestring<T>,
    ls2: &Linestring<T>,
    strategy: &Strategy,
) -> Result<Option<bool>> {
    match (ls1.points(), ls2.len()) {
        ([], _) | (_, 0) | (_, 1) => Ok(Some(false)),
        ([point], _) => {
            Ok(Some(point_in_geometry(point, ls2, strategy)?.is_interior()))
        }
        _ => Ok(None),
    }
}

fn classify<T, P>(ls1: &Linestring<T>, ls2: &Linestring<T>, policy: &P, strategy: &Strategy) -> Result<bool>
where
    T: RobustPolicy<2>,
    P: RescalePolicy<T, 2>,
{
    let turns = get_turns(ls1, ls2, policy);
    let turns_allow = analyse_turns(&turns);

    //sizes are checked beforehand, both linestrings have a first and last point.
    //The end points are located on the grid the turns were computed on.
    let ends_covered = || -> Result<bool> {
        let robust2 = ls2.recalculate(policy)?;
        for end in [ls1.first(), ls1.last()].into_iter().flatten() {
            if !point_in_geometry(&end.recalculate(policy)?, &robust2, strategy)?.is_covered() {
                return Ok(false);
            }
        }
        Ok(true)
    };
    let within = turns_allow && ends_covered()?;

    debug!(
        "[LL] {} turns, turns allow containment: {turns_allow}, within: {within}",
        turns.len()
    );
    Ok(within)
}

/// Decides, from the turns alone, whether the first linestring can lie within the second.
///
/// A crossing rules containment out. A touch only supports it when both sides
/// continue along each other or both end there, any other touch rules it out.
/// Equal and collinear turns support containment. Other methods are ignored.
/// Without a single supporting turn the answer is `false`.
pub fn analyse_turns(turns: &[Turn]) -> bool {
    let mut has_turns = false;
    for turn in turns {
        match turn.method {
            Method::Crosses => return false,
            Method::Touch | Method::TouchInterior => {
                if turn.both(Operation::Continue) || turn.both(Operation::Blocked) {
                    has_turns = true;
                } else {
                    return false;
                }
            }
            Method::Equal | Method::Collinear => has_turns = true,
            Method::None | Method::Disjoint | Method::Error => {}
        }
    }
    has_turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_enums::{CoordSystem, GeoPosition};
    use crate::overlay::{SegmentId, TurnOperation};
    use crate::robustness::NoRescale;
    use test_case::test_case;

    const WINDING: Strategy = Strategy::Winding(CoordSystem::Cartesian);

    fn turn(method: Method, op1: Operation, op2: Operation) -> Turn {
        Turn {
            method,
            operations: [
                TurnOperation {
                    operation: op1,
                    seg_id: SegmentId::new(0, 0),
                },
                TurnOperation {
                    operation: op2,
                    seg_id: SegmentId::new(1, 0),
                },
            ],
        }
    }

    #[test]
    fn no_turns_no_containment() {
        assert!(!analyse_turns(&[]));
        assert!(!analyse_turns(&[
            turn(Method::None, Operation::None, Operation::None),
            turn(Method::Disjoint, Operation::None, Operation::None),
            turn(Method::Error, Operation::None, Operation::None),
        ]));
    }

    #[test]
    fn crossing_overrides_evidence() {
        let turns = [
            turn(Method::Equal, Operation::Continue, Operation::Continue),
            turn(Method::Crosses, Operation::Union, Operation::Intersection),
        ];
        assert!(!analyse_turns(&turns));
    }

    #[test_case(Operation::Continue, Operation::Continue, true; "continue continue")]
    #[test_case(Operation::Blocked, Operation::Blocked, true; "blocked blocked")]
    #[test_case(Operation::Blocked, Operation::Continue, false; "blocked continue")]
    #[test_case(Operation::Union, Operation::Intersection, false; "leaving")]
    fn touch_operations(op1: Operation, op2: Operation, expected: bool) {
        assert_eq!(analyse_turns(&[turn(Method::Touch, op1, op2)]), expected);
        assert_eq!(analyse_turns(&[turn(Method::TouchInterior, op1, op2)]), expected);
    }

    #[test]
    fn rejected_touch_is_not_rescued_by_collinear_evidence() {
        let turns = [
            turn(Method::Collinear, Operation::Continue, Operation::Continue),
            turn(Method::Touch, Operation::Union, Operation::Continue),
            turn(Method::Equal, Operation::Continue, Operation::Continue),
        ];
        assert!(!analyse_turns(&turns));
    }

    #[test]
    fn order_does_not_matter() {
        let mut turns = vec![
            turn(Method::Collinear, Operation::Continue, Operation::Continue),
            turn(Method::Disjoint, Operation::None, Operation::None),
            turn(Method::TouchInterior, Operation::Continue, Operation::Continue),
        ];
        let forward = analyse_turns(&turns);
        turns.reverse();
        assert_eq!(forward, analyse_turns(&turns));
        assert!(forward);
    }

    #[test_case(vec![], vec![(0.0, 0.0), (1.0, 0.0)], false; "first empty")]
    #[test_case(vec![(0.0, 0.0), (1.0, 0.0)], vec![], false; "second empty")]
    #[test_case(vec![(0.0, 0.0), (1.0, 0.0)], vec![(0.0, 0.0)], false; "second single point")]
    #[test_case(vec![(0.5, 0.0)], vec![(0.0, 0.0), (1.0, 0.0)], true; "single point in interior")]
    #[test_case(vec![(0.0, 0.0)], vec![(0.0, 0.0), (1.0, 0.0)], false; "single point on boundary")]
    fn degenerate_sizes(ls1: Vec<(f64, f64)>, ls2: Vec<(f64, f64)>, expected: bool) {
        let result = linestring_within_linestring(&ls1.into(), &ls2.into(), &WINDING).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn sub_linestring() {
        let ls1: Linestring<f64> = vec![(2.0, 0.0), (8.0, 0.0)].into();
        let ls2: Linestring<f64> = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)].into();
        assert!(linestring_within_linestring(&ls1, &ls2, &WINDING).unwrap());
        assert!(!linestring_within_linestring(&ls2, &ls1, &WINDING).unwrap());
    }

    #[test]
    fn leaving_and_returning() {
        let ls1: Linestring<i64> = vec![(0, 0), (2, 0), (2, 3), (6, 3), (6, 0), (10, 0)].into();
        let ls2: Linestring<i64> = vec![(0, 0), (10, 0)].into();
        assert!(!linestring_within_linestring(&ls1, &ls2, &WINDING).unwrap());
    }

    #[test_case(vec![(0, 0), (5, 0), (5, 5), (5, 0), (10, 0)]; "spur off the middle")]
    #[test_case(vec![(0, 0), (10, 0), (10, 5), (10, 0)]; "spur off the end")]
    #[test_case(vec![(0, 0), (5, 5), (10, 0)]; "arch between the ends")]
    #[test_case(vec![(0, 0), (5, 5), (5, 0)]; "bent back onto the interior")]
    fn excursions_off_the_container(ls1: Vec<(i64, i64)>) {
        let ls2: Linestring<i64> = vec![(0, 0), (10, 0)].into();
        assert!(!linestring_within_linestring(&ls1.into(), &ls2, &WINDING).unwrap());
    }

    #[test]
    fn ends_meeting_on_a_common_line() {
        let ls2: Linestring<i64> = vec![(0, 0), (10, 0)].into();
        let inner: Linestring<i64> = vec![(5, 0), (10, 0)].into();
        assert!(linestring_within_linestring(&inner, &ls2, &WINDING).unwrap());

        let beyond: Linestring<i64> = vec![(10, 0), (15, 0)].into();
        assert!(!linestring_within_linestring(&beyond, &ls2, &WINDING).unwrap());
    }

    #[test]
    fn end_points_are_located_on_the_grid() {
        //the first end lies just past the container, its rescaled position is the container's end
        let ls1: Linestring<f64> = vec![(0.0, 0.0), (10.000000001, 0.0)].into();
        let ls2: Linestring<f64> = vec![(0.0, 0.0), (10.0, 0.0)].into();
        assert_eq!(point_in_geometry(&ls1.points()[1], &ls2, &WINDING).unwrap(), GeoPosition::Exterior);
        assert!(linestring_within_linestring(&ls1, &ls2, &WINDING).unwrap());
    }

    #[test]
    fn explicit_policy() {
        let ls1: Linestring<i64> = vec![(0, 0), (10, 0)].into();
        let ls2: Linestring<i64> = vec![(-5, 0), (20, 0)].into();
        assert!(linestring_within_linestring_with_policy(&ls1, &ls2, &NoRescale, &WINDING).unwrap());
    }
}
