use std::cmp::Ordering;

use itertools::Itertools;
use log::trace;

use crate::geometry::Coordinate;
use crate::geometry::primitives::{Linestring, Point, Segment};
use crate::overlay::{Method, Operation, SegmentId, Turn, TurnOperation};
use crate::robustness::RescalePolicy;
use crate::util::assertions;

/// Enumerates the turns between `ls1` and `ls2`.
///
/// Both linestrings are mapped through `policy` first, all predicates are evaluated on the mapped coordinates.
/// Zero-length segments are skipped.
///
/// Proper crossings and collinear overlaps are reported per pair of segments.
/// Touches are reported once per contact point, wherever the first linestring has a piece that does not run along the second.
/// A contact point at which the first linestring only runs along the second is covered by the collinear turns.
pub fn get_turns<T, P>(ls1: &Linestring<T>, ls2: &Linestring<T>, policy: &P) -> Vec<Turn>
where
    T: Coordinate,
    P: RescalePolicy<T, 2>,
{
    let path1 = RobustPath::new(ls1, policy);
    let path2 = RobustPath::new(ls2, policy);

    let mut turns = vec![];
    let mut contacts: Vec<Point<P::Robust>> = vec![];

    for (i, p) in path1.segments.iter() {
        for (j, q) in path2.segments.iter() {
            if !p.bbox().overlaps(&q.bbox()) {
                continue;
            }
            let classified = match intersect(p, q) {
                Intersection::None => None,
                Intersection::Crossing => Some((
                    Method::Crosses,
                    [leaving_operation(q, &p.end), leaving_operation(p, &q.end)],
                )),
                Intersection::Overlap(method, op) => Some((method, [op, op])),
                Intersection::Contact(t) if contacts.contains(&t) => None,
                Intersection::Contact(t) => {
                    contacts.push(t);
                    classify_touch(&path1, p, &path2, q, &t)
                }
                Intersection::Unclassified => Some((Method::Error, [Operation::None; 2])),
            };

            if let Some((method, [op1, op2])) = classified {
                let turn = Turn {
                    method,
                    operations: [
                        TurnOperation {
                            operation: op1,
                            seg_id: SegmentId::new(0, *i),
                        },
                        TurnOperation {
                            operation: op2,
                            seg_id: SegmentId::new(1, *j),
                        },
                    ],
                };
                trace!("[GT] {p:?} x {q:?}: {turn:?}");
                turns.push(turn);
            }
        }
    }

    debug_assert!(assertions::turns_reference_valid_segments(
        &turns,
        [ls1.len().saturating_sub(1), ls2.len().saturating_sub(1)]
    ));
    turns
}

/// Non-degenerate segments of a mapped linestring, each paired with its index in the input
struct RobustPath<R> {
    segments: Vec<(usize, Segment<R>)>,
    closed: bool,
}

impl<R: Coordinate> RobustPath<R> {
    fn new<T, P>(ls: &Linestring<T>, policy: &P) -> Self
    where
        T: Coordinate,
        P: RescalePolicy<T, 2, Robust = R>,
    {
        let points = ls.points().iter().map(|p| policy.robust_point(p)).collect_vec();
        let segments = points
            .iter()
            .tuple_windows()
            .map(|(s, e)| Segment::new(*s, *e))
            .enumerate()
            .filter(|(_, s)| !s.is_degenerate())
            .collect_vec();
        let closed = points.len() > 1 && points.first() == points.last();

        Self { segments, closed }
    }

    /// Whether the path ends at `t`
    fn is_terminal(&self, t: &Point<R>) -> bool {
        let first = self.segments.first().map(|(_, s)| s.start);
        let last = self.segments.last().map(|(_, s)| s.end);
        !self.closed && (first.as_ref() == Some(t) || last.as_ref() == Some(t))
    }

    /// Far ends of the pieces of the path leaving `t`, outgoing pieces first
    fn pieces_at(&self, t: &Point<R>) -> Vec<Point<R>> {
        let incident = self.segments.iter().map(|(_, s)| s).filter(|s| s.contains(t)).collect_vec();
        let outgoing = incident.iter().filter(|s| s.end != *t).map(|s| s.end);
        let incoming = incident.iter().filter(|s| s.start != *t).map(|s| s.start);
        outgoing.chain(incoming).collect()
    }

    /// Whether the piece `t -> o` overlaps a segment of the path over a positive length
    fn runs_along(&self, t: &Point<R>, o: &Point<R>) -> bool {
        let piece = Segment::new(*t, *o);
        self.segments
            .iter()
            .map(|(_, s)| s)
            .filter(|s| s.contains(t))
            .any(|s| s.is_collinear_with(&piece) && has_positive_overlap(s, &piece))
    }

    /// First piece of the path at `t` that does not run along `other`
    fn branch_at(&self, t: &Point<R>, other: &RobustPath<R>) -> Option<Point<R>> {
        self.pieces_at(t).into_iter().find(|o| !other.runs_along(t, o))
    }

    /// Whether the path ends at `t` with a segment on the line of a segment of `other` through `t`
    fn ends_along(&self, t: &Point<R>, other: &RobustPath<R>) -> bool {
        if !self.is_terminal(t) {
            return false;
        }
        let terminal = [self.segments.first(), self.segments.last()]
            .into_iter()
            .flatten()
            .map(|(_, s)| s)
            .filter(|s| s.is_endpoint(t));
        terminal
            .cartesian_product(other.segments.iter().map(|(_, s)| s).filter(|s| s.contains(t)))
            .any(|(s, o)| s.is_collinear_with(o))
    }
}

enum Intersection<R> {
    None,
    Crossing,
    Overlap(Method, Operation),
    Contact(Point<R>),
    Unclassified,
}

fn intersect<R: Coordinate>(p: &Segment<R>, q: &Segment<R>) -> Intersection<R> {
    use Ordering::*;

    let [p_q1, p_q2] = [p.side_of(&q.start), p.side_of(&q.end)];
    let [q_p1, q_p2] = [q.side_of(&p.start), q.side_of(&p.end)];

    if [p_q1, p_q2, q_p1, q_p2].iter().all(|&o| o == Equal) {
        return intersect_collinear(p, q);
    }
    if (p_q1 == p_q2 && p_q1 != Equal) || (q_p1 == q_p2 && q_p1 != Equal) {
        //one segment lies strictly on one side of the other
        return Intersection::None;
    }
    if [p_q1, p_q2, q_p1, q_p2].iter().all(|&o| o != Equal) {
        return Intersection::Crossing;
    }

    [p.start, p.end, q.start, q.end]
        .into_iter()
        .find(|t| p.contains(t) && q.contains(t))
        .map_or(Intersection::Unclassified, Intersection::Contact)
}

fn intersect_collinear<R: Coordinate>(p: &Segment<R>, q: &Segment<R>) -> Intersection<R> {
    let ax = p.dominant_axis();
    let (lo, hi) = projected_overlap(p, q, ax);

    match lo.partial_cmp(&hi) {
        Some(Ordering::Less) => {
            let same_direction = (p.end.get(ax) > p.start.get(ax)) == (q.end.get(ax) > q.start.get(ax));
            let op = match same_direction {
                true => Operation::Continue,
                false => Operation::Opposite,
            };
            let identical = (p.start == q.start && p.end == q.end) || (p.start == q.end && p.end == q.start);
            let method = match identical {
                true => Method::Equal,
                false => Method::Collinear,
            };
            Intersection::Overlap(method, op)
        }
        Some(Ordering::Equal) => [p.start, p.end]
            .into_iter()
            .find(|t| t.get(ax) == lo)
            .map_or(Intersection::Unclassified, Intersection::Contact),
        _ => Intersection::None,
    }
}

fn classify_touch<R: Coordinate>(
    path1: &RobustPath<R>,
    p: &Segment<R>,
    path2: &RobustPath<R>,
    q: &Segment<R>,
    t: &Point<R>,
) -> Option<(Method, [Operation; 2])> {
    //without a piece off the second linestring, the contact is part of a collinear run
    let branch1 = path1.branch_at(t, path2)?;
    let branch2 = path2.branch_at(t, path1);

    let method = match p.is_endpoint(t) && q.is_endpoint(t) {
        true => Method::Touch,
        false => Method::TouchInterior,
    };
    let op1 = match path1.ends_along(t, path2) {
        true => Operation::Blocked,
        false => leaving_operation(q, &branch1),
    };
    let op2 = match (path2.ends_along(t, path1), branch2) {
        (true, _) => Operation::Blocked,
        (false, Some(branch2)) => leaving_operation(p, &branch2),
        //the second linestring passes straight through
        (false, None) => Operation::Continue,
    };
    Some((method, [op1, op2]))
}

/// [`Operation::Union`] when `towards` lies left of (or on the line through) `other`, [`Operation::Intersection`] otherwise
fn leaving_operation<R: Coordinate>(other: &Segment<R>, towards: &Point<R>) -> Operation {
    match other.side_of(towards) {
        Ordering::Less => Operation::Intersection,
        _ => Operation::Union,
    }
}

/// Overlap of the projections of two collinear segments onto axis `ax`, empty when `lo > hi`
fn projected_overlap<R: Coordinate>(a: &Segment<R>, b: &Segment<R>, ax: usize) -> (R, R) {
    let (a0, a1) = ordered(a.start.get(ax), a.end.get(ax));
    let (b0, b1) = ordered(b.start.get(ax), b.end.get(ax));
    (a0.max_coord(b0), a1.min_coord(b1))
}

fn has_positive_overlap<R: Coordinate>(a: &Segment<R>, b: &Segment<R>) -> bool {
    let (lo, hi) = projected_overlap(a, b, a.dominant_axis());
    lo < hi
}

fn ordered<R: Coordinate>(v1: R, v2: R) -> (R, R) {
    (v1.min_coord(v2), v1.max_coord(v2))
}
