use serde::{Deserialize, Serialize};

/// How two segments meet at a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    None,
    Disjoint,
    /// The segments could not be classified
    Error,
    /// Proper crossing, interiors intersect in a single point
    Crosses,
    /// The segments meet at an end point of both
    Touch,
    /// An end point of one segment lies in the interior of the other
    TouchInterior,
    /// The segments are identical, in either direction
    Equal,
    /// The segments lie on the same line and overlap over a positive length
    Collinear,
}

/// What a linestring does after passing through a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    None,
    /// Leaves to the left of the other linestring
    Union,
    /// Leaves to the right of the other linestring
    Intersection,
    /// The linestring ends here
    Blocked,
    /// Continues along the other linestring
    Continue,
    /// Continues along the other linestring, in the opposite direction
    Opposite,
}

/// Identifies a segment: `source_index` selects the input (0 or 1), `segment_index` the segment within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId {
    pub source_index: usize,
    pub segment_index: usize,
}

impl SegmentId {
    pub fn new(source_index: usize, segment_index: usize) -> Self {
        Self {
            source_index,
            segment_index,
        }
    }
}

/// The part one of the two inputs takes in a [`Turn`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOperation {
    pub operation: Operation,
    pub seg_id: SegmentId,
}

/// Point where a segment of the first input meets a segment of the second.
/// `operations[0]` belongs to the first input, `operations[1]` to the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub method: Method,
    pub operations: [TurnOperation; 2],
}

impl Turn {
    /// Whether both inputs take `operation`
    pub fn both(&self, operation: Operation) -> bool {
        self.operations.iter().all(|o| o.operation == operation)
    }
}
