//! Strict spatial containment (`within`) for points, boxes, rings, polygons and linestrings,
//! with integer rescaling to keep the linestring predicates robust against floating point error.

/// Error taxonomy shared by all modules
pub mod error;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Intersection events (turns) between two linestrings
pub mod overlay;

/// Rescaling of floating point coordinates onto an integer grid
pub mod robustness;

/// Helper functions which do not belong to any specific module
pub mod util;

/// The `within` predicate: strategies, dispatch and the linestring algorithms
pub mod within;

#[doc(inline)]
pub use error::WithinError;
#[doc(inline)]
pub use within::{Strategy, Within, within, within_with};
