mod coordinate;

/// Set of enums representing geometric kinds, positions and coordinate systems
pub mod geo_enums;

/// Set of traits shared by the geometric primitives
pub mod geo_traits;

/// Locating a point relative to a linestring, ring or polygon
pub mod point_in_geometry;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod variant;

#[doc(inline)]
pub use coordinate::Coordinate;

#[doc(inline)]
pub use point_in_geometry::point_in_geometry;

#[doc(inline)]
pub use variant::{Geometry, GeometryRef};
