use serde::{Deserialize, Serialize};

/// Position of a point relative to a geometry.
/// The discriminants follow the `-1 / 0 / +1` convention of point-in-geometry tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum GeoPosition {
    Exterior = -1,
    Boundary = 0,
    Interior = 1,
}

impl GeoPosition {
    /// Strictly inside, not touching the boundary
    pub fn is_interior(self) -> bool {
        self == GeoPosition::Interior
    }

    /// Inside or on the boundary
    pub fn is_covered(self) -> bool {
        self != GeoPosition::Exterior
    }
}

/// The kinds of geometry the `within` dispatcher knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoKind {
    Point,
    Box,
    Ring,
    Polygon,
    Linestring,
}

impl GeoKind {
    /// Geometries with a non-zero 2D extent (rings and polygons)
    pub fn is_areal(self) -> bool {
        matches!(self, GeoKind::Ring | GeoKind::Polygon)
    }
}

/// Coordinate system the coordinates of a geometry are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordSystem {
    /// Planar x/y coordinates
    #[default]
    Cartesian,
    /// Longitude/latitude in degrees on the unit sphere
    Spherical,
}
