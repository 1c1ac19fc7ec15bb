mod linestring;
mod point;
mod polygon;
pub(crate) mod rect;
mod ring;
mod segment;

#[doc(inline)]
pub use linestring::Linestring;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use ring::Ring;
#[doc(inline)]
pub use segment::Segment;
