use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Num, NumCast, Signed, ToPrimitive};

/// Numeric type usable as a coordinate.
///
/// Besides plain arithmetic, every coordinate type declares its *robust* counterpart:
/// the type its values are mapped to before turns are computed.
/// Floating point types are rescaled onto an `i64` grid, integral types are already robust.
pub trait Coordinate:
    Num + NumCast + Signed + Copy + PartialOrd + Debug + Send + Sync + 'static
{
    /// Coordinate type used after rescaling
    type Robust: Coordinate;

    /// Sign of the cross product `(b - a) x (c - a)`.
    ///
    /// [`Ordering::Greater`] means `c` lies to the left of the directed line `a -> b`,
    /// [`Ordering::Less`] to the right and [`Ordering::Equal`] on it.
    fn orientation(a: [Self; 2], b: [Self; 2], c: [Self; 2]) -> Ordering;

    /// `self + other`, or `None` when the sum leaves the range of the type
    fn checked_sum(self, other: Self) -> Option<Self>;

    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn min_coord(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    fn max_coord(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

macro_rules! impl_float_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            type Robust = i64;

            fn checked_sum(self, other: Self) -> Option<Self> {
                let sum = self + other;
                sum.is_finite().then_some(sum)
            }

            #[inline(always)]
            fn orientation(a: [Self; 2], b: [Self; 2], c: [Self; 2]) -> Ordering {
                let [ax, ay] = a.map(<f64 as From<$t>>::from);
                let [bx, by] = b.map(<f64 as From<$t>>::from);
                let [cx, cy] = c.map(<f64 as From<$t>>::from);
                let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
                cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
            }
        }
    )*};
}

macro_rules! impl_integral_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            type Robust = $t;

            fn checked_sum(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            //i128 keeps the products of i64 differences exact
            #[inline(always)]
            fn orientation(a: [Self; 2], b: [Self; 2], c: [Self; 2]) -> Ordering {
                let [ax, ay] = a.map(<i128 as From<$t>>::from);
                let [bx, by] = b.map(<i128 as From<$t>>::from);
                let [cx, cy] = c.map(<i128 as From<$t>>::from);
                let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
                cross.cmp(&0)
            }
        }
    )*};
}

impl_float_coordinate!(f32, f64);
impl_integral_coordinate!(i32, i64);
