use std::cmp::Ordering;

/// Tolerance below which a floating point determinant counts as zero
const DET_EPSILON: f64 = 1e-15;

/// Floating point value compared with [`float_cmp::approx_eq!()`].
/// Used where an inexact predicate (spherical geometry) must decide on collinearity.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Sign of the value, [`Ordering::Equal`] when it is approximately zero (or NaN)
    pub fn sign(self) -> Ordering {
        match self == FPA(0.0) {
            true => Ordering::Equal,
            false => self.0.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
        }
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = DET_EPSILON, ulps = 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_has_no_sign() {
        assert_eq!(FPA(1e-17).sign(), Ordering::Equal);
        assert_eq!(FPA(-1e-17).sign(), Ordering::Equal);
        assert_eq!(FPA(1e-9).sign(), Ordering::Greater);
        assert_eq!(FPA(-0.5).sign(), Ordering::Less);
        assert_eq!(FPA(f64::NAN).sign(), Ordering::Equal);
    }
}
