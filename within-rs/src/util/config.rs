use serde::{Deserialize, Serialize};

/// How the rescale multiplier is derived from `range / max_extent`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round to the nearest integer
    #[default]
    Nearest,
    /// Drop the fractional part
    Truncate,
    /// Keep the exact quotient
    Exact,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Nearest => value.round(),
            Rounding::Truncate => value.trunc(),
            Rounding::Exact => value,
        }
    }
}

///Configuration of the rescaling onto the integer grid
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RescaleConfig {
    ///Width of the integer range the envelope is mapped onto. Rescaled coordinates lie within `[-range/2, range/2]`
    pub range: f64,
    ///Rounding applied to the multiplier
    #[serde(default)]
    pub rounding: Rounding,
}

impl RescaleConfig {
    /// Configuration used when rescaling a group of geometries at once
    pub fn zoom() -> Self {
        Self {
            range: 1_000_000_000.0,
            rounding: Rounding::Truncate,
        }
    }

    /// Half of the range, the magnitude of the integer origin
    pub fn half_range(&self) -> f64 {
        self.range / 2.0
    }
}

impl Default for RescaleConfig {
    fn default() -> Self {
        Self {
            range: 10_000_000.0,
            rounding: Rounding::Nearest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_modes() {
        assert_eq!(Rounding::Nearest.apply(2.5), 3.0);
        assert_eq!(Rounding::Truncate.apply(2.9), 2.0);
        assert_eq!(Rounding::Exact.apply(2.9), 2.9);
    }

    #[test]
    fn config_from_json() {
        let config: RescaleConfig = serde_json::from_str(r#"{"range": 1000.0}"#).unwrap();
        assert_eq!(config.range, 1000.0);
        assert_eq!(config.rounding, Rounding::Nearest);
    }
}
