use serde::{Deserialize, Serialize};

/// How each component is brought onto the integer grid.
///
/// - **Nearest**: round to the nearest representable value, ties to even.
///   Exponent selection widens the peak by `ROUND_MARGIN` so rounding can
///   never carry a component past the 18-bit range.
/// - **Truncate**: drop the fractional part (toward zero), no margin.
///   Reproduces strings packed by older encoders that truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    #[default]
    Nearest,
    Truncate,
}

impl Rounding {
    #[inline]
    pub(crate) fn apply(self, scaled: f64) -> f64 {
        match self {
            Rounding::Nearest => scaled.round_ties_even(),
            Rounding::Truncate => scaled.trunc(),
        }
    }
}

/// Encoder settings. Decoding is independent of the configuration:
/// every packed string carries its own exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub rounding: Rounding,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nearest() {
        assert_eq!(CodecConfig::default().rounding, Rounding::Nearest);
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(Rounding::Nearest.apply(2.5), 2.0);
        assert_eq!(Rounding::Nearest.apply(3.5), 4.0);
        assert_eq!(Rounding::Nearest.apply(-2.6), -3.0);
        assert_eq!(Rounding::Truncate.apply(2.9), 2.0);
        assert_eq!(Rounding::Truncate.apply(-2.9), -2.0);
    }

    #[test]
    fn test_config_serde() {
        let config = CodecConfig::new().with_rounding(Rounding::Truncate);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"rounding":"truncate"}"#);

        let back: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let empty: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CodecConfig::default());
    }
}
