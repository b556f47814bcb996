//! Indicator parameters and their validation
//!
//! [`Parameters`] carries exactly the inputs a host exposes to its users:
//! window length, price source, standard-deviation multiplier, offset and
//! moving-average kind. The engine ships no default preset; hosts own that.
//!
//! With the `serde` feature the field names follow the host's JSON shape:
//!
//! ```json
//! { "length": 20, "maType": "SMA", "source": "close", "stdDevMultiplier": 2, "offset": 0 }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BandsError, Result};
use crate::types::Float;

/// Which price field of an observation feeds the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", from = "String"))]
pub enum Source {
    /// Opening price
    Open,
    /// Highest price
    High,
    /// Lowest price
    Low,
    /// Closing price
    #[default]
    Close,
}

impl Source {
    /// Parses a selector, falling back to [`Source::Close`] for anything
    /// unrecognised. Matching is case-insensitive.
    ///
    /// ```rust
    /// use bbands_core::params::Source;
    ///
    /// assert_eq!(Source::parse_lossy("HIGH"), Source::High);
    /// assert_eq!(Source::parse_lossy("hl2"), Source::Close);
    /// ```
    pub fn parse_lossy(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "open" => Source::Open,
            "high" => Source::High,
            "low" => Source::Low,
            _ => Source::Close,
        }
    }

    /// Lowercase selector name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Open => "open",
            Source::High => "high",
            Source::Low => "low",
            Source::Close => "close",
        }
    }
}

impl From<String> for Source {
    fn from(selector: String) -> Self {
        Source::parse_lossy(&selector)
    }
}

impl From<&str> for Source {
    fn from(selector: &str) -> Self {
        Source::parse_lossy(selector)
    }
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moving-average kind used for the basis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaType {
    /// Simple moving average
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "SMA"))]
    Sma,
}

/// Bollinger Bands inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Parameters {
    /// Window size shared by the moving average and the deviation
    pub length: usize,
    /// Price field to read from each observation
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Source,
    /// Band half-width in standard deviations
    pub std_dev_multiplier: Float,
    /// Bars to shift the bands by; positive moves them later in time
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: isize,
    /// Basis moving-average kind
    #[cfg_attr(feature = "serde", serde(default))]
    pub ma_type: MaType,
}

impl Parameters {
    /// Builds a parameter set with [`MaType::Sma`]. Nothing is checked here;
    /// see [`Parameters::validate`].
    pub fn new(length: usize, source: Source, std_dev_multiplier: Float, offset: isize) -> Self {
        Self {
            length,
            source,
            std_dev_multiplier,
            offset,
            ma_type: MaType::Sma,
        }
    }

    /// Replaces the offset.
    pub fn with_offset(mut self, offset: isize) -> Self {
        self.offset = offset;
        self
    }

    /// Replaces the source field.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Checks the structural rules every computation relies on.
    ///
    /// # Errors
    ///
    /// - [`BandsError::InvalidLength`] when `length` is zero
    /// - [`BandsError::InvalidParameter`] when `std_dev_multiplier` is NaN,
    ///   infinite or negative
    ///
    /// Any offset, and a length longer than the input, are accepted; they
    /// only produce NaN slots.
    pub fn validate(&self) -> Result<()> {
        validate_length(self.length)?;
        let m = self.std_dev_multiplier;
        if !m.is_finite() || m < 0.0 {
            log::debug!("rejecting std_dev_multiplier {}", m);
            return Err(BandsError::invalid_parameter(
                "stdDevMultiplier".to_string(),
                format!("{}", m),
                "a finite value >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rejects a zero window length.
pub(crate) fn validate_length(length: usize) -> Result<()> {
    if length == 0 {
        log::debug!("rejecting window length 0");
        return Err(BandsError::invalid_length(
            length,
            "length must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lossy_known_selectors() {
        assert_eq!(Source::parse_lossy("open"), Source::Open);
        assert_eq!(Source::parse_lossy("high"), Source::High);
        assert_eq!(Source::parse_lossy("Low"), Source::Low);
        assert_eq!(Source::parse_lossy(" close "), Source::Close);
    }

    #[test]
    fn test_parse_lossy_falls_back_to_close() {
        assert_eq!(Source::parse_lossy(""), Source::Close);
        assert_eq!(Source::parse_lossy("volume"), Source::Close);
        assert_eq!(Source::from("ohlc4"), Source::Close);
    }

    #[test]
    fn test_source_display_round_trips_through_parse() {
        for s in [Source::Open, Source::High, Source::Low, Source::Close] {
            assert_eq!(Source::parse_lossy(&s.to_string()), s);
        }
    }

    #[test]
    fn test_validate_accepts_typical_inputs() {
        assert!(Parameters::new(20, Source::Close, 2.0, 0).validate().is_ok());
        assert!(Parameters::new(1, Source::Open, 0.0, -7).validate().is_ok());
        assert!(Parameters::new(500, Source::High, 3.5, 1000).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let err = Parameters::new(0, Source::Close, 2.0, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, BandsError::InvalidLength { length: 0, .. }));
    }

    #[test]
    fn test_validate_rejects_bad_multipliers() {
        for m in [-0.5, Float::NAN, Float::INFINITY, Float::NEG_INFINITY] {
            let err = Parameters::new(20, Source::Close, m, 0)
                .validate()
                .unwrap_err();
            match err {
                BandsError::InvalidParameter { name, .. } => assert_eq!(name, "stdDevMultiplier"),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_builders_replace_fields() {
        let p = Parameters::new(20, Source::Close, 2.0, 0)
            .with_offset(5)
            .with_source(Source::Low);
        assert_eq!(p.offset, 5);
        assert_eq!(p.source, Source::Low);
        assert_eq!(p.ma_type, MaType::Sma);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parameters_from_host_json() {
        let json = r#"{"length":20,"maType":"SMA","source":"close","stdDevMultiplier":2,"offset":0}"#;
        let p: Parameters = serde_json::from_str(json).unwrap();
        assert_eq!(p, Parameters::new(20, Source::Close, 2.0, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_source_deserializes_to_close() {
        let json = r#"{"length":10,"source":"hlc3","stdDevMultiplier":1.5,"offset":-2}"#;
        let p: Parameters = serde_json::from_str(json).unwrap();
        assert_eq!(p.source, Source::Close);
        assert_eq!(p.offset, -2);
        assert_eq!(p.ma_type, MaType::Sma);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_negative_length_fails_to_deserialize() {
        let json = r#"{"length":-3,"source":"close","stdDevMultiplier":2,"offset":0}"#;
        assert!(serde_json::from_str::<Parameters>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parameters_serialize_with_host_field_names() {
        let v = serde_json::to_value(Parameters::new(14, Source::High, 1.0, 3)).unwrap();
        assert_eq!(v["length"], 14);
        assert_eq!(v["source"], "high");
        assert_eq!(v["stdDevMultiplier"], 1.0);
        assert_eq!(v["offset"], 3);
        assert_eq!(v["maType"], "SMA");
    }
}
