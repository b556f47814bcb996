//! Floating-point configuration and the engine's data model
//!
//! `Float` can be switched between `f32` and `f64` using cargo features.
//! Default is `f64`.
//!
//! # Features
//!
//! - `f64` (default): Use double-precision floating-point
//! - `f32`: Use single-precision floating-point
//!
//! # Example
//!
//! ```rust
//! use bbands_core::types::{BandPoint, Float};
//!
//! let point = BandPoint::undefined(1_700_000_000_000);
//! assert!(point.basis.is_nan());
//! let x: Float = 1.0;
//! assert_eq!(x + 2.0, 3.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Floating-point type used throughout the library
///
/// When `f32` feature is enabled, this is `f32` (single-precision).
/// Otherwise, defaults to `f64` (double-precision).
#[cfg(feature = "f32")]
pub type Float = f32;

/// Floating-point type used throughout the library
///
/// When `f32` feature is NOT enabled, this is `f64` (double-precision).
/// This is the default configuration.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// One OHLCV bar.
///
/// Sequences are expected in ascending `timestamp` order. The engine never
/// re-sorts them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Observation {
    /// Bar time in milliseconds since the epoch
    pub timestamp: Timestamp,
    /// Opening price
    pub open: Float,
    /// Highest price
    pub high: Float,
    /// Lowest price
    pub low: Float,
    /// Closing price
    pub close: Float,
    /// Traded volume
    pub volume: Float,
}

impl Observation {
    /// Creates an observation from its six fields.
    pub fn new(
        timestamp: Timestamp,
        open: Float,
        high: Float,
        low: Float,
        close: Float,
        volume: Float,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// The three bands at one time step.
///
/// `Float::NAN` in any field means "no value": either not enough history
/// had been seen, or the offset shift left this slot without a source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandPoint {
    /// Timestamp of the observation this point is paired with
    pub timestamp: Timestamp,
    /// Middle band (simple moving average)
    pub basis: Float,
    /// `basis + multiplier * stddev`
    pub upper: Float,
    /// `basis - multiplier * stddev`
    pub lower: Float,
}

impl BandPoint {
    /// A point with all three bands missing.
    pub fn undefined(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            basis: Float::NAN,
            upper: Float::NAN,
            lower: Float::NAN,
        }
    }

    /// `true` when basis, upper and lower all carry a value.
    pub fn is_defined(&self) -> bool {
        !(self.basis.is_nan() || self.upper.is_nan() || self.lower.is_nan())
    }
}
