//! BBands-Core: the Bollinger Bands indicator engine
//!
//! A pure, stateless pipeline over an ordered slice of OHLCV observations:
//! source-field extraction, a rolling simple moving average, a rolling sample
//! standard deviation over the same windows, then band assembly with an
//! optional time shift. Output has one [`BandPoint`] per input observation.
//!
//! # Features
//!
//! - `f64` (default): Double-precision floating-point
//! - `f32`: Single-precision floating-point
//! - `serde` (default): Serialize/deserialize the data model and parameters
//!   using the host application's camelCase JSON field names
//!
//! # Modules
//!
//! - [`types`]: Floating-point type and the observation / band point model
//! - [`params`]: Parameters, price source selector, validation
//! - [`source`]: Price-field extraction
//! - [`overlap`]: Rolling SMA and Bollinger Bands
//! - [`statistic`]: Rolling sample standard deviation
//! - [`series`]: Offset shift
//! - [`simd`]: Dispatched window reductions
//!
//! # Example
//!
//! ```rust
//! use bbands_core::{bollinger_bands, Observation, Parameters, Source};
//!
//! let bars = vec![Observation::new(0, 1.0, 1.0, 1.0, 1.0, 0.0); 3];
//! let bands = bollinger_bands(&bars, &Parameters::new(20, Source::Close, 2.0, 0))?;
//! assert_eq!(bands.len(), 3);
//! assert!(bands.iter().all(|p| p.basis.is_nan()));
//! # Ok::<(), bbands_core::BandsError>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error;
pub mod overlap;
pub mod params;
pub mod series;
pub mod simd;
pub mod source;
pub mod statistic;
pub mod traits;
pub mod types;

pub use error::{BandsError, Result};
pub use overlap::{bollinger_bands, rolling_sma, BollingerBands, Sma};
pub use params::{MaType, Parameters, Source};
pub use statistic::{rolling_stddev, StdDev};
pub use traits::Indicator;
pub use types::{BandPoint, Float, Observation, Timestamp};
