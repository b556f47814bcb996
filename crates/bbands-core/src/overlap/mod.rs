//! Overlap Studies indicators
//!
//! Indicators plotted on the same axis as the price bars:
//! - Simple Moving Average (SMA)
//! - Bollinger Bands, built on the SMA and the rolling standard deviation

mod bollinger;
pub(crate) mod sma;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use sma::{rolling_sma, Sma};
