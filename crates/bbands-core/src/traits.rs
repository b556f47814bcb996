//! Core traits for the band indicators
//!
//! ## NaN Value Semantics
//!
//! `Float::NAN` in an output slot always means "no value here":
//!
//! - **Warm-up**: the first `lookback()` slots, where the window is not full
//! - **Poisoned window**: any window containing a non-finite input
//! - **Offset gap**: a slot the band shift left without a source
//!
//! None of these are errors. Only structurally invalid parameters and
//! mis-sized output buffers are rejected, and always before any computation.

use crate::error::Result;

/// Unified trait for batch indicators
///
/// Two usage modes:
/// - **Into a caller buffer** (`compute`): no allocation beyond scratch space
/// - **Convenient batch computation** (`compute_to_vec`): allocates the output
///
/// Every implementation is stateless: calling either method twice on the same
/// input returns the same output, and indicators may be shared across threads.
///
/// # Example
///
/// ```rust
/// use bbands_core::{overlap::Sma, traits::Indicator};
///
/// # fn main() -> bbands_core::error::Result<()> {
/// let sma = Sma::new(3)?;
/// let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
///
/// let mut outputs = vec![0.0; prices.len()];
/// sma.compute(&prices, &mut outputs)?;
///
/// let results = sma.compute_to_vec(&prices)?;
/// assert_eq!(&results[2..], &outputs[2..]);
/// assert!(results[0].is_nan());
/// # Ok(())
/// # }
/// ```
pub trait Indicator {
    /// Input element type (`Float` for series passes, `Observation` for bands)
    type Input;

    /// Output element type
    type Output;

    /// Number of leading outputs that cannot carry a value.
    ///
    /// - `Sma::new(20)` returns 19 (first value at index 19)
    /// - `StdDev::new(20)` returns 19
    fn lookback(&self) -> usize;

    /// Writes one output per input into `outputs`.
    ///
    /// # Errors
    ///
    /// `BandsError::LengthMismatch` when `outputs.len() != inputs.len()`.
    fn compute(&self, inputs: &[Self::Input], outputs: &mut [Self::Output]) -> Result<()>;

    /// Allocates and returns one output per input.
    ///
    /// Filter warm-up slots with `is_nan()` if only defined values are needed:
    ///
    /// ```rust,ignore
    /// let valid: Vec<_> = sma.compute_to_vec(prices)?.into_iter().filter(|v| !v.is_nan()).collect();
    /// ```
    fn compute_to_vec(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Output>>;
}
