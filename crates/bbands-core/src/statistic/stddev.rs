//! Rolling sample standard deviation (N - 1 denominator).

use crate::error::{BandsError, Result};
use crate::overlap::sma::sma_into;
use crate::params::validate_length;
use crate::simd::dispatch;
use crate::traits::Indicator;
use crate::types::Float;

/// Sample standard deviation over a rolling window.
///
/// A window of one value has no variance estimate, so `StdDev::new(1)`
/// produces NaN everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdDev {
    length: usize,
}

impl StdDev {
    /// Create a new rolling standard deviation with the given window length.
    ///
    /// # Errors
    ///
    /// `BandsError::InvalidLength` when `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        validate_length(length)?;
        Ok(StdDev { length })
    }

    /// Window length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Indicator for StdDev {
    type Input = Float;

    type Output = Float;

    fn lookback(&self) -> usize {
        self.length.saturating_sub(1)
    }

    fn compute(&self, inputs: &[Self::Input], outputs: &mut [Self::Output]) -> Result<()> {
        if outputs.len() != inputs.len() {
            return Err(BandsError::length_mismatch(inputs.len(), outputs.len()));
        }
        let mut means = vec![Float::NAN; inputs.len()];
        sma_into(inputs, self.length, &mut means);
        stddev_around(inputs, &means, self.length, outputs);
        Ok(())
    }

    fn compute_to_vec(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Output>> {
        let mut result = vec![Float::NAN; inputs.len()];
        self.compute(inputs, &mut result)?;
        Ok(result)
    }
}

/// Rolling sample standard deviation over `values`.
///
/// # Errors
///
/// `BandsError::InvalidLength` when `length` is zero.
///
/// # Example
///
/// ```rust
/// use bbands_core::statistic::rolling_stddev;
///
/// let out = rolling_stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 8).unwrap();
/// // sqrt(32 / 7)
/// assert!((out[7] - 2.138_089_9).abs() < 1e-5);
/// ```
pub fn rolling_stddev(values: &[Float], length: usize) -> Result<Vec<Float>> {
    StdDev::new(length)?.compute_to_vec(values)
}

/// Writes the sample standard deviation of each window into `out`, using
/// `means[i]` as the window mean.
///
/// `out[i]` is defined exactly where `means[i]` is, so a caller that
/// computed `means` with [`sma_into`] over the same window gets basis and
/// deviation that are always defined together. `length <= 1` leaves `out`
/// entirely NaN.
pub(crate) fn stddev_around(values: &[Float], means: &[Float], length: usize, out: &mut [Float]) {
    debug_assert_eq!(values.len(), means.len());
    debug_assert_eq!(values.len(), out.len());
    out.fill(Float::NAN);

    if length <= 1 || length > values.len() {
        return;
    }

    let denominator = (length - 1) as Float;
    for i in length - 1..values.len() {
        let mean = means[i];
        if mean.is_nan() {
            continue;
        }
        let window = &values[i + 1 - length..=i];
        out[i] = (dispatch::sum_sq_dev(window, mean) / denominator).sqrt();
    }
}
