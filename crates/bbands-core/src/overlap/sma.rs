//! Implementation of the Simple Moving Average (SMA) indicator.

use crate::error::{BandsError, Result};
use crate::params::validate_length;
use crate::simd::dispatch;
use crate::traits::Indicator;
use crate::types::Float;

/// SMA indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    length: usize,
}

impl Sma {
    /// Create a new SMA indicator with the given window length.
    ///
    /// # Errors
    ///
    /// `BandsError::InvalidLength` when `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        validate_length(length)?;
        Ok(Sma { length })
    }

    /// Window length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Indicator for Sma {
    type Input = Float;

    type Output = Float;

    fn lookback(&self) -> usize {
        self.length.saturating_sub(1)
    }

    fn compute(&self, inputs: &[Self::Input], outputs: &mut [Self::Output]) -> Result<()> {
        if outputs.len() != inputs.len() {
            return Err(BandsError::length_mismatch(inputs.len(), outputs.len()));
        }
        sma_into(inputs, self.length, outputs);
        Ok(())
    }

    fn compute_to_vec(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Output>> {
        let mut result = vec![Float::NAN; inputs.len()];
        self.compute(inputs, &mut result)?;
        Ok(result)
    }
}

/// Rolling simple moving average over `values`.
///
/// Index `i` holds the mean of `values[i + 1 - length..=i]`; the first
/// `length - 1` slots, and every window touching a non-finite value, are NaN.
///
/// # Errors
///
/// `BandsError::InvalidLength` when `length` is zero.
///
/// # Example
///
/// ```rust
/// use bbands_core::overlap::rolling_sma;
///
/// let out = rolling_sma(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert!(out[0].is_nan());
/// assert_eq!(&out[1..], &[1.5, 2.5, 3.5]);
/// ```
pub fn rolling_sma(values: &[Float], length: usize) -> Result<Vec<Float>> {
    Sma::new(length)?.compute_to_vec(values)
}

/// Writes the rolling mean into `out` (same length as `values`).
///
/// Each window is summed from scratch with the dispatched SIMD reduction, so
/// a huge value leaving the window cannot leave rounding residue behind. A
/// counter of non-finite values in the window marks the windows they touch
/// as NaN.
pub(crate) fn sma_into(values: &[Float], length: usize, out: &mut [Float]) {
    debug_assert_eq!(values.len(), out.len());
    out.fill(Float::NAN);

    let n = values.len();
    if length == 0 || length > n {
        return;
    }

    let divisor = length as Float;
    let mut non_finite = 0usize;

    for i in 0..n {
        if !values[i].is_finite() {
            non_finite += 1;
        }
        if i >= length && !values[i - length].is_finite() {
            non_finite -= 1;
        }
        if i + 1 < length || non_finite > 0 {
            continue;
        }
        out[i] = dispatch::sum(&values[i + 1 - length..=i]) / divisor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_basic() {
        let sma = Sma::new(3).unwrap();
        let inputs = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.compute_to_vec(&inputs).unwrap();

        // First two values should be NaN due to insufficient data
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());

        // SMA(3) of [1,2,3] = 2.0
        assert!((result[2] - 2.0).abs() < 1e-10);
        // SMA(3) of [2,3,4] = 3.0
        assert!((result[3] - 3.0).abs() < 1e-10);
        // SMA(3) of [3,4,5] = 4.0
        assert!((result[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_lookback() {
        assert_eq!(Sma::new(5).unwrap().lookback(), 4);
        assert_eq!(Sma::new(1).unwrap().lookback(), 0);
    }

    #[test]
    fn test_sma_rejects_zero_length() {
        assert!(matches!(
            Sma::new(0),
            Err(BandsError::InvalidLength { length: 0, .. })
        ));
        assert!(rolling_sma(&[1.0], 0).is_err());
    }

    #[test]
    fn test_sma_length_one_is_identity() {
        let inputs = vec![3.0, -1.0, 0.0, 8.5];
        assert_eq!(rolling_sma(&inputs, 1).unwrap(), inputs);
    }

    #[test]
    fn test_sma_length_equal_to_input() {
        let result = rolling_sma(&[2.0, 4.0, 6.0], 3).unwrap();
        assert!(result[0].is_nan() && result[1].is_nan());
        assert_eq!(result[2], 4.0);
    }

    #[test]
    fn test_sma_length_longer_than_input_is_all_nan() {
        let result = rolling_sma(&[1.0, 2.0, 3.0], 4).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_sma_empty_input() {
        assert!(rolling_sma(&[], 20).unwrap().is_empty());
    }

    #[test]
    fn test_nan_only_poisons_windows_touching_it() {
        let inputs = vec![1.0, 2.0, Float::NAN, 4.0, 5.0, 6.0, 7.0];
        let result = rolling_sma(&inputs, 2).unwrap();
        assert!(result[0].is_nan());
        assert_eq!(result[1], 1.5);
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert_eq!(result[4], 4.5);
        assert_eq!(result[5], 5.5);
        assert_eq!(result[6], 6.5);
    }

    #[test]
    fn test_infinity_is_treated_like_nan() {
        let inputs = vec![1.0, Float::INFINITY, 3.0, 5.0];
        let result = rolling_sma(&inputs, 2).unwrap();
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert_eq!(result[3], 4.0);
    }

    #[test]
    fn test_compute_rejects_mis_sized_buffer() {
        let sma = Sma::new(2).unwrap();
        let mut out = vec![0.0; 2];
        assert_eq!(
            sma.compute(&[1.0, 2.0, 3.0], &mut out),
            Err(BandsError::length_mismatch(3, 2))
        );
    }

    #[test]
    fn test_large_value_leaves_no_residue() {
        let mut inputs = vec![1.0; 11];
        inputs[0] = 1e16;
        let result = rolling_sma(&inputs, 2).unwrap();
        for (i, v) in result.iter().enumerate().skip(2) {
            assert_eq!(*v, 1.0, "index {}", i);
        }
    }

    #[test]
    fn test_small_prices_after_bad_tick_are_exact() {
        let mut inputs = vec![0.0123; 201];
        inputs[0] = 1e9;
        let result = rolling_sma(&inputs, 20).unwrap();
        for v in &result[20..] {
            assert!((v - 0.0123).abs() <= 1e-15, "{}", v);
        }
    }

    #[test]
    fn test_windows_match_direct_mean() {
        let inputs: Vec<Float> = (0..200).map(|i| ((i * 37) % 101) as Float / 7.0).collect();
        let length = 13;
        let result = rolling_sma(&inputs, length).unwrap();
        for i in length - 1..inputs.len() {
            let window = &inputs[i + 1 - length..=i];
            let direct: Float = window.iter().sum::<Float>() / length as Float;
            assert!((result[i] - direct).abs() < 1e-9, "index {}", i);
        }
    }
}
