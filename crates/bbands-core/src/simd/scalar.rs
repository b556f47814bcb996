//! Scalar fallback implementations of the window reductions.
//!
//! These are the reference results every platform kernel is tested against,
//! and the implementation used when no SIMD acceleration is available.

use crate::types::Float;

/// Calculate the sum of all elements in a slice using scalar operations.
///
/// # Examples
///
/// ```rust
/// use bbands_core::simd::scalar::sum;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(sum(&data), 15.0);
/// ```
#[inline]
pub fn sum(data: &[Float]) -> Float {
    data.iter().sum()
}

/// Sum of squared deviations of `data` around `mean`.
///
/// Dividing the result by `data.len() - 1` gives the sample variance when
/// `mean` is the window's own average.
///
/// # Examples
///
/// ```rust
/// use bbands_core::simd::scalar::sum_sq_dev;
///
/// let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(sum_sq_dev(&data, 5.0), 32.0);
/// ```
#[inline]
pub fn sum_sq_dev(data: &[Float], mean: Float) -> Float {
    data.iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty() {
        let data: Vec<Float> = vec![];
        assert_eq!(sum(&data), 0.0);
    }

    #[test]
    fn test_sum_with_negatives() {
        let data = vec![1.0, -2.0, 3.0, -4.0, 5.0];
        assert_eq!(sum(&data), 3.0);
    }

    #[test]
    fn test_sum_propagates_nan() {
        let data = vec![1.0, Float::NAN, 3.0];
        assert!(sum(&data).is_nan());
    }

    #[test]
    fn test_sum_sq_dev_constant_is_zero() {
        let data = vec![7.25; 20];
        assert_eq!(sum_sq_dev(&data, 7.25), 0.0);
    }

    #[test]
    fn test_sum_sq_dev_single() {
        assert_eq!(sum_sq_dev(&[3.0], 1.0), 4.0);
    }

    #[test]
    fn test_sum_sq_dev_empty() {
        assert_eq!(sum_sq_dev(&[], 1.0), 0.0);
    }

    #[test]
    fn test_sum_sq_dev_linear_window() {
        // 100..=119 around 109.5: 2 * (0.5^2 + 1.5^2 + ... + 9.5^2) = 665
        let data: Vec<Float> = (100..120).map(|v| v as Float).collect();
        assert!((sum_sq_dev(&data, 109.5) - 665.0).abs() < 1e-9);
    }
}
