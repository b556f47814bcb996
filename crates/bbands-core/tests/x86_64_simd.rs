// x86_64 SIMD integration tests
//
// The dispatched kernels must agree with the scalar reference.

#![cfg(test)]
#![cfg(target_arch = "x86_64")]

use bbands_core::simd::{self, scalar, SimdLevel};

/// Test that SIMD sum produces correct results
#[test]
fn test_sum_correctness() {
    let data: Vec<f64> = (0..1000).map(|i| i as f64).collect();
    let result = simd::sum(&data);
    let expected: f64 = data.iter().sum();
    assert!((result - expected).abs() < 1e-10);
}

/// Squared deviations over every window length a chart might use
#[test]
fn test_sum_sq_dev_matches_scalar_for_all_window_sizes() {
    let data: Vec<f64> = (0..250).map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0).collect();
    for len in 1..=data.len() {
        let window = &data[..len];
        let mean = scalar::sum(window) / len as f64;
        let got = simd::sum_sq_dev(window, mean);
        let expected = scalar::sum_sq_dev(window, mean);
        assert!(
            (got - expected).abs() <= 1e-9 * expected.max(1.0),
            "window {}: {} vs {}",
            len,
            got,
            expected
        );
    }
}

/// Test cross-path consistency
#[test]
fn test_dispatch_consistency() {
    let data: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();

    let result1 = simd::sum(&data);
    let result2 = simd::sum(&data);
    let result3 = simd::sum(&data);

    assert_eq!(result1, result2);
    assert_eq!(result2, result3);
}

#[test]
fn test_detected_level_is_x86() {
    let level = SimdLevel::detect();
    assert!(matches!(level, SimdLevel::Avx2 | SimdLevel::Scalar));
}
