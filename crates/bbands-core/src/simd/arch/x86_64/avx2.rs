use crate::simd::types::Lanes;
use crate::types::Float;

#[cfg(not(feature = "f32"))]
type SimdVec = wide::f64x4;

#[cfg(feature = "f32")]
type SimdVec = wide::f32x8;

const LANES: usize = Lanes::AVX2;

#[inline(always)]
fn load(chunk: &[Float]) -> SimdVec {
    let mut lanes = [0.0 as Float; LANES];
    lanes.copy_from_slice(chunk);
    SimdVec::new(lanes)
}

#[inline(never)]
#[target_feature(enable = "avx2")]
pub unsafe fn sum(data: &[Float]) -> Float {
    let chunks = data.chunks_exact(LANES);
    let remainder = chunks.remainder();

    let mut acc = SimdVec::ZERO;
    for chunk in chunks {
        acc += load(chunk);
    }

    let mut total = acc.reduce_add();
    for &x in remainder {
        total += x;
    }
    total
}

#[inline(never)]
#[target_feature(enable = "avx2")]
pub unsafe fn sum_sq_dev(data: &[Float], mean: Float) -> Float {
    let chunks = data.chunks_exact(LANES);
    let remainder = chunks.remainder();

    let centre = SimdVec::splat(mean);
    let mut acc = SimdVec::ZERO;
    for chunk in chunks {
        let d = load(chunk) - centre;
        acc += d * d;
    }

    let mut total = acc.reduce_add();
    for &x in remainder {
        let d = x - mean;
        total += d * d;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar;

    fn avx2_available() -> bool {
        std::is_x86_feature_detected!("avx2")
    }

    #[test]
    fn test_sum_matches_scalar() {
        if !avx2_available() {
            return;
        }
        let data: Vec<Float> = (0..1003).map(|i| (i as Float) * 0.5).collect();
        let result = unsafe { sum(&data) };
        assert!((result - scalar::sum(&data)).abs() < 1e-6);
    }

    #[test]
    fn test_sum_sq_dev_matches_scalar() {
        if !avx2_available() {
            return;
        }
        let data: Vec<Float> = (0..37).map(|i| 100.0 + (i % 7) as Float).collect();
        let result = unsafe { sum_sq_dev(&data, 103.0) };
        assert!((result - scalar::sum_sq_dev(&data, 103.0)).abs() < 1e-6);
    }

    #[test]
    fn test_empty_and_short_inputs() {
        if !avx2_available() {
            return;
        }
        unsafe {
            assert_eq!(sum(&[]), 0.0);
            assert_eq!(sum(&[42.0]), 42.0);
            assert_eq!(sum_sq_dev(&[1.0, 3.0], 2.0), 2.0);
        }
    }
}
