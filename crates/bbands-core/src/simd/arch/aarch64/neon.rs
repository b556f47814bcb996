use crate::simd::types::Lanes;
use crate::types::Float;

#[cfg(not(feature = "f32"))]
type SimdVec = wide::f64x2;

#[cfg(feature = "f32")]
type SimdVec = wide::f32x4;

const LANES: usize = Lanes::NEON;

#[inline(always)]
fn load(chunk: &[Float]) -> SimdVec {
    let mut lanes = [0.0 as Float; LANES];
    lanes.copy_from_slice(chunk);
    SimdVec::new(lanes)
}

#[inline(never)]
#[target_feature(enable = "neon")]
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
#[target_feature(enable = "neon")]
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
