//! x86_64 SIMD implementation

pub mod avx2;
