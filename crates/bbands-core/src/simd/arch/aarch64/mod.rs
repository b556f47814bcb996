//! AArch64 SIMD implementation

pub mod neon;
