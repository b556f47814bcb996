//! WebAssembly SIMD implementation

pub mod simd128;
