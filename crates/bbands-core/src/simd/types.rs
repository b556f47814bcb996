//! Instruction-set levels and lane counts.
//!
//! Lane counts depend on the configured [`Float`]: a 256-bit AVX2 register
//! holds four `f64` or eight `f32`.

use core::fmt;

use crate::types::Float;

/// Bits in one [`Float`].
const FLOAT_BITS: usize = core::mem::size_of::<Float>() * 8;

/// Vector instruction set the reduction kernels run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SimdLevel {
    /// Plain scalar loop
    Scalar,
    /// x86-64 AVX2, 256-bit registers
    Avx2,
    /// AArch64 NEON, 128-bit registers
    Neon,
    /// WebAssembly SIMD128, 128-bit registers
    Simd128,
}

impl SimdLevel {
    /// Best level usable on this machine.
    ///
    /// AVX2 is probed at runtime. NEON is part of the AArch64 baseline, and
    /// SIMD128 is only available when the module was built with `+simd128`.
    ///
    /// ```rust
    /// use bbands_core::simd::SimdLevel;
    ///
    /// let level = SimdLevel::detect();
    /// assert!(level.lanes() >= 1);
    /// ```
    #[inline]
    #[allow(unreachable_code)]
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::is_x86_feature_detected!("avx2") {
                return SimdLevel::Avx2;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            return SimdLevel::Neon;
        }

        #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
        {
            return SimdLevel::Simd128;
        }

        SimdLevel::Scalar
    }

    /// Register width in bits. Scalar counts as one `Float`.
    #[inline]
    pub const fn width_bits(&self) -> usize {
        match self {
            SimdLevel::Scalar => FLOAT_BITS,
            SimdLevel::Avx2 => 256,
            SimdLevel::Neon | SimdLevel::Simd128 => 128,
        }
    }

    /// `Float` values per register.
    ///
    /// ```rust
    /// use bbands_core::simd::SimdLevel;
    ///
    /// assert_eq!(SimdLevel::Scalar.lanes(), 1);
    /// # #[cfg(not(feature = "f32"))]
    /// assert_eq!(SimdLevel::Avx2.lanes(), 4);
    /// ```
    #[inline]
    pub const fn lanes(&self) -> usize {
        self.width_bits() / FLOAT_BITS
    }
}

impl fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimdLevel::Scalar => "scalar",
            SimdLevel::Avx2 => "avx2",
            SimdLevel::Neon => "neon",
            SimdLevel::Simd128 => "simd128",
        })
    }
}

/// Compile-time lane counts for the kernels, in `Float` values.
// each target compiles only its own kernel
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lanes;

#[allow(dead_code)]
impl Lanes {
    /// AVX2
    pub const AVX2: usize = SimdLevel::Avx2.lanes();
    /// NEON
    pub const NEON: usize = SimdLevel::Neon.lanes();
    /// SIMD128
    pub const SIMD128: usize = SimdLevel::Simd128.lanes();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_follow_float_width() {
        assert_eq!(SimdLevel::Scalar.lanes(), 1);
        assert_eq!(Lanes::AVX2 * FLOAT_BITS, 256);
        assert_eq!(Lanes::NEON * FLOAT_BITS, 128);
        assert_eq!(Lanes::SIMD128, Lanes::NEON);
    }

    #[cfg(not(feature = "f32"))]
    #[test]
    fn test_f64_lane_counts() {
        assert_eq!(SimdLevel::Avx2.lanes(), 4);
        assert_eq!(SimdLevel::Neon.lanes(), 2);
        assert_eq!(SimdLevel::Scalar.width_bits(), 64);
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(SimdLevel::detect(), SimdLevel::detect());
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = [
            SimdLevel::Scalar,
            SimdLevel::Avx2,
            SimdLevel::Neon,
            SimdLevel::Simd128,
        ]
        .iter()
        .map(|l| l.to_string())
        .collect();
        assert_eq!(names, ["scalar", "avx2", "neon", "simd128"]);
    }
}
