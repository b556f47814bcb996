//! Runtime SIMD dispatch system.
//!
//! CPU features are detected once; afterwards each call goes straight
//! through a function pointer held in a `OnceLock`.

use std::sync::OnceLock;

use super::scalar;
use crate::types::Float;

#[cfg(target_arch = "x86_64")]
use super::arch::x86_64;

#[cfg(target_arch = "aarch64")]
use super::arch::aarch64;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
use super::arch::wasm32;

use super::types::SimdLevel;

/// Function pointer type for window sums.
pub type SumFn = fn(&[Float]) -> Float;

/// Function pointer type for sums of squared deviations around a mean.
pub type SumSqDevFn = fn(&[Float], Float) -> Float;

/// Dispatch table containing function pointers for all SIMD operations.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTable {
    /// Instruction set the pointers were chosen for
    pub level: SimdLevel,
    /// Function pointer for sum operations
    pub sum: SumFn,
    /// Function pointer for squared-deviation sums
    pub sum_sq_dev: SumSqDevFn,
}

impl DispatchTable {
    #[inline]
    #[allow(dead_code)]
    const fn new(level: SimdLevel, sum: SumFn, sum_sq_dev: SumSqDevFn) -> Self {
        Self {
            level,
            sum,
            sum_sq_dev,
        }
    }

    /// Create a scalar dispatch table (no SIMD acceleration).
    #[inline]
    pub const fn scalar() -> Self {
        Self {
            level: SimdLevel::Scalar,
            sum: scalar::sum,
            sum_sq_dev: scalar::sum_sq_dev,
        }
    }
}

static DISPATCH: OnceLock<DispatchTable> = OnceLock::new();

/// Selects the best implementation for this machine.
///
/// The detection priority is:
/// - **x86_64**: AVX2 → scalar
/// - **aarch64**: NEON (always available)
/// - **wasm32**: SIMD128 when compiled with `+simd128`, otherwise scalar
/// - **others**: scalar fallback
#[cold]
#[allow(unreachable_code)]
fn init_dispatch() -> DispatchTable {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            return DispatchTable::new(
                SimdLevel::Avx2,
                |data| unsafe { x86_64::avx2::sum(data) },
                |data, mean| unsafe { x86_64::avx2::sum_sq_dev(data, mean) },
            );
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        return DispatchTable::new(
            SimdLevel::Neon,
            |data| unsafe { aarch64::neon::sum(data) },
            |data, mean| unsafe { aarch64::neon::sum_sq_dev(data, mean) },
        );
    }

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    {
        return DispatchTable::new(
            SimdLevel::Simd128,
            |data| unsafe { wasm32::simd128::sum(data) },
            |data, mean| unsafe { wasm32::simd128::sum_sq_dev(data, mean) },
        );
    }

    DispatchTable::scalar()
}

/// Get the global dispatch table, initializing it if necessary.
#[inline]
pub fn get_dispatch() -> &'static DispatchTable {
    DISPATCH.get_or_init(|| {
        let table = init_dispatch();
        log::debug!("simd dispatch initialised: {}", table.level);
        table
    })
}

/// Calculate the sum of all elements in a slice.
///
/// # Examples
///
/// ```rust
/// use bbands_core::simd::dispatch;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert_eq!(dispatch::sum(&data), 6.0);
/// ```
#[inline]
pub fn sum(data: &[Float]) -> Float {
    (get_dispatch().sum)(data)
}

/// Sum of `(x - mean)^2` over the slice.
///
/// # Examples
///
/// ```rust
/// use bbands_core::simd::dispatch;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert_eq!(dispatch::sum_sq_dev(&data, 2.0), 2.0);
/// ```
#[inline]
pub fn sum_sq_dev(data: &[Float], mean: Float) -> Float {
    (get_dispatch().sum_sq_dev)(data, mean)
}
