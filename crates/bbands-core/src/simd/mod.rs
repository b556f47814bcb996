//! # SIMD accelerated reductions
//!
//! The rolling passes reduce each window with two kernels: a plain sum and
//! a sum of squared deviations around a known mean. Both are dispatched to
//! the best instruction set available, with a scalar fallback.
//!
//! ```rust
//! use bbands_core::simd;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(simd::sum(&data), 10.0);
//! // (1-2.5)^2 + (2-2.5)^2 + (3-2.5)^2 + (4-2.5)^2 = 5
//! assert_eq!(simd::sum_sq_dev(&data, 2.5), 5.0);
//! ```
//!
//! ## Performance Considerations
//!
//! - Inputs extracted by [`crate::source::extract`] are cache-line aligned
//! - For windows shorter than one vector the kernels are plain scalar loops
//! - Platform kernels live in the private `arch` module; use `dispatch`
pub mod scalar;
mod types;
mod arch;
pub mod dispatch;

pub use dispatch::{sum, sum_sq_dev};
pub use types::SimdLevel;
