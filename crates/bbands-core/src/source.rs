//! Price-field extraction.
//!
//! The rolling kernels read the extracted series window by window through
//! the SIMD reductions, so it is collected into a cache-line aligned buffer.

use aligned_vec::{AVec, CACHELINE_ALIGN};

use crate::params::Source;
use crate::types::{Float, Observation};

/// Cache-line aligned price series.
pub type SourceSeries = AVec<Float>;

/// Picks `source` from every observation, preserving length and order.
///
/// # Example
///
/// ```rust
/// use bbands_core::{source::extract, Observation, Source};
///
/// let bars = [
///     Observation::new(0, 1.0, 4.0, 0.5, 2.0, 100.0),
///     Observation::new(1, 2.0, 5.0, 1.5, 3.0, 120.0),
/// ];
/// assert_eq!(&extract(&bars, Source::High)[..], &[4.0, 5.0]);
/// ```
pub fn extract(observations: &[Observation], source: Source) -> SourceSeries {
    let pick: fn(&Observation) -> Float = match source {
        Source::Open => |o| o.open,
        Source::High => |o| o.high,
        Source::Low => |o| o.low,
        Source::Close => |o| o.close,
    };
    AVec::from_iter(CACHELINE_ALIGN, observations.iter().map(pick))
}
