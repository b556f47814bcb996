//! Series helpers shared by the band assembly.

use crate::types::Float;

/// Shifts `series` along the time axis in place.
///
/// - `offset > 0`: the value at `i` moves to `i + offset`; the first
///   `offset` slots become NaN and values pushed past the end are dropped.
/// - `offset < 0`: the value at `i + |offset|` moves to `i`; the last
///   `|offset|` slots become NaN.
/// - `offset == 0`: unchanged.
///
/// Vacated slots are filled with `Float::NAN`. Every surviving value is
/// copied as is, so a band that is exactly `0.0` stays `0.0`.
///
/// ```rust
/// use bbands_core::series::shift;
///
/// let mut s = [0.0, 1.0, 2.0, 3.0];
/// shift(&mut s, 1);
/// assert!(s[0].is_nan());
/// assert_eq!(&s[1..], &[0.0, 1.0, 2.0]);
/// ```
pub fn shift(series: &mut [Float], offset: isize) {
    let n = series.len();
    let k = offset.unsigned_abs();
    if offset == 0 || n == 0 {
        return;
    }
    if k >= n {
        series.fill(Float::NAN);
        return;
    }

    if offset > 0 {
        series.copy_within(0..n - k, k);
        series[..k].fill(Float::NAN);
    } else {
        series.copy_within(k..n, 0);
        series[n - k..].fill(Float::NAN);
    }
}
