//! The renderer's view of the band series.
//!
//! Canvas code skips `null` points rather than testing for NaN, so missing
//! band values become `None` here.

use core::ops::Range;

use bbands_core::{BandPoint, Float, Timestamp};
use serde::{Deserialize, Serialize};

/// One chart sample: the three band values, `None` where undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Observation timestamp
    pub timestamp: Timestamp,
    /// Upper band
    pub upper: Option<Float>,
    /// Middle band
    pub mid: Option<Float>,
    /// Lower band
    pub lower: Option<Float>,
}

fn present(v: Float) -> Option<Float> {
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}

impl From<&BandPoint> for ChartPoint {
    fn from(p: &BandPoint) -> Self {
        Self {
            timestamp: p.timestamp,
            upper: present(p.upper),
            mid: present(p.basis),
            lower: present(p.lower),
        }
    }
}

/// Maps engine output to chart samples, one per band point.
pub fn chart_series(bands: &[BandPoint]) -> Vec<ChartPoint> {
    bands.iter().map(ChartPoint::from).collect()
}

/// Outline of the shaded area between the bands over `visible`, as
/// `[index, value]` vertices: the upper band left to right, then the lower
/// band right to left. Missing values are skipped. The range is clamped to
/// the series.
pub fn fill_polygon(series: &[ChartPoint], visible: Range<usize>) -> Vec<[Float; 2]> {
    let end = visible.end.min(series.len());
    let start = visible.start.min(end);
    let window = &series[start..end];

    let upper = window
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.upper.map(|v| [(start + i) as Float, v]));
    let lower = window
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(i, p)| p.lower.map(|v| [(start + i) as Float, v]));
    upper.chain(lower).collect()
}
