//! Host-side indicator options: the inputs handed to the engine plus the
//! styling the chart applies to each band. Defaults are the chart's preset.

use bbands_core::{Parameters, Source};
use serde::{Deserialize, Serialize};

/// Stroke pattern for a band line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Continuous stroke
    #[default]
    Solid,
    /// 5px on, 5px off
    Dashed,
}

impl LineStyle {
    /// Canvas `setLineDash` segments for this style.
    pub fn dash_pattern(&self) -> &'static [u32] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[5, 5],
        }
    }
}

/// How one band line is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandStyle {
    /// Whether the line is drawn at all
    pub visible: bool,
    /// CSS colour, e.g. `#2196f3`
    pub color: String,
    /// Stroke width in pixels
    pub line_width: u32,
    /// Stroke pattern
    pub line_style: LineStyle,
}

impl BandStyle {
    fn solid(color: &str) -> Self {
        Self {
            visible: true,
            color: color.to_string(),
            line_width: 1,
            line_style: LineStyle::Solid,
        }
    }
}

/// Shaded area between the upper and lower bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    /// Whether the area is filled
    pub visible: bool,
    /// Alpha in `[0, 1]`
    pub opacity: f64,
}

/// Styling for all three bands and the fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerStyle {
    /// Middle band
    pub basis: BandStyle,
    /// Upper band
    pub upper: BandStyle,
    /// Lower band
    pub lower: BandStyle,
    /// Area between upper and lower
    pub fill: FillStyle,
}

impl Default for BollingerStyle {
    fn default() -> Self {
        Self {
            basis: BandStyle::solid("#ff9800"),
            upper: BandStyle::solid("#2196f3"),
            lower: BandStyle::solid("#2196f3"),
            fill: FillStyle {
                visible: true,
                opacity: 0.1,
            },
        }
    }
}

/// Everything the settings form edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerOptions {
    /// Engine inputs
    pub inputs: Parameters,
    /// Presentation only; never reaches the engine
    pub style: BollingerStyle,
}

impl Default for BollingerOptions {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            style: BollingerStyle::default(),
        }
    }
}

/// The chart's preset inputs: length 20, SMA of the close, ±2σ, no offset.
pub fn default_inputs() -> Parameters {
    Parameters::new(20, Source::Close, 2.0, 0)
}
