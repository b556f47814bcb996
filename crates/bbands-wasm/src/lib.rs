//! bbands-wasm: WebAssembly bindings for the Bollinger Bands engine
//!
//! Exposes the band computation to the charting front end through
//! wasm-bindgen. Observations and inputs cross the boundary as plain JS
//! objects (camelCase keys) and are converted with `serde-wasm-bindgen`.
//!
//! ```js
//! import init, { computeBollingerBands, chartSeries, defaultOptions, lineDash } from "bbands_wasm";
//!
//! await init();
//! const options = defaultOptions();
//! const { inputs } = options;
//! const bands = computeBollingerBands(candles, inputs);
//! const series = chartSeries(candles, inputs); // NaN -> null for the canvas
//! ctx.setLineDash(lineDash(options.style.upper.lineStyle));
//! ```

use std::fmt::Display;

use bbands_core::{bollinger_bands, simd::SimdLevel, BandPoint, Observation, Parameters};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod chart;
mod options;

pub use chart::{chart_series, fill_polygon, ChartPoint};
pub use options::{
    default_inputs, BandStyle, BollingerOptions, BollingerStyle, FillStyle, LineStyle,
};

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Logs the failure to the browser console and hands it back as a JS error
/// value. The caller keeps whatever it last rendered.
fn reject<E: Display>(err: E) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::error_1(&message);
    message
}

/// `Option::None` has to reach the canvas as `null`, not `undefined`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(reject)
}

fn compute(data: JsValue, inputs: JsValue) -> Result<Vec<BandPoint>, JsValue> {
    let data: Vec<Observation> = serde_wasm_bindgen::from_value(data).map_err(reject)?;
    let inputs: Parameters = serde_wasm_bindgen::from_value(inputs).map_err(reject)?;
    bollinger_bands(&data, &inputs).map_err(reject)
}

/// Computes the bands for `data` (an array of `{timestamp, open, high, low,
/// close, volume}`) with `inputs` (`{length, maType, source,
/// stdDevMultiplier, offset}`).
///
/// Returns one `{timestamp, basis, upper, lower}` per observation; undefined
/// values are NaN.
#[wasm_bindgen(js_name = computeBollingerBands)]
pub fn compute_bollinger_bands(data: JsValue, inputs: JsValue) -> Result<JsValue, JsValue> {
    to_js(&compute(data, inputs)?)
}

/// Same inputs as `computeBollingerBands`, shaped for the canvas:
/// `{timestamp, upper, mid, lower}` with `null` where a band is undefined.
#[wasm_bindgen(js_name = chartSeries)]
pub fn chart_series_js(data: JsValue, inputs: JsValue) -> Result<JsValue, JsValue> {
    to_js(&chart_series(&compute(data, inputs)?))
}

/// Vertices of the shaded area between the bands for bars `from..to` of a
/// `chartSeries` result, as `[index, value]` pairs.
#[wasm_bindgen(js_name = fillPolygon)]
pub fn fill_polygon_js(series: JsValue, from: usize, to: usize) -> Result<JsValue, JsValue> {
    let series: Vec<ChartPoint> = serde_wasm_bindgen::from_value(series).map_err(reject)?;
    to_js(&fill_polygon(&series, from..to))
}

/// Canvas `setLineDash` segments for a `lineStyle` value (`"solid"` or
/// `"dashed"`).
#[wasm_bindgen(js_name = lineDash)]
pub fn line_dash(style: JsValue) -> Result<Vec<u32>, JsValue> {
    let style: LineStyle = serde_wasm_bindgen::from_value(style).map_err(reject)?;
    Ok(style.dash_pattern().to_vec())
}

/// The settings form's preset: inputs and styling.
#[wasm_bindgen(js_name = defaultOptions)]
pub fn default_options() -> Result<JsValue, JsValue> {
    to_js(&BollingerOptions::default())
}

/// Name of the SIMD path the engine picked for this runtime.
#[wasm_bindgen(js_name = simdLevel)]
pub fn simd_level() -> String {
    SimdLevel::detect().to_string()
}
