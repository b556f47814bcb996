//! bbands-py: Python bindings for the Bollinger Bands engine
//!
//! This crate exposes the band computation to Python using PyO3, taking
//! and returning NumPy arrays.
//!
//! Note: This crate requires a Python 3.x interpreter to build.

use bbands_core::{bollinger_bands as compute, BandsError, Observation, Parameters, Source};
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type BandArrays<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
);

fn to_py_err(err: BandsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Builds observations from parallel OHLCV columns, which must all match
/// `timestamps` in length.
fn zip_columns(timestamps: &[i64], columns: [&[f64]; 5]) -> Result<Vec<Observation>, BandsError> {
    let n = timestamps.len();
    if let Some(bad) = columns.iter().find(|c| c.len() != n) {
        return Err(BandsError::length_mismatch(n, bad.len()));
    }
    let [open, high, low, close, volume] = columns;
    Ok((0..n)
        .map(|i| Observation::new(timestamps[i], open[i], high[i], low[i], close[i], volume[i]))
        .collect())
}

/// Python module for the Bollinger Bands indicator
#[pymodule]
fn bbands_py(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bollinger_bands, m)?)?;
    Ok(())
}

/// Bollinger Bands over OHLCV columns.
///
/// Returns `(basis, upper, lower)` as float64 arrays the same length as the
/// input; undefined slots are NaN. Raises `ValueError` when the columns
/// differ in length or the parameters are invalid.
#[pyfunction]
#[pyo3(signature = (timestamps, open, high, low, close, volume, length=20, source="close", std_dev_multiplier=2.0, offset=0))]
#[allow(clippy::too_many_arguments)]
fn bollinger_bands<'py>(
    py: Python<'py>,
    timestamps: PyReadonlyArray1<'py, i64>,
    open: PyReadonlyArray1<'py, f64>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    close: PyReadonlyArray1<'py, f64>,
    volume: PyReadonlyArray1<'py, f64>,
    length: usize,
    source: &str,
    std_dev_multiplier: f64,
    offset: isize,
) -> PyResult<BandArrays<'py>> {
    let observations = zip_columns(
        timestamps.as_slice()?,
        [
            open.as_slice()?,
            high.as_slice()?,
            low.as_slice()?,
            close.as_slice()?,
            volume.as_slice()?,
        ],
    )
    .map_err(to_py_err)?;
    let n = observations.len();
    let params = Parameters::new(length, Source::parse_lossy(source), std_dev_multiplier, offset);
    let bands = py.allow_threads(|| compute(&observations, &params)).map_err(to_py_err)?;

    let (mut basis, mut upper, mut lower) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for p in &bands {
        basis.push(p.basis);
        upper.push(p.upper);
        lower.push(p.lower);
    }
    Ok((
        basis.into_pyarray_bound(py),
        upper.into_pyarray_bound(py),
        lower.into_pyarray_bound(py),
    ))
}
