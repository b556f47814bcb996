//! Bollinger Bands.
//!
//! ```text
//! basis = SMA(source, length)
//! sd    = sample standard deviation of the same window (÷ (length - 1))
//! upper = basis + multiplier × sd
//! lower = basis - multiplier × sd
//! ```
//!
//! The three series are then shifted by `offset` bars and paired with the
//! observation timestamps. Every call is independent; nothing is cached.
//!
//! # Example
//!
//! ```rust
//! use bbands_core::{bollinger_bands, Observation, Parameters, Source};
//!
//! let bars: Vec<Observation> = (0..25)
//!     .map(|i| {
//!         let c = 100.0 + i as bbands_core::Float;
//!         Observation::new(i, c, c, c, c, 1.0)
//!     })
//!     .collect();
//!
//! let bands = bollinger_bands(&bars, &Parameters::new(20, Source::Close, 2.0, 0)).unwrap();
//! assert_eq!(bands.len(), 25);
//! assert!(bands[18].basis.is_nan());
//! assert_eq!(bands[19].basis, 109.5);
//! ```

use crate::error::{BandsError, Result};
use crate::overlap::sma::sma_into;
use crate::params::Parameters;
use crate::series::shift;
use crate::source::extract;
use crate::statistic::stddev_around;
use crate::traits::Indicator;
use crate::types::{BandPoint, Float, Observation};

/// Bollinger Bands over OHLCV observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    params: Parameters,
}

impl BollingerBands {
    /// Validates `params` and builds the indicator.
    ///
    /// # Errors
    ///
    /// See [`Parameters::validate`].
    pub fn new(params: Parameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The validated parameters.
    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl Indicator for BollingerBands {
    type Input = Observation;

    type Output = BandPoint;

    /// Leading slots without a value, offset included.
    fn lookback(&self) -> usize {
        let warm_up = self.params.length.saturating_sub(1);
        if self.params.offset > 0 {
            warm_up.saturating_add(self.params.offset.unsigned_abs())
        } else {
            warm_up
        }
    }

    fn compute(&self, inputs: &[Self::Input], outputs: &mut [Self::Output]) -> Result<()> {
        if outputs.len() != inputs.len() {
            return Err(BandsError::length_mismatch(inputs.len(), outputs.len()));
        }
        let Parameters {
            length,
            source,
            std_dev_multiplier,
            offset,
            ..
        } = self.params;
        log::trace!(
            "bollinger_bands: n={} length={} source={} multiplier={} offset={}",
            inputs.len(),
            length,
            source,
            std_dev_multiplier,
            offset
        );

        let n = inputs.len();
        let values = extract(inputs, source);
        let mut basis = vec![Float::NAN; n];
        let mut deviation = vec![Float::NAN; n];
        sma_into(&values, length, &mut basis);
        stddev_around(&values, &basis, length, &mut deviation);

        // the deviation buffer becomes the upper band in place
        let mut upper = deviation;
        let mut lower = vec![Float::NAN; n];
        for i in 0..n {
            let (b, sd) = (basis[i], upper[i]);
            if b.is_nan() || sd.is_nan() {
                upper[i] = Float::NAN;
                continue;
            }
            let width = std_dev_multiplier * sd;
            upper[i] = b + width;
            lower[i] = b - width;
        }

        shift(&mut basis, offset);
        shift(&mut upper, offset);
        shift(&mut lower, offset);

        for (i, (out, obs)) in outputs.iter_mut().zip(inputs).enumerate() {
            *out = BandPoint {
                timestamp: obs.timestamp,
                basis: basis[i],
                upper: upper[i],
                lower: lower[i],
            };
        }
        Ok(())
    }

    fn compute_to_vec(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Output>> {
        let mut result: Vec<BandPoint> = inputs
            .iter()
            .map(|o| BandPoint::undefined(o.timestamp))
            .collect();
        self.compute(inputs, &mut result)?;
        Ok(result)
    }
}

/// Computes Bollinger Bands for `observations`.
///
/// The output always has one point per observation, carrying that
/// observation's timestamp.
///
/// # Errors
///
/// Only parameter validation can fail (see [`Parameters::validate`]). Short
/// input, empty input and non-finite prices produce NaN slots instead.
pub fn bollinger_bands(observations: &[Observation], params: &Parameters) -> Result<Vec<BandPoint>> {
    BollingerBands::new(*params)?.compute_to_vec(observations)
}
