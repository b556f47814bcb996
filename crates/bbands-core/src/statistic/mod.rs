//! Statistic functions
//!
//! Dispersion measures computed over the same rolling windows as the
//! overlap studies, so each value lines up with the moving average at the
//! same index.

mod stddev;

pub use stddev::{rolling_stddev, StdDev};
pub(crate) use stddev::stddev_around;
