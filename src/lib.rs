//! Stochastic Momentum Index (SMI) for Rust.
//!
//! [`Smi::compute`] takes a slice of any type implementing [`Ohlcv`] and
//! returns an [`SmiSeries`]: the oscillator line and its signal line,
//! aligned by timestamp. Inputs too short or malformed for the configured
//! periods yield an [`SmiError`] instead of a partial series.
//!
//! The pipeline stages are exposed for reuse and testing:
//! [`ExtremaWindowScanner`], [`MomentumSeriesBuilder`], [`DoubleSmoother`],
//! [`compose`], [`SignalSmoother`] and [`align`]. Smoothing goes through
//! the [`Smoother`] trait; [`Ema`] is the built-in implementation.

mod align;
mod composer;
mod ema;
mod error;
mod extrema;
mod momentum;
mod ohlcv;
mod output;
mod series;
mod smi;
mod smoother;

pub use crate::error::{MalformedReason, Result, SmiError};
pub use crate::ohlcv::{Ohlcv, Price, Timestamp};
pub use crate::series::TimeSeries;
pub use crate::smoother::{DoubleSmoother, SignalSmoother, Smoother};

pub use crate::align::align;
pub use crate::composer::{compose, oscillator};
pub use crate::ema::Ema;
pub use crate::extrema::{ExtremaWindowScanner, WindowExtrema};
pub use crate::momentum::{MomentumSeries, MomentumSeriesBuilder};
pub use crate::output::{SmiPoint, SmiSeries};
pub use crate::smi::{Smi, SmiConfig, SmiConfigBuilder};

#[cfg(test)]
mod test_util;
