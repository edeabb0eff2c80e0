use std::{fmt::Display, num::NonZero};

use crate::{Price, Smoother, TimeSeries};

/// Exponential Moving Average (EMA) smoother.
///
/// A weighted moving average that gives more weight to recent
/// values. Uses the standard smoothing factor
/// `α = 2 / (period + 1)`. Each value is computed as:
///
/// ```text
/// EMA = α × value + (1 − α) × prev_EMA
/// ```
///
/// The first `period` values are averaged into an SMA seed, emitted at
/// the `period`-th timestamp. Every later input produces one output, so
/// an `n`-point series yields exactly `n − period + 1` points on the
/// trailing timestamps. Shorter inputs yield `None`.
///
/// # Example
///
/// ```
/// use quantedge_smi::{Ema, Smoother, TimeSeries};
/// use std::num::NonZero;
///
/// let input: TimeSeries<f64> = [(1, 2.0), (2, 4.0), (3, 6.0), (4, 8.0)]
///     .into_iter()
///     .collect();
///
/// let out = Ema.smooth(&input, NonZero::new(3).unwrap()).unwrap();
///
/// // SMA seed = (2 + 4 + 6) / 3 = 4.0, at the 3rd timestamp
/// assert_eq!(out.first(), Some((3, &4.0)));
///
/// // EMA(3) α = 0.5: 8 × 0.5 + 4 × 0.5 = 6.0
/// assert_eq!(out.last(), Some((4, &6.0)));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Ema;

impl Ema {
    /// Smoothing factor `α = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    pub fn alpha(period: NonZero<usize>) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let period = period.get() as f64;
        2.0 / (period + 1.0)
    }
}

impl Smoother for Ema {
    fn smooth(
        &self,
        series: &TimeSeries<Price>,
        period: NonZero<usize>,
    ) -> Option<TimeSeries<Price>> {
        let length = period.get();
        if series.len() < length {
            return None;
        }

        let (seed, rest) = series.as_slice().split_at(length);
        let &(seed_time, _) = seed.last()?;

        #[allow(clippy::cast_precision_loss)]
        let mut current = seed.iter().map(|&(_, value)| value).sum::<Price>() / length as f64;

        let alpha = Self::alpha(period);
        let retain = 1.0 - alpha;

        let mut out = TimeSeries::with_capacity(rest.len() + 1);
        out.push(seed_time, current);

        for &(timestamp, value) in rest {
            current = value * alpha + current * retain;
            out.push(timestamp, current);
        }

        Some(out)
    }
}

impl Display for Ema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA")
    }
}
