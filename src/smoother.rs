use crate::{Price, TimeSeries};

use std::num::NonZero;

/// A batch smoothing primitive over a [`TimeSeries`].
///
/// The SMI pipeline smooths three times (twice per leg, once for the signal
/// line) and only ever talks to this trait, so any smoother can be injected
/// through [`Smi::with_smoother`](crate::Smi::with_smoother). The built-in
/// implementation is [`Ema`](crate::Ema).
///
/// # Contract
///
/// For an `n`-point input and `period` P, an implementation returns `None`
/// when `n < P` and otherwise a series aligned to a suffix of the input's
/// timestamps. The pipeline's lookback arithmetic assumes the [`Ema`](crate::Ema)
/// shape: exactly `n − P + 1` points on the trailing timestamps.
pub trait Smoother {
    /// Smooths `series` with the given period.
    fn smooth(&self, series: &TimeSeries<Price>, period: NonZero<usize>)
    -> Option<TimeSeries<Price>>;
}

impl<S: Smoother + ?Sized> Smoother for &S {
    #[inline]
    fn smooth(
        &self,
        series: &TimeSeries<Price>,
        period: NonZero<usize>,
    ) -> Option<TimeSeries<Price>> {
        (**self).smooth(series, period)
    }
}

/// Two successive passes of a [`Smoother`] with the same period.
///
/// Used on both the range and the deviation legs of the SMI. Fails when
/// either pass fails.
#[derive(Clone, Copy, Debug)]
pub struct DoubleSmoother<S> {
    smoother: S,
    period: NonZero<usize>,
}

impl<S: Smoother> DoubleSmoother<S> {
    #[must_use]
    pub fn new(smoother: S, period: NonZero<usize>) -> Self {
        Self { smoother, period }
    }

    /// `smooth(smooth(series))`, or `None` if `series` is too short for
    /// either pass.
    pub fn apply(&self, series: &TimeSeries<Price>) -> Option<TimeSeries<Price>> {
        let once = self.smoother.smooth(series, self.period)?;
        self.smoother.smooth(&once, self.period)
    }
}

/// Single [`Smoother`] pass producing the SMI signal line.
#[derive(Clone, Copy, Debug)]
pub struct SignalSmoother<S> {
    smoother: S,
    period: NonZero<usize>,
}

impl<S: Smoother> SignalSmoother<S> {
    #[must_use]
    pub fn new(smoother: S, period: NonZero<usize>) -> Self {
        Self { smoother, period }
    }

    pub fn apply(&self, oscillator: &TimeSeries<Price>) -> Option<TimeSeries<Price>> {
        self.smoother.smooth(oscillator, self.period)
    }
}
