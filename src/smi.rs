use std::{fmt::Display, num::NonZero};

use tracing::{debug, trace};

use crate::{
    DoubleSmoother, Ema, MalformedReason, MomentumSeriesBuilder, Ohlcv, Result, SignalSmoother,
    SmiError, SmiSeries, Smoother, align::align, composer::compose,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_PERIOD_K: NonZero<usize> = NonZero::new(5).unwrap();
const DEFAULT_PERIOD_D: NonZero<usize> = NonZero::new(3).unwrap();

/// Configuration for the Stochastic Momentum Index ([`Smi`]).
///
/// `%K` is the lookback window for the rolling extrema, `%D` the
/// smoothing period applied twice to each leg and once more for the
/// signal line. Defaults to `(5, 3)`.
///
/// # Warm-up
///
/// The first oscillator value needs `%K + 2 × (%D − 1)` bars, the first
/// signal value `%K + 3 × (%D − 1)`. [`Smi::compute`] requires the
/// latter, see [`required_bars`](Self::required_bars).
///
/// # Example
///
/// ```
/// use quantedge_smi::SmiConfig;
/// use std::num::NonZero;
///
/// let config = SmiConfig::builder()
///     .period_k(NonZero::new(10).unwrap())
///     .period_d(NonZero::new(3).unwrap())
///     .build();
///
/// assert_eq!(config.period_k(), 10);
/// assert_eq!(config.required_bars(), 16);
/// assert_eq!(SmiConfig::default().to_string(), "SmiConfig(5, 3)");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmiConfig {
    period_k: NonZero<usize>,
    period_d: NonZero<usize>,
}

impl SmiConfig {
    /// Config with explicit `%K` and `%D`.
    #[must_use]
    pub fn new(period_k: NonZero<usize>, period_d: NonZero<usize>) -> Self {
        Self { period_k, period_d }
    }

    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> SmiConfigBuilder {
        SmiConfigBuilder::new()
    }

    /// `%K`: extrema window length.
    #[inline]
    #[must_use]
    pub fn period_k(&self) -> usize {
        self.period_k.get()
    }

    /// `%D`: smoothing period.
    #[inline]
    #[must_use]
    pub fn period_d(&self) -> usize {
        self.period_d.get()
    }

    /// Input index of the first oscillator value.
    ///
    /// Saturates at `usize::MAX` for periods no input can satisfy.
    #[must_use]
    pub fn first_oscillator_index(&self) -> usize {
        self.lookback(2)
    }

    /// Input index of the first signal value.
    ///
    /// Saturates at `usize::MAX` for periods no input can satisfy.
    #[must_use]
    pub fn first_signal_index(&self) -> usize {
        self.lookback(3)
    }

    /// Minimum number of bars [`Smi::compute`] accepts.
    #[must_use]
    pub fn required_bars(&self) -> usize {
        self.first_signal_index().saturating_add(1)
    }

    /// `%K − 1 + seeds × (%D − 1)`
    fn lookback(&self, seeds: usize) -> usize {
        (self.period_d() - 1)
            .saturating_mul(seeds)
            .saturating_add(self.period_k() - 1)
    }
}

impl Default for SmiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD_K, DEFAULT_PERIOD_D)
    }
}

impl Display for SmiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SmiConfig({}, {})", self.period_k, self.period_d)
    }
}

/// Builder for [`SmiConfig`].
///
/// Defaults: `%K` = 5, `%D` = 3.
pub struct SmiConfigBuilder {
    period_k: NonZero<usize>,
    period_d: NonZero<usize>,
}

impl SmiConfigBuilder {
    fn new() -> Self {
        Self {
            period_k: DEFAULT_PERIOD_K,
            period_d: DEFAULT_PERIOD_D,
        }
    }

    /// Sets the extrema window length.
    #[inline]
    #[must_use]
    pub fn period_k(mut self, period_k: NonZero<usize>) -> Self {
        self.period_k = period_k;
        self
    }

    /// Sets the smoothing period.
    #[inline]
    #[must_use]
    pub fn period_d(mut self, period_d: NonZero<usize>) -> Self {
        self.period_d = period_d;
        self
    }

    /// Sets both periods as `[%K, %D]`.
    #[inline]
    #[must_use]
    pub fn periods(self, [period_k, period_d]: [NonZero<usize>; 2]) -> Self {
        self.period_k(period_k).period_d(period_d)
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> SmiConfig {
        SmiConfig::new(self.period_k, self.period_d)
    }
}

/// Stochastic Momentum Index (SMI).
///
/// Measures where the close sits relative to the midpoint of the recent
/// high/low range, normalized by half that range:
///
/// ```text
/// range     = HH(%K) − LL(%K)
/// deviation = close − (HH(%K) + LL(%K)) / 2
/// SMI       = EMA(EMA(deviation)) / (EMA(EMA(range)) / 2) × 100
/// signal    = EMA(SMI)
/// ```
///
/// All EMAs use period `%D`. Where either smoothed leg is zero the SMI
/// is `0` rather than undefined.
///
/// Every call to [`compute`](Self::compute) recomputes the full series
/// from the given bars; nothing is kept between calls.
///
/// # Example
///
/// ```
/// use quantedge_smi::{Smi, SmiConfig};
/// use std::num::NonZero;
/// # use quantedge_smi::{Ohlcv, Price, Timestamp};
/// #
/// # struct Bar(f64, f64, f64, u64);
/// # impl Ohlcv for Bar {
/// #     fn open(&self) -> Price { self.2 }
/// #     fn high(&self) -> Price { self.0 }
/// #     fn low(&self) -> Price { self.1 }
/// #     fn close(&self) -> Price { self.2 }
/// #     fn open_time(&self) -> Timestamp { self.3 }
/// # }
///
/// let nz = |n| NonZero::new(n).unwrap();
/// let smi = Smi::new(SmiConfig::new(nz(2), nz(1)));
///
/// let bars = [
///     Bar(10.0, 8.0, 9.0, 1),
///     Bar(11.0, 9.0, 10.0, 2),
///     Bar(12.0, 8.0, 11.0, 3),
///     Bar(9.0, 7.0, 8.0, 4),
/// ];
///
/// let out = smi.compute(&bars).unwrap();
///
/// assert_eq!(out.timestamps(), vec![2, 3, 4]);
/// // deviation 1.0 over half of range 4.0
/// assert_eq!(out.points()[1].oscillator(), 50.0);
/// assert_eq!(out.points()[1].signal(), Some(50.0));
///
/// // Too short for %K
/// assert!(smi.compute(&bars[..1]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Smi<S = Ema> {
    config: SmiConfig,
    smoother: S,
}

impl Smi {
    /// SMI using the built-in [`Ema`] smoother.
    #[must_use]
    pub fn new(config: SmiConfig) -> Self {
        Self::with_smoother(config, Ema)
    }
}

impl<S: Smoother> Smi<S> {
    /// SMI using a caller-provided [`Smoother`] for all three smoothing
    /// stages.
    #[must_use]
    pub fn with_smoother(config: SmiConfig, smoother: S) -> Self {
        Self { config, smoother }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SmiConfig {
        &self.config
    }

    /// Computes the SMI and its signal line over `bars`.
    ///
    /// # Errors
    ///
    /// - [`SmiError::MalformedInput`] when a bar has a non-finite high,
    ///   low or close, or its `open_time` does not increase.
    /// - [`SmiError::InsufficientData`] when there are fewer than
    ///   [`required_bars`](SmiConfig::required_bars) bars. An injected
    ///   smoother that returns no output for a stage is reported the same
    ///   way, with `actual` then at or above `required`.
    pub fn compute<B: Ohlcv>(&self, bars: &[B]) -> Result<SmiSeries> {
        validate(bars).inspect_err(|err| debug!(config = %self.config, %err, "SMI not computable"))?;

        let insufficient = SmiError::InsufficientData {
            required: self.config.required_bars(),
            actual: bars.len(),
        };

        if bars.len() < self.config.required_bars() {
            debug!(config = %self.config, err = %insufficient, "SMI not computable");
            return Err(insufficient);
        }

        let momentum = MomentumSeriesBuilder::new(self.config.period_k)
            .build(bars)
            .ok_or(insufficient)?;

        let double = DoubleSmoother::new(&self.smoother, self.config.period_d);
        let smoothed = double
            .apply(&momentum.deviation)
            .zip(double.apply(&momentum.range));
        let Some((avg_dev, avg_range)) = smoothed else {
            debug!(config = %self.config, "smoother produced no output for a momentum leg");
            return Err(insufficient);
        };

        let oscillator = compose(&avg_dev, &avg_range);

        let Some(signal) = SignalSmoother::new(&self.smoother, self.config.period_d).apply(&oscillator)
        else {
            debug!(config = %self.config, "smoother produced no signal line");
            return Err(insufficient);
        };

        let series = align(&oscillator, &signal);

        trace!(
            config = %self.config,
            bars = bars.len(),
            oscillator = oscillator.len(),
            signal = signal.len(),
            "SMI computed"
        );

        Ok(series)
    }
}

impl<S> Display for Smi<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SMI({}, {})",
            self.config.period_k, self.config.period_d
        )
    }
}

/// Checks the fields the pipeline reads and the timestamp order.
fn validate<B: Ohlcv>(bars: &[B]) -> Result<()> {
    let mut previous = None;

    for (index, bar) in bars.iter().enumerate() {
        let reason = if !bar.high().is_finite() {
            Some(MalformedReason::NonFiniteHigh)
        } else if !bar.low().is_finite() {
            Some(MalformedReason::NonFiniteLow)
        } else if !bar.close().is_finite() {
            Some(MalformedReason::NonFiniteClose)
        } else if previous.is_some_and(|t| t >= bar.open_time()) {
            Some(MalformedReason::NonIncreasingTimestamp)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(SmiError::MalformedInput { index, reason });
        }

        previous = Some(bar.open_time());
    }

    Ok(())
}
