use crate::{ExtremaWindowScanner, Ohlcv, Price, TimeSeries};

use std::num::NonZero;

/// Range and deviation legs of the SMI, sharing one timestamp axis.
#[derive(Clone, Debug, PartialEq)]
pub struct MomentumSeries {
    /// `highest_high − lowest_low` per window.
    pub range: TimeSeries<Price>,
    /// `close − (highest_high + lowest_low) / 2` per window.
    pub deviation: TimeSeries<Price>,
}

/// Builds the [`MomentumSeries`] for a `%K` window.
#[derive(Clone, Copy, Debug)]
pub struct MomentumSeriesBuilder {
    scanner: ExtremaWindowScanner,
    length: usize,
}

impl MomentumSeriesBuilder {
    #[must_use]
    pub fn new(period_k: NonZero<usize>) -> Self {
        Self {
            scanner: ExtremaWindowScanner::new(period_k),
            length: period_k.get(),
        }
    }

    /// Both legs start at bar `period_k − 1`, the first with a full window.
    /// `None` when there are fewer bars than `period_k`.
    pub fn build<B: Ohlcv>(&self, bars: &[B]) -> Option<MomentumSeries> {
        let extrema = self.scanner.scan(bars)?;

        let mut range = TimeSeries::with_capacity(extrema.len());
        let mut deviation = TimeSeries::with_capacity(extrema.len());

        for (bar, window) in bars[self.length - 1..].iter().zip(&extrema) {
            let timestamp = bar.open_time();
            range.push(timestamp, window.range());
            deviation.push(timestamp, bar.close() - window.midpoint());
        }

        Some(MomentumSeries { range, deviation })
    }
}
