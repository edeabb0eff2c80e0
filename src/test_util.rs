// src/test_util.rs

use crate::{Ohlcv, Price, Smoother, TimeSeries, Timestamp};
use std::{cell::Cell, num::NonZero};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `4 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() <= e.abs() * 4.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;

pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub open_time: u64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            open_time: 0,
        }
    }

    pub fn at(mut self, open_time: u64) -> Self {
        self.open_time = open_time;
        self
    }
}

/// Bar from high, low, close and timestamp; open equals close.
pub fn hlc(high: f64, low: f64, close: f64, time: u64) -> Bar {
    Bar::new(close, high, low, close).at(time)
}

impl Ohlcv for Bar {
    fn open(&self) -> Price {
        self.open
    }
    fn high(&self) -> Price {
        self.high
    }
    fn low(&self) -> Price {
        self.low
    }
    fn close(&self) -> Price {
        self.close
    }
    fn open_time(&self) -> Timestamp {
        self.open_time
    }
}

pub fn nz(n: usize) -> NonZero<usize> {
    NonZero::new(n).unwrap()
}

/// Series with timestamps `1..=values.len()`.
pub fn series(values: &[f64]) -> TimeSeries<f64> {
    (1..).zip(values.iter().copied()).collect()
}

/// Smoother double with a call counter.
pub struct MockSmoother {
    calls: Cell<usize>,
    fail: bool,
}

impl MockSmoother {
    /// Keeps values untouched and drops the first `period − 1` points,
    /// the output shape of an EMA.
    pub fn drop_front() -> Self {
        Self {
            calls: Cell::new(0),
            fail: false,
        }
    }

    /// Never produces output.
    pub fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Smoother for MockSmoother {
    fn smooth(
        &self,
        series: &TimeSeries<Price>,
        period: NonZero<usize>,
    ) -> Option<TimeSeries<Price>> {
        self.calls.set(self.calls.get() + 1);

        if self.fail || series.len() < period.get() {
            return None;
        }

        Some(series.iter().skip(period.get() - 1).map(|(t, &v)| (t, v)).collect())
    }
}
