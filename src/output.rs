use crate::{Price, TimeSeries, Timestamp};

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One SMI output point.
///
/// The oscillator is always present. The signal is `None` on the
/// leading points where the signal line has not been seeded yet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmiPoint {
    timestamp: Timestamp,
    oscillator: Price,
    signal: Option<Price>,
}

impl SmiPoint {
    #[inline]
    #[must_use]
    pub(crate) fn new(timestamp: Timestamp, oscillator: Price, signal: Option<Price>) -> Self {
        Self {
            timestamp,
            oscillator,
            signal,
        }
    }

    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// SMI value (`%K` line).
    #[inline]
    #[must_use]
    pub fn oscillator(&self) -> Price {
        self.oscillator
    }

    /// Signal value (`%D` line), if seeded at this timestamp.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> Option<Price> {
        self.signal
    }
}

impl Display for SmiPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.signal {
            Some(signal) => write!(
                f,
                "SMI(t: {}, k: {}, d: {signal})",
                self.timestamp, self.oscillator
            ),
            None => write!(f, "SMI(t: {}, k: {}, d: -)", self.timestamp, self.oscillator),
        }
    }
}

/// Output of [`Smi::compute`](crate::Smi::compute).
///
/// Row view through [`points`](Self::points), columnar views through
/// [`timestamps`](Self::timestamps) and [`values`](Self::values), and
/// one independent line per drawing pass through
/// [`oscillator_line`](Self::oscillator_line) and
/// [`signal_line`](Self::signal_line).
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmiSeries {
    points: Vec<SmiPoint>,
}

impl SmiSeries {
    pub(crate) fn from_points(points: Vec<SmiPoint>) -> Self {
        Self { points }
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[SmiPoint] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Timestamp column.
    #[must_use]
    pub fn timestamps(&self) -> Vec<Timestamp> {
        self.points.iter().map(SmiPoint::timestamp).collect()
    }

    /// `(oscillator, signal)` value-pair column, parallel to
    /// [`timestamps`](Self::timestamps).
    #[must_use]
    pub fn values(&self) -> Vec<(Price, Option<Price>)> {
        self.points
            .iter()
            .map(|p| (p.oscillator, p.signal))
            .collect()
    }

    /// Primary line: every point's oscillator value.
    #[must_use]
    pub fn oscillator_line(&self) -> TimeSeries<Price> {
        self.points
            .iter()
            .map(|p| (p.timestamp, p.oscillator))
            .collect()
    }

    /// Secondary line: only the points carrying a signal value.
    #[must_use]
    pub fn signal_line(&self) -> TimeSeries<Price> {
        self.points
            .iter()
            .filter_map(|p| p.signal.map(|signal| (p.timestamp, signal)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SmiSeries {
    type Item = &'a SmiPoint;
    type IntoIter = std::slice::Iter<'a, SmiPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
