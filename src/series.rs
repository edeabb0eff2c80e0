use crate::Timestamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of `(timestamp, value)` pairs.
///
/// Insertion order is timestamp order: every series built by the pipeline
/// keeps the strictly increasing timestamps of its source. Smoothing and
/// windowing only ever drop points from the front, so a derived series is
/// always a suffix of its input's axis.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSeries<T> {
    points: Vec<(Timestamp, T)>,
}

impl<T> TimeSeries<T> {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty series with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point. `timestamp` must be greater than the last one.
    #[inline]
    pub fn push(&mut self, timestamp: Timestamp, value: T) {
        debug_assert!(
            self.points.last().is_none_or(|(t, _)| *t < timestamp),
            "timestamps must be strictly increasing: last={}, got={timestamp}",
            self.points.last().map_or(0, |(t, _)| *t),
        );

        self.points.push((timestamp, value));
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

    /// Point at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(Timestamp, &T)> {
        self.points.get(index).map(|(t, v)| (*t, v))
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<(Timestamp, &T)> {
        self.get(0)
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<(Timestamp, &T)> {
        self.points.last().map(|(t, v)| (*t, v))
    }

    /// Iterates `(timestamp, &value)` pairs in timestamp order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Timestamp, &T)> + '_ {
        self.points.iter().map(|(t, v)| (*t, v))
    }

    /// Iterates the timestamp axis.
    pub fn timestamps(&self) -> impl ExactSizeIterator<Item = Timestamp> + '_ {
        self.points.iter().map(|(t, _)| *t)
    }

    /// Iterates the values, dropping the axis.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.points.iter().map(|(_, v)| v)
    }

    /// Borrow the raw pairs.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[(Timestamp, T)] {
        &self.points
    }
}

impl<T> FromIterator<(Timestamp, T)> for TimeSeries<T> {
    fn from_iter<I: IntoIterator<Item = (Timestamp, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut series = Self::with_capacity(iter.size_hint().0);
        for (timestamp, value) in iter {
            series.push(timestamp, value);
        }
        series
    }
}

impl<T> IntoIterator for TimeSeries<T> {
    type Item = (Timestamp, T);
    type IntoIter = std::vec::IntoIter<(Timestamp, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
