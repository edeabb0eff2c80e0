use crate::{Ohlcv, Price};

use std::{collections::VecDeque, num::NonZero};

/// Lowest low and highest high over a trailing window of bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowExtrema {
    lowest_low: Price,
    highest_high: Price,
}

impl WindowExtrema {
    #[inline]
    #[must_use]
    pub fn lowest_low(&self) -> Price {
        self.lowest_low
    }

    #[inline]
    #[must_use]
    pub fn highest_high(&self) -> Price {
        self.highest_high
    }

    /// `highest_high − lowest_low`.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Price {
        self.highest_high - self.lowest_low
    }

    /// Window midpoint: `(highest_high + lowest_low) / 2`.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Price {
        f64::midpoint(self.highest_high, self.lowest_low)
    }
}

/// Rolling min-of-low / max-of-high scanner over a fixed window.
///
/// Each bar enters two monotonic deques once and leaves them at most
/// once, so a full scan is O(n) regardless of the window length.
#[derive(Clone, Copy, Debug)]
pub struct ExtremaWindowScanner {
    length: usize,
}

impl ExtremaWindowScanner {
    #[must_use]
    pub fn new(length: NonZero<usize>) -> Self {
        Self {
            length: length.get(),
        }
    }

    /// Scans `bars` and returns one [`WindowExtrema`] per full window.
    ///
    /// Entry `j` covers `bars[j..j + length]`, i.e. it belongs to bar
    /// `j + length − 1`. Returns `None` when there are fewer bars than
    /// the window length.
    pub fn scan<B: Ohlcv>(&self, bars: &[B]) -> Option<Vec<WindowExtrema>> {
        if bars.len() < self.length {
            return None;
        }

        let mut lows = MonotonicDeque::minimum(self.length);
        let mut highs = MonotonicDeque::maximum(self.length);
        let mut out = Vec::with_capacity(bars.len() - self.length + 1);

        for (index, bar) in bars.iter().enumerate() {
            lows.push(index, bar.low());
            highs.push(index, bar.high());

            let Some(oldest) = (index + 1).checked_sub(self.length) else {
                continue;
            };

            lows.expire(oldest);
            highs.expire(oldest);

            if let (Some(lowest_low), Some(highest_high)) = (lows.front(), highs.front()) {
                out.push(WindowExtrema {
                    lowest_low,
                    highest_high,
                });
            }
        }

        Some(out)
    }
}

/// Deque of `(index, value)` kept monotonic so the front holds the
/// window's extreme value.
#[derive(Debug)]
struct MonotonicDeque {
    entries: VecDeque<(usize, Price)>,
    /// Whether the back entry is dominated by a newly pushed value.
    dominated: fn(Price, Price) -> bool,
}

impl MonotonicDeque {
    fn minimum(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            dominated: |back, incoming| back >= incoming,
        }
    }

    fn maximum(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            dominated: |back, incoming| back <= incoming,
        }
    }

    #[inline]
    fn push(&mut self, index: usize, value: Price) {
        while self
            .entries
            .back()
            .is_some_and(|&(_, back)| (self.dominated)(back, value))
        {
            self.entries.pop_back();
        }

        self.entries.push_back((index, value));
    }

    /// Drops entries older than `oldest`.
    #[inline]
    fn expire(&mut self, oldest: usize) {
        while self.entries.front().is_some_and(|&(i, _)| i < oldest) {
            self.entries.pop_front();
        }
    }

    #[inline]
    fn front(&self) -> Option<Price> {
        self.entries.front().map(|&(_, value)| value)
    }
}
