use crate::{Price, SmiPoint, SmiSeries, TimeSeries, Timestamp};

use std::collections::HashMap;

/// Merges the signal line onto the oscillator's timestamp axis.
///
/// Every oscillator timestamp yields one [`SmiPoint`]; its signal is
/// looked up by timestamp and left `None` where the signal line has no
/// point. The lookup table is built once, so the merge is O(n).
#[must_use]
pub fn align(oscillator: &TimeSeries<Price>, signal: &TimeSeries<Price>) -> SmiSeries {
    let by_timestamp: HashMap<Timestamp, Price> =
        signal.iter().map(|(t, &value)| (t, value)).collect();

    let points = oscillator
        .iter()
        .map(|(t, &value)| SmiPoint::new(t, value, by_timestamp.get(&t).copied()))
        .collect();

    SmiSeries::from_points(points)
}
