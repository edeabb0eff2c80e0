use crate::{Price, TimeSeries};

/// Composes the SMI oscillator from the doubly smoothed legs.
///
/// ```text
/// SMI = 0                                    if avg_dev or avg_range is 0
/// SMI = avg_dev / (avg_range / 2) × 100      otherwise
/// ```
///
/// A NaN on either leg takes the zero branch as well. Both inputs must
/// share the same timestamp axis; the output lives on that axis with one
/// point per input index.
#[must_use]
pub fn compose(avg_dev: &TimeSeries<Price>, avg_range: &TimeSeries<Price>) -> TimeSeries<Price> {
    debug_assert_eq!(
        avg_dev.len(),
        avg_range.len(),
        "smoothed legs must have the same length"
    );

    avg_dev
        .iter()
        .zip(avg_range.iter())
        .map(|((timestamp, &dev), (range_timestamp, &range))| {
            debug_assert_eq!(timestamp, range_timestamp, "smoothed legs must share an axis");
            (timestamp, oscillator(dev, range))
        })
        .collect()
}

/// Normalized momentum for a single index.
#[inline]
#[must_use]
pub fn oscillator(avg_dev: Price, avg_range: Price) -> Price {
    if is_degenerate(avg_dev) || is_degenerate(avg_range) {
        return 0.0;
    }

    avg_dev / (avg_range / 2.0) * 100.0
}

#[inline]
fn is_degenerate(value: Price) -> bool {
    value == 0.0 || value.is_nan()
}
