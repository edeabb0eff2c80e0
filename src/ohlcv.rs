/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Bar open timestamp or sequence number.
///
/// Used as the x-axis of every series the pipeline produces. Must be
/// strictly increasing across the bars handed to [`Smi::compute`](crate::Smi::compute).
pub type Timestamp = u64;

/// OHLC bar data used as input to the SMI pipeline.
///
/// Implement this on your own kline/candle type to avoid per-bar
/// conversion. The pipeline borrows the bars, reads `high`, `low`,
/// `close` and `open_time`, and never mutates them.
///
/// # Example
///
/// ```
/// use quantedge_smi::{Ohlcv, Price, Timestamp};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64,
///     ts: u64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn open_time(&self) -> Timestamp { self.ts }
/// }
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing price of the bar.
    fn close(&self) -> Price;

    /// Bar open timestamp or sequence number.
    ///
    /// Values must be strictly increasing along the input slice, otherwise
    /// the pipeline reports [`MalformedInput`](crate::SmiError::MalformedInput).
    fn open_time(&self) -> Timestamp;
}

impl<T: Ohlcv + ?Sized> Ohlcv for &T {
    #[inline]
    fn open(&self) -> Price {
        (**self).open()
    }

    #[inline]
    fn high(&self) -> Price {
        (**self).high()
    }

    #[inline]
    fn low(&self) -> Price {
        (**self).low()
    }

    #[inline]
    fn close(&self) -> Price {
        (**self).close()
    }

    #[inline]
    fn open_time(&self) -> Timestamp {
        (**self).open_time()
    }
}
