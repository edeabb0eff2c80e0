use thiserror::Error;

/// Result type alias for the SMI pipeline.
pub type Result<T> = core::result::Result<T, SmiError>;

/// Why the SMI could not be computed for an input.
///
/// Both variants mean "the indicator has no value for this input yet":
/// the pipeline never returns a partially populated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SmiError {
    /// Fewer bars than the lookback of `%K` plus three `%D` seeds, or a
    /// smoother that produced no output for one of the stages.
    #[error("insufficient data: need {required} bars, got {actual}")]
    InsufficientData {
        /// Bars needed before the first signal value exists.
        required: usize,
        /// Bars provided.
        actual: usize,
    },

    /// A bar cannot be used as input.
    #[error("malformed bar at index {index}: {reason}")]
    MalformedInput {
        /// Position of the offending bar in the input slice.
        index: usize,
        /// Which check the bar failed.
        reason: MalformedReason,
    },
}

impl SmiError {
    /// Always `true`: every error is a "not computable" outcome, never a
    /// fault. Provided so callers can branch on intent rather than variant.
    #[inline]
    #[must_use]
    pub fn is_not_computable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::MalformedInput { .. }
        )
    }
}

/// Detail for [`SmiError::MalformedInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// `high` is NaN or infinite.
    #[error("high is not a finite number")]
    NonFiniteHigh,
    /// `low` is NaN or infinite.
    #[error("low is not a finite number")]
    NonFiniteLow,
    /// `close` is NaN or infinite.
    #[error("close is not a finite number")]
    NonFiniteClose,
    /// `open_time` is equal to or earlier than the previous bar's.
    #[error("open_time does not increase over the previous bar")]
    NonIncreasingTimestamp,
}
