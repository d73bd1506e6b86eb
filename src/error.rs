//! Error types for the forecast-accuracy library.

use std::fmt;

use thiserror::Error;

/// Result type alias for metric computations.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Which of the two input sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// Observed values.
    True,
    /// Forecast values.
    Pred,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::True => f.write_str("y_true"),
            Series::Pred => f.write_str("y_pred"),
        }
    }
}

/// Errors that can occur while computing accuracy metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// True and predicted sequences have different lengths.
    #[error("length mismatch: y_true has {y_true} values, y_pred has {y_pred}")]
    LengthMismatch { y_true: usize, y_pred: usize },

    /// Input sequences are empty.
    #[error("empty input data")]
    EmptyData,

    /// The normalizing denominator of a percentage metric is zero.
    #[error("degenerate denominator in {metric}: {denominator} is zero")]
    DegenerateDenominator {
        metric: &'static str,
        denominator: &'static str,
    },

    /// An element is NaN or infinite.
    #[error("non-finite value in {series} at index {index}")]
    NonFinite { series: Series, index: usize },

    /// A sum or quotient overflowed the element type while computing a metric.
    #[error("non-finite result in {metric}: intermediate values overflowed")]
    NonFiniteResult { metric: &'static str },

    /// The number of observations cannot be represented in the element type.
    #[error("observation count {len} is not representable in the element type")]
    CountOverflow { len: usize },
}
