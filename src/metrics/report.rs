//! All four accuracy metrics computed in one pass over validated input.

use num_traits::Float;

use super::observations::Observations;
use crate::error::Result;

/// Accuracy metrics for evaluating a forecast against observed values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccuracyReport<T> {
    /// Number of paired observations
    pub n: usize,
    /// Mean of `y_pred - y_true` (None on overflow)
    pub bias: Option<T>,
    /// Bias over `Σ|y_true|` (None if every true value is zero, or on overflow)
    pub bias_percentage: Option<T>,
    /// Mean Absolute Error (None on overflow)
    pub mae: Option<T>,
    /// MAE over `mean(y_true)` (None if the mean is zero, or on overflow)
    pub mae_percentage: Option<T>,
}

impl<'a, T: Float> Observations<'a, T> {
    /// Compute every metric for these observations.
    pub fn report(&self) -> AccuracyReport<T> {
        AccuracyReport {
            n: self.len(),
            bias: self.bias().ok(),
            bias_percentage: self.bias_percentage().ok(),
            mae: self.mae().ok(),
            mae_percentage: self.mae_percentage().ok(),
        }
    }
}

/// Calculate all accuracy metrics between true and predicted values.
///
/// Input problems (length mismatch, empty input, non-finite values) are
/// errors. A zero denominator or an overflowing reduction only blanks the
/// affected field.
///
/// # Example
///
/// ```
/// use forecast_accuracy::evaluate;
///
/// let report = evaluate(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(report.bias, Some(1.0));
/// assert!(report.bias_percentage.is_none());
/// ```
pub fn evaluate<T: Float>(y_true: &[T], y_pred: &[T]) -> Result<AccuracyReport<T>> {
    Ok(Observations::new(y_true, y_pred)?.report())
}
