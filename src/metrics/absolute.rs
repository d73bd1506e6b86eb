//! Magnitude error: MAE and percentage MAE.

use num_traits::Float;

use super::observations::{ensure_finite, Observations};
use crate::error::{MetricError, Result};

impl<'a, T: Float> Observations<'a, T> {
    /// Mean of `|y_pred[i] - y_true[i]|`. Never negative.
    ///
    /// Fails with [`MetricError::NonFiniteResult`] if the sum of absolute
    /// errors overflows.
    pub fn mae(&self) -> Result<T> {
        ensure_finite("mae", self.mean_of(self.errors().map(Float::abs)))
    }

    /// MAE divided by the signed mean of `y_true`.
    ///
    /// Unlike [`bias_percentage`](Self::bias_percentage), which divides by
    /// `Σ|y_true|`, this divides by `mean(y_true)`. A series with a negative
    /// mean therefore yields a negative percentage. The two denominators are
    /// inconsistent with each other, which is likely unintended.
    pub fn mae_percentage(&self) -> Result<T> {
        const METRIC: &str = "mae_percentage";

        let denominator = self.true_mean();
        if denominator == T::zero() {
            tracing::debug!(n = self.len(), "mae_percentage: mean(y_true) is zero");
            return Err(MetricError::DegenerateDenominator {
                metric: METRIC,
                denominator: "mean(y_true)",
            });
        }
        let denominator = ensure_finite(METRIC, denominator)?;
        ensure_finite(
            METRIC,
            self.mean_of(self.errors().map(Float::abs)) / denominator,
        )
    }
}

/// Calculate the Mean Absolute Error between true and predicted values.
///
/// # Errors
/// * [`MetricError::LengthMismatch`] if the sequences differ in length
/// * [`MetricError::EmptyData`] if they are empty
/// * [`MetricError::NonFinite`] if any value is NaN or infinite
/// * [`MetricError::NonFiniteResult`] if the computation overflows
///
/// # Example
///
/// ```
/// use forecast_accuracy::mae;
///
/// let m: f64 = mae(&[10.0, 20.0, 30.0], &[12.0, 18.0, 33.0]).unwrap();
/// assert!((m - 7.0 / 3.0).abs() < 1e-12);
/// ```
pub fn mae<T: Float>(y_true: &[T], y_pred: &[T]) -> Result<T> {
    Observations::new(y_true, y_pred)?.mae()
}

/// Calculate MAE relative to the mean of the true values.
///
/// mae_percentage = MAE / mean(y_true)
///
/// # Errors
/// Same as [`mae`], plus [`MetricError::DegenerateDenominator`] when
/// `mean(y_true)` is zero.
pub fn mae_percentage<T: Float>(y_true: &[T], y_pred: &[T]) -> Result<T> {
    Observations::new(y_true, y_pred)?.mae_percentage()
}
