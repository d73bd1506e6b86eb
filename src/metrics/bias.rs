//! Directional error: bias and percentage bias.

use num_traits::Float;

use super::observations::{ensure_finite, Observations};
use crate::error::{MetricError, Result};

impl<'a, T: Float> Observations<'a, T> {
    /// Mean of `y_pred[i] - y_true[i]`.
    ///
    /// Positive values mean the forecast runs high, negative values mean it
    /// runs low. Fails with [`MetricError::NonFiniteResult`] if the sum of
    /// errors overflows.
    pub fn bias(&self) -> Result<T> {
        ensure_finite("bias", self.mean_of(self.errors()))
    }

    /// Bias divided by `Σ|y_true[i]|`.
    ///
    /// [`mae_percentage`](Self::mae_percentage) normalizes by the signed mean
    /// of `y_true` instead. The two denominators are inconsistent with each
    /// other, which is likely unintended.
    pub fn bias_percentage(&self) -> Result<T> {
        const METRIC: &str = "bias_percentage";

        let denominator = self.true_abs_sum();
        if denominator == T::zero() {
            tracing::debug!(n = self.len(), "bias_percentage: sum(|y_true|) is zero");
            return Err(MetricError::DegenerateDenominator {
                metric: METRIC,
                denominator: "sum(|y_true|)",
            });
        }
        let denominator = ensure_finite(METRIC, denominator)?;
        ensure_finite(METRIC, self.mean_of(self.errors()) / denominator)
    }
}

/// Calculate the bias between true and predicted values.
///
/// Bias is the mean of `y_pred[i] - y_true[i]`. A positive bias indicates
/// over-forecasting, a negative bias under-forecasting.
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
/// use forecast_accuracy::bias;
///
/// let b: f64 = bias(&[10.0, 20.0, 30.0], &[12.0, 18.0, 33.0]).unwrap();
/// assert!((b - 1.0).abs() < 1e-12);
/// ```
pub fn bias<T: Float>(y_true: &[T], y_pred: &[T]) -> Result<T> {
    Observations::new(y_true, y_pred)?.bias()
}

/// Calculate the bias as a fraction of the total magnitude of `y_true`.
///
/// bias_percentage = bias / Σ|y_true|
///
/// # Errors
/// Same as [`bias`], plus [`MetricError::DegenerateDenominator`] when every
/// true value is zero.
pub fn bias_percentage<T: Float>(y_true: &[T], y_pred: &[T]) -> Result<T> {
    Observations::new(y_true, y_pred)?.bias_percentage()
}
