//! Validated pairs of observed and forecast values.

use num_traits::Float;

use crate::error::{MetricError, Result, Series};

/// A pair of equal-length, non-empty, finite `y_true` / `y_pred` sequences.
///
/// Element `i` of both sequences refers to the same observation. The only way
/// to build one is [`Observations::new`], so every metric computed from it can
/// skip input checks. Metrics still fail with
/// [`MetricError::NonFiniteResult`] when finite inputs overflow during the
/// reduction.
#[derive(Debug, Clone, Copy)]
pub struct Observations<'a, T> {
    y_true: &'a [T],
    y_pred: &'a [T],
    n: T,
}

impl<'a, T: Float> Observations<'a, T> {
    /// Validate a pair of sequences.
    ///
    /// Checks run in order: equal length, non-empty, then every element of
    /// `y_true` and `y_pred` is finite.
    ///
    /// # Example
    ///
    /// ```
    /// use forecast_accuracy::Observations;
    ///
    /// let obs = Observations::new(&[10.0_f64, 20.0, 30.0], &[12.0, 18.0, 33.0]).unwrap();
    /// assert_eq!(obs.len(), 3);
    /// assert!((obs.bias().unwrap() - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(y_true: &'a [T], y_pred: &'a [T]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            tracing::debug!(
                y_true = y_true.len(),
                y_pred = y_pred.len(),
                "rejecting observations with mismatched lengths"
            );
            return Err(MetricError::LengthMismatch {
                y_true: y_true.len(),
                y_pred: y_pred.len(),
            });
        }

        if y_true.is_empty() {
            tracing::debug!("rejecting empty observations");
            return Err(MetricError::EmptyData);
        }

        check_finite(y_true, Series::True)?;
        check_finite(y_pred, Series::Pred)?;

        let n: T = num_traits::cast(y_true.len()).ok_or(MetricError::CountOverflow {
            len: y_true.len(),
        })?;

        Ok(Self { y_true, y_pred, n })
    }

    /// Number of paired observations (always at least one).
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Always `false`: validated observations hold at least one pair.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Observed values.
    pub fn y_true(&self) -> &'a [T] {
        self.y_true
    }

    /// Forecast values.
    pub fn y_pred(&self) -> &'a [T] {
        self.y_pred
    }

    /// Iterator over `y_pred[i] - y_true[i]`.
    pub(crate) fn errors(&self) -> impl Iterator<Item = T> + 'a {
        self.y_true
            .iter()
            .zip(self.y_pred.iter())
            .map(|(&t, &p)| p - t)
    }

    /// Arithmetic mean of an iterator of `len()` values.
    pub(crate) fn mean_of(&self, values: impl Iterator<Item = T>) -> T {
        values.fold(T::zero(), |acc, x| acc + x) / self.n
    }

    /// Sum of `|y_true[i]|`.
    pub(crate) fn true_abs_sum(&self) -> T {
        self.y_true.iter().fold(T::zero(), |acc, &x| acc + x.abs())
    }

    /// Signed mean of `y_true`.
    pub(crate) fn true_mean(&self) -> T {
        self.mean_of(self.y_true.iter().copied())
    }
}

/// Pass `value` through if finite, otherwise report `metric` as overflowed.
pub(crate) fn ensure_finite<T: Float>(metric: &'static str, value: T) -> Result<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(metric, "metric overflowed to a non-finite value");
        Err(MetricError::NonFiniteResult { metric })
    }
}

fn check_finite<T: Float>(values: &[T], series: Series) -> Result<()> {
    match values.iter().position(|x| !x.is_finite()) {
        Some(index) => {
            tracing::debug!(%series, index, "rejecting non-finite value");
            Err(MetricError::NonFinite { series, index })
        }
        None => Ok(()),
    }
}
