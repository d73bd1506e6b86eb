//! # forecast-accuracy
//!
//! Forecast accuracy metrics over paired true/predicted sequences: bias,
//! percentage bias, mean absolute error and percentage MAE.
//!
//! All functions are pure and generic over any [`num_traits::Float`] element
//! type. Inputs are checked for equal length, non-emptiness and finite values
//! before anything is computed.
//!
//! ```
//! use forecast_accuracy::prelude::*;
//!
//! let y_true: Vec<f64> = vec![10.0, 20.0, 30.0];
//! let y_pred = vec![12.0, 18.0, 33.0];
//!
//! assert!((bias(&y_true, &y_pred)? - 1.0).abs() < 1e-12);
//! assert!((mae(&y_true, &y_pred)? - 7.0 / 3.0).abs() < 1e-12);
//! # Ok::<(), MetricError>(())
//! ```
//!
//! The two percentage metrics normalize differently: `bias_percentage`
//! divides by `Σ|y_true|` while `mae_percentage` divides by the signed
//! `mean(y_true)`.

pub mod error;
pub mod metrics;

pub use error::{MetricError, Result, Series};
pub use metrics::{
    bias, bias_percentage, evaluate, mae, mae_percentage, AccuracyReport, Observations,
};

pub mod prelude {
    pub use crate::error::{MetricError, Result};
    pub use crate::metrics::{
        bias, bias_percentage, evaluate, mae, mae_percentage, AccuracyReport, Observations,
    };
}
