//! Accuracy metrics for forecast evaluation.
//!
//! Every metric validates its input once through [`Observations::new`] and
//! then reduces it to a single scalar.

pub mod absolute;
pub mod bias;
pub mod observations;
pub mod report;

pub use absolute::{mae, mae_percentage};
pub use bias::{bias, bias_percentage};
pub use observations::Observations;
pub use report::{evaluate, AccuracyReport};
