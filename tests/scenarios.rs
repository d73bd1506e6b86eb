//! Worked examples covering the documented success and failure cases.

use approx::assert_relative_eq;
use forecast_accuracy::prelude::*;
use forecast_accuracy::Series;

type Metric = fn(&[f64], &[f64]) -> Result<f64>;

const ALL_METRICS: [(&str, Metric); 4] = [
    ("bias", bias::<f64>),
    ("bias_percentage", bias_percentage::<f64>),
    ("mae", mae::<f64>),
    ("mae_percentage", mae_percentage::<f64>),
];

#[test]
fn mixed_over_and_under_forecast() {
    let y_true = [10.0, 20.0, 30.0];
    let y_pred = [12.0, 18.0, 33.0];

    assert_relative_eq!(bias(&y_true, &y_pred).unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(mae(&y_true, &y_pred).unwrap(), 2.333_333_333_333_333, epsilon = 1e-12);
}

#[test]
fn all_zero_truth_has_degenerate_percentages() {
    let y_true = [0.0, 0.0, 0.0];
    let y_pred = [1.0, 2.0, 3.0];

    assert!(matches!(
        bias_percentage(&y_true, &y_pred),
        Err(MetricError::DegenerateDenominator { .. })
    ));
    assert!(matches!(
        mae_percentage(&y_true, &y_pred),
        Err(MetricError::DegenerateDenominator { .. })
    ));

    // The raw metrics are still defined.
    assert_relative_eq!(bias(&y_true, &y_pred).unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(mae(&y_true, &y_pred).unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn empty_input_fails_every_metric() {
    let empty: Vec<f64> = Vec::new();
    for (name, metric) in ALL_METRICS {
        assert_eq!(metric(&empty, &empty), Err(MetricError::EmptyData), "{name}");
    }
}

#[test]
fn length_mismatch_fails_every_metric() {
    let y_true = [5.0, 10.0];
    let y_pred = [5.0, 10.0, 15.0];
    for (name, metric) in ALL_METRICS {
        assert_eq!(
            metric(&y_true, &y_pred),
            Err(MetricError::LengthMismatch {
                y_true: 2,
                y_pred: 3
            }),
            "{name}"
        );
    }
}

#[test]
fn non_finite_values_fail_every_metric() {
    let y_true = [1.0, 2.0, 3.0];
    let y_pred = [1.0, f64::NAN, 3.0];
    for (name, metric) in ALL_METRICS {
        assert_eq!(
            metric(&y_true, &y_pred),
            Err(MetricError::NonFinite {
                series: Series::Pred,
                index: 1
            }),
            "{name}"
        );
    }
}

#[test]
fn evaluate_matches_individual_metrics() {
    let y_true = vec![100.0, 110.0, 120.0, 115.0, 125.0, 130.0, 128.0, 135.0];
    let y_pred = vec![102.0, 108.0, 118.0, 117.0, 123.0, 132.0, 126.0, 138.0];

    let report = evaluate(&y_true, &y_pred).unwrap();

    assert_eq!(report.n, y_true.len());
    assert_eq!(report.bias, Some(bias(&y_true, &y_pred).unwrap()));
    assert_eq!(report.mae, Some(mae(&y_true, &y_pred).unwrap()));
    assert_eq!(
        report.bias_percentage,
        Some(bias_percentage(&y_true, &y_pred).unwrap())
    );
    assert_eq!(
        report.mae_percentage,
        Some(mae_percentage(&y_true, &y_pred).unwrap())
    );
}

#[test]
fn observations_can_be_reused_across_metrics() {
    let y_true = [4.0_f32, 8.0, 12.0];
    let y_pred = [5.0_f32, 7.0, 15.0];

    let obs = Observations::new(&y_true, &y_pred).unwrap();

    assert_relative_eq!(obs.bias().unwrap(), 1.0, epsilon = 1e-6);
    assert_relative_eq!(obs.mae().unwrap(), 5.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(obs.bias_percentage().unwrap(), 1.0 / 24.0, epsilon = 1e-6);
    assert_relative_eq!(obs.mae_percentage().unwrap(), (5.0 / 3.0) / 8.0, epsilon = 1e-6);
}

#[test]
fn overflowing_inputs_fail_every_metric() {
    let y_true = [f64::MAX, f64::MAX];
    let y_pred = [-f64::MAX, -f64::MAX];
    for (name, metric) in ALL_METRICS {
        assert_eq!(
            metric(&y_true, &y_pred),
            Err(MetricError::NonFiniteResult { metric: name }),
            "{name}"
        );
    }
}
