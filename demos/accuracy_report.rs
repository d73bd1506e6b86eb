//! Accuracy Metrics Example
//!
//! Shows how to compute and interpret bias and MAE for a forecast.
//!
//! Run with: cargo run --example accuracy_report

use forecast_accuracy::prelude::*;

fn main() -> Result<()> {
    println!("=== Forecast Accuracy Example ===\n");

    let actual = vec![100.0, 110.0, 120.0, 115.0, 125.0, 130.0, 128.0, 135.0];
    let predicted = vec![102.0, 108.0, 118.0, 117.0, 123.0, 132.0, 126.0, 138.0];

    println!("Actual values:    {:?}", actual);
    println!("Predicted values: {:?}", predicted);
    println!();

    // =========================================================================
    // Individual metrics
    // =========================================================================
    println!("--- Individual Metrics ---\n");

    let b = bias(&actual, &predicted)?;
    println!("Bias:              {:.4}", b);
    println!("Bias percentage:   {:.6}", bias_percentage(&actual, &predicted)?);
    println!("MAE:               {:.4}", mae(&actual, &predicted)?);
    println!("MAE percentage:    {:.6}", mae_percentage(&actual, &predicted)?);

    if b > 0.0 {
        println!("\nThe forecast over-predicts on average.");
    } else if b < 0.0 {
        println!("\nThe forecast under-predicts on average.");
    } else {
        println!("\nThe forecast shows no systematic direction.");
    }

    // =========================================================================
    // Combined report
    // =========================================================================
    println!("\n--- Combined Report ---\n");

    let report = evaluate(&actual, &predicted)?;
    println!("{:#?}", report);

    // =========================================================================
    // Degenerate input
    // =========================================================================
    println!("\n--- All-Zero Actuals ---\n");

    let zeros = [0.0, 0.0, 0.0];
    let forecast = [1.0, 2.0, 3.0];
    match bias_percentage(&zeros, &forecast) {
        Ok(value) => println!("Bias percentage: {:.4}", value),
        Err(e) => println!("Bias percentage unavailable: {}", e),
    }
    let report = evaluate(&zeros, &forecast)?;
    println!(
        "Report still has bias = {:?}, mae = {:?}",
        report.bias, report.mae
    );

    Ok(())
}
