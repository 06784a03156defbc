//! Forecast accuracy metrics.
//!
//! Scores compare an actual series against a predicted series of the same
//! length. Predictions are nullable: positions where a model could not
//! produce a value carry `None` and are skipped. A score over zero usable
//! pairs is undefined and reported as `Ok(None)`, which keeps "no data"
//! distinguishable from a genuine score of `0.0`.

use std::str::FromStr;

use crate::error::{Result, SmoothcastError};

/// Accuracy metric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Mean absolute percentage error (percent).
    Mape,
    /// Root mean squared error (same unit as the series).
    Rmse,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mape => "MAPE",
            Metric::Rmse => "RMSE",
        }
    }
}

impl FromStr for Metric {
    type Err = SmoothcastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mape" => Ok(Metric::Mape),
            "rmse" => Ok(Metric::Rmse),
            _ => Err(SmoothcastError::UnknownMetric(s.to_string())),
        }
    }
}

/// Collect the (actual, predicted) pairs usable for scoring.
///
/// Pairs are dropped when the prediction is `None` or when either side is
/// non-finite. Metric-specific exclusions happen in the metric itself.
fn usable_pairs(actual: &[f64], predicted: &[Option<f64>]) -> Vec<(f64, f64)> {
    actual
        .iter()
        .zip(predicted.iter())
        .filter_map(|(a, p)| p.map(|p| (*a, p)))
        .filter(|(a, p)| a.is_finite() && p.is_finite())
        .collect()
}

fn validate_lengths(actual: &[f64], predicted: &[Option<f64>]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(SmoothcastError::InvalidInput(format!(
            "actual and predicted lengths differ: {} vs {}",
            actual.len(),
            predicted.len()
        )));
    }
    Ok(())
}

/// Mean absolute percentage error, in percent.
///
/// Pairs with a zero actual are excluded since the percentage error is
/// undefined there. Returns `Ok(None)` when no pairs survive filtering.
pub fn mape(actual: &[f64], predicted: &[Option<f64>]) -> Result<Option<f64>> {
    validate_lengths(actual, predicted)?;

    let pairs: Vec<(f64, f64)> = usable_pairs(actual, predicted)
        .into_iter()
        .filter(|(a, _)| *a != 0.0)
        .collect();

    if pairs.is_empty() {
        return Ok(None);
    }

    let sum: f64 = pairs.iter().map(|(a, p)| ((a - p) / a).abs()).sum();
    Ok(Some(sum / pairs.len() as f64 * 100.0))
}

/// Root mean squared error.
///
/// Returns `Ok(None)` when no pairs survive filtering.
pub fn rmse(actual: &[f64], predicted: &[Option<f64>]) -> Result<Option<f64>> {
    validate_lengths(actual, predicted)?;

    let pairs = usable_pairs(actual, predicted);
    if pairs.is_empty() {
        return Ok(None);
    }

    let sum_sq: f64 = pairs.iter().map(|(a, p)| (a - p) * (a - p)).sum();
    Ok(Some((sum_sq / pairs.len() as f64).sqrt()))
}

/// Score a prediction against the actual series with the selected metric.
pub fn score(metric: Metric, actual: &[f64], predicted: &[Option<f64>]) -> Result<Option<f64>> {
    match metric {
        Metric::Mape => mape(actual, predicted),
        Metric::Rmse => rmse(actual, predicted),
    }
}
