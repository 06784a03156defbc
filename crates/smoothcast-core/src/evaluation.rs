//! Accuracy evaluation of the forecasting methods.
//!
//! Two protocols are supported. Rolling evaluation scores the one-step-ahead
//! predictions of each method against the full series. Holdout evaluation
//! splits the series into a training prefix and a test suffix and scores
//! multi-step forecasts from the prefix against the suffix.

use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, SmoothcastError};
use crate::holt_winters::{holt_winters_forecast, holt_winters_one_step_ahead, HoltWintersParams};
use crate::metrics::{score, Metric};
use crate::sma::{sma_forecast, sma_one_step_ahead, SmaParams};

/// Forecasting method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastMethod {
    Sma,
    HoltWinters,
}

impl ForecastMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ForecastMethod::Sma => "SMA",
            ForecastMethod::HoltWinters => "HW",
        }
    }
}

impl FromStr for ForecastMethod {
    type Err = SmoothcastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sma" => Ok(ForecastMethod::Sma),
            "hw" | "holtwinters" | "holt_winters" => Ok(ForecastMethod::HoltWinters),
            _ => Err(SmoothcastError::UnknownMethod(s.to_string())),
        }
    }
}

/// Evaluation protocol selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// One-step-ahead predictions over the whole series.
    Rolling,
    /// Fixed train/test split with a multi-step forecast.
    Holdout,
}

impl FromStr for EvaluationMode {
    type Err = SmoothcastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rolling" => Ok(EvaluationMode::Rolling),
            "holdout" => Ok(EvaluationMode::Holdout),
            _ => Err(SmoothcastError::UnknownMode(s.to_string())),
        }
    }
}

/// Options steering an evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluationOptions {
    pub mode: EvaluationMode,
    pub metric: Metric,
    /// Holdout test length; ignored by rolling evaluation.
    pub horizon: usize,
    pub sma: SmaParams,
    pub holt_winters: HoltWintersParams,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        EvaluationOptions {
            mode: EvaluationMode::Rolling,
            metric: Metric::Mape,
            horizon: 8,
            sma: SmaParams::default(),
            holt_winters: HoltWintersParams::default(),
        }
    }
}

/// Per-method accuracy scores. `None` marks an undefined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationScores {
    pub sma: Option<f64>,
    pub holt_winters: Option<f64>,
}

impl EvaluationScores {
    pub fn get(&self, method: ForecastMethod) -> Option<f64> {
        match method {
            ForecastMethod::Sma => self.sma,
            ForecastMethod::HoltWinters => self.holt_winters,
        }
    }
}

/// Score the one-step-ahead predictions of both methods against the series.
pub fn evaluate_rolling(values: &[f64], options: &EvaluationOptions) -> Result<EvaluationScores> {
    debug!(
        n = values.len(),
        metric = options.metric.name(),
        "rolling evaluation"
    );

    let sma_pred = sma_one_step_ahead(values, options.sma.window);
    let hw_pred = holt_winters_one_step_ahead(values, &options.holt_winters);

    Ok(EvaluationScores {
        sma: score(options.metric, values, &sma_pred)?,
        holt_winters: score(options.metric, values, &hw_pred)?,
    })
}

/// Score multi-step forecasts from a training prefix against the held-out
/// suffix.
///
/// The horizon is clamped to `[1, n − 1]` so at least one observation stays
/// on each side of the split. With fewer than two observations no split
/// exists and both scores are undefined.
pub fn evaluate_holdout(values: &[f64], options: &EvaluationOptions) -> Result<EvaluationScores> {
    let n = values.len();
    if n < 2 {
        debug!(n, "holdout evaluation skipped, series too short");
        return Ok(EvaluationScores {
            sma: None,
            holt_winters: None,
        });
    }

    let horizon = options.horizon.clamp(1, n - 1);
    let (train, test) = values.split_at(n - horizon);
    debug!(
        n,
        horizon,
        train_len = train.len(),
        metric = options.metric.name(),
        "holdout evaluation"
    );

    let sma_pred = sma_forecast(train, options.sma.window, horizon);
    let hw_pred = holt_winters_forecast(train, &options.holt_winters, horizon);

    Ok(EvaluationScores {
        sma: score(options.metric, test, &sma_pred)?,
        holt_winters: score(options.metric, test, &hw_pred)?,
    })
}

/// Evaluate both methods under the mode selected in the options.
pub fn evaluate(values: &[f64], options: &EvaluationOptions) -> Result<EvaluationScores> {
    match options.mode {
        EvaluationMode::Rolling => evaluate_rolling(values, options),
        EvaluationMode::Holdout => evaluate_holdout(values, options),
    }
}
