//! Weekly time series smoothing, forecasting and accuracy evaluation.
//!
//! Two forecasting methods operate on plain `&[f64]` series: a simple
//! moving average and additive Holt-Winters smoothing. Each exposes an
//! in-sample fit, one-step-ahead predictions and a multi-step forecast.
//! The evaluation harness compares both methods under a rolling or holdout
//! protocol using MAPE or RMSE, and a deterministic generator produces
//! synthetic weekly series for experiments and benchmarks.
//!
//! Undefined values, such as unfilled windows or scores with no usable
//! pairs, are represented as `None` rather than NaN sentinels.

pub mod error;
pub mod evaluation;
pub mod generator;
pub mod holt_winters;
pub mod metrics;
pub mod sma;

pub use error::{Result, SmoothcastError};
pub use evaluation::{
    evaluate, evaluate_holdout, evaluate_rolling, EvaluationMode, EvaluationOptions,
    EvaluationScores, ForecastMethod,
};
pub use generator::{generate_weekly_series, GeneratorOptions, WeeklySeries};
pub use holt_winters::{
    holt_winters_fit, holt_winters_forecast, holt_winters_one_step_ahead, HoltWintersFit,
    HoltWintersParams,
};
pub use metrics::{mape, rmse, score, Metric};
pub use sma::{sma_fit, sma_forecast, sma_one_step_ahead, SmaParams};
