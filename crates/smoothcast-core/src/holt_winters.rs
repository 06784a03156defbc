//! Additive Holt-Winters smoothing and forecasting.
//!
//! Triple exponential smoothing with additive trend and additive
//! seasonality. Smoothing constants are taken as given; the period is
//! clamped to at least 1 wherever it is used as an index or divisor.

use tracing::debug;

/// Holt-Winters smoothing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWintersParams {
    /// Level smoothing constant.
    pub alpha: f64,
    /// Trend smoothing constant.
    pub beta: f64,
    /// Seasonal smoothing constant.
    pub gamma: f64,
    /// Season length in observations.
    pub period: usize,
}

impl Default for HoltWintersParams {
    fn default() -> Self {
        // Weekly data with an annual cycle.
        HoltWintersParams {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
            period: 52,
        }
    }
}

/// State sequences produced by a Holt-Winters fit.
///
/// All vectors have the length of the input series. `fitted[t]` is the
/// one-step-ahead prediction for position `t` computed from the state at
/// `t − 1`; position 0 has no prior state and is `None`.
#[derive(Debug, Clone)]
pub struct HoltWintersFit {
    pub level: Vec<f64>,
    pub trend: Vec<f64>,
    pub seasonal: Vec<f64>,
    pub fitted: Vec<Option<f64>>,
}

/// Seasonal initialization table of size `period`.
///
/// Position `p` holds the average deviation of observations at that seasonal
/// position from the overall series mean, taken across all complete periods.
/// When the series is shorter than one period the raw deviation at `p` is
/// used, or zero once `p` runs past the series end.
fn seasonal_init(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let cycles = n / period;

    (0..period)
        .map(|p| {
            if cycles > 0 {
                let sum: f64 = (0..cycles).map(|c| values[c * period + p]).sum();
                sum / cycles as f64 - mean
            } else if p < n {
                values[p] - mean
            } else {
                0.0
            }
        })
        .collect()
}

/// Mean first difference over the first `min(10, n − 1)` steps.
fn initial_trend(values: &[f64]) -> f64 {
    let steps = (values.len() - 1).min(10).max(1);
    values
        .windows(2)
        .take(steps)
        .map(|w| w[1] - w[0])
        .sum::<f64>()
        / steps as f64
}

/// Fit the additive Holt-Winters recursion over the whole series.
pub fn holt_winters_fit(values: &[f64], params: &HoltWintersParams) -> HoltWintersFit {
    let n = values.len();
    if n == 0 {
        return HoltWintersFit {
            level: Vec::new(),
            trend: Vec::new(),
            seasonal: Vec::new(),
            fitted: Vec::new(),
        };
    }

    let s = params.period.max(1);
    let init = seasonal_init(values, s);

    let mut level = Vec::with_capacity(n);
    let mut trend = Vec::with_capacity(n);
    let mut seasonal = Vec::with_capacity(n);
    let mut fitted = Vec::with_capacity(n);

    level.push(values[0] - init[0]);
    trend.push(if n > 1 { initial_trend(values) } else { 0.0 });
    seasonal.push(init[0]);
    fitted.push(None);

    for t in 1..n {
        let s_prev = if t >= s { seasonal[t - s] } else { init[t % s] };
        let prior = level[t - 1] + trend[t - 1];

        fitted.push(Some(prior + s_prev));

        let new_level = params.alpha * (values[t] - s_prev) + (1.0 - params.alpha) * prior;
        let new_trend =
            params.beta * (new_level - level[t - 1]) + (1.0 - params.beta) * trend[t - 1];
        let new_seasonal = if t < s {
            init[t % s]
        } else {
            params.gamma * (values[t] - new_level) + (1.0 - params.gamma) * s_prev
        };

        level.push(new_level);
        trend.push(new_trend);
        seasonal.push(new_seasonal);
    }

    debug!(
        n,
        period = s,
        final_level = level[n - 1],
        final_trend = trend[n - 1],
        "holt-winters fit complete"
    );

    HoltWintersFit {
        level,
        trend,
        seasonal,
        fitted,
    }
}

/// One-step-ahead predictions over the whole series.
///
/// Returns the fitted sequence of a fresh fit; each position is predicted
/// from the state one step earlier.
pub fn holt_winters_one_step_ahead(values: &[f64], params: &HoltWintersParams) -> Vec<Option<f64>> {
    holt_winters_fit(values, params).fitted
}

/// Multi-step forecast from the terminal state.
///
/// Step `h` (1-indexed) extends the terminal level linearly by `h` trend
/// increments and adds the seasonal deviation for the target position. The
/// seasonal lookup is seeded from the initialization table and refreshed
/// with the most recent smoothed value for each position the fit reached.
pub fn holt_winters_forecast(
    values: &[f64],
    params: &HoltWintersParams,
    horizon: usize,
) -> Vec<Option<f64>> {
    let n = values.len();
    if n == 0 {
        return vec![None; horizon];
    }

    let s = params.period.max(1);
    let fit = holt_winters_fit(values, params);

    let mut lookup = seasonal_init(values, s);
    for t in n.saturating_sub(s)..n {
        lookup[t % s] = fit.seasonal[t];
    }

    let level = fit.level[n - 1];
    let trend = fit.trend[n - 1];

    (1..=horizon)
        .map(|h| Some(level + h as f64 * trend + lookup[(n + h - 1) % s]))
        .collect()
}
