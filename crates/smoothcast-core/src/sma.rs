//! Simple moving average smoothing and forecasting.
//!
//! All functions are pure and take the series plus a window size. The window
//! is clamped to at least 1. Positions where the window cannot be filled
//! carry `None`.

/// Simple moving average parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmaParams {
    /// Trailing window length in observations.
    pub window: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        SmaParams { window: 4 }
    }
}

/// In-sample moving average fit.
///
/// Output position `t` holds the mean of `values[t − w + 1 ..= t]` once the
/// window is filled (`t >= w − 1`) and `None` before that.
pub fn sma_fit(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let w = window.max(1);
    let mut result = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for (t, &v) in values.iter().enumerate() {
        sum += v;
        if t >= w {
            sum -= values[t - w];
        }
        if t + 1 >= w {
            result.push(Some(sum / w as f64));
        } else {
            result.push(None);
        }
    }
    result
}

/// One-step-ahead moving average predictions.
///
/// Output position `t` is the mean of the `min(w, t)` observations strictly
/// before `t`, so the window shrinks near the start of the series. Position 0
/// has no history and is `None`.
pub fn sma_one_step_ahead(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let w = window.max(1);
    let mut result = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for t in 0..values.len() {
        if t == 0 {
            result.push(None);
        } else {
            let len = w.min(t);
            result.push(Some(sum / len as f64));
        }
        sum += values[t];
        if t >= w {
            sum -= values[t - w];
        }
    }
    result
}

/// Flat multi-step forecast.
///
/// Every horizon step carries the mean of the trailing `min(w, n)`
/// observations. An empty series yields an all-`None` forecast.
pub fn sma_forecast(values: &[f64], window: usize, horizon: usize) -> Vec<Option<f64>> {
    if values.is_empty() {
        return vec![None; horizon];
    }
    let w = window.max(1).min(values.len());
    let mean: f64 = values.iter().rev().take(w).sum::<f64>() / w as f64;
    vec![Some(mean); horizon]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_constant_series() {
        let values = vec![10.0, 10.0, 10.0, 10.0, 10.0];
        let fit = sma_fit(&values, 2);
        assert_eq!(fit[0], None);
        for v in &fit[1..] {
            assert_relative_eq!(v.unwrap(), 10.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_fit_window_alignment() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let fit = sma_fit(&values, 3);
        assert_eq!(fit[0], None);
        assert_eq!(fit[1], None);
        assert_relative_eq!(fit[2].unwrap(), 2.0, epsilon = 1e-10);
        assert_relative_eq!(fit[3].unwrap(), 3.0, epsilon = 1e-10);
        assert_relative_eq!(fit[4].unwrap(), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_one_step_ahead_shrinking_window() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let osa = sma_one_step_ahead(&values, 3);
        assert_eq!(osa[0], None);
        assert_relative_eq!(osa[1].unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(osa[2].unwrap(), 1.5, epsilon = 1e-10);
        assert_relative_eq!(osa[3].unwrap(), 2.0, epsilon = 1e-10);
        assert_relative_eq!(osa[4].unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_forecast_is_flat() {
        let values = vec![10.0, 10.0, 10.0, 10.0, 10.0];
        let forecast = sma_forecast(&values, 2, 3);
        assert_eq!(forecast.len(), 3);
        for v in &forecast {
            assert_relative_eq!(v.unwrap(), 10.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_forecast_trailing_mean() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let forecast = sma_forecast(&values, 2, 2);
        assert_relative_eq!(forecast[0].unwrap(), 3.5, epsilon = 1e-10);
        assert_relative_eq!(forecast[1].unwrap(), 3.5, epsilon = 1e-10);
    }

    #[test]
    fn test_window_larger_than_series() {
        let values = vec![2.0, 4.0];
        let fit = sma_fit(&values, 5);
        assert!(fit.iter().all(|v| v.is_none()));

        let forecast = sma_forecast(&values, 5, 1);
        assert_relative_eq!(forecast[0].unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_window_clamps_to_one() {
        let values = vec![1.0, 2.0, 3.0];
        let fit = sma_fit(&values, 0);
        assert_relative_eq!(fit[0].unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(fit[2].unwrap(), 3.0, epsilon = 1e-10);

        let osa = sma_one_step_ahead(&values, 0);
        assert_eq!(osa[0], None);
        assert_relative_eq!(osa[1].unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(osa[2].unwrap(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_empty_series() {
        assert!(sma_fit(&[], 3).is_empty());
        assert!(sma_one_step_ahead(&[], 3).is_empty());
        assert_eq!(sma_forecast(&[], 3, 4), vec![None; 4]);
    }
}
