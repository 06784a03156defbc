//! Synthetic weekly series generation.
//!
//! Produces deterministic weekly series with a linear trend, a sinusoidal
//! seasonal component and Gaussian noise. The noise stream comes from a
//! seeded LCG mapped through the standard normal inverse CDF, so a fixed
//! seed always yields the same series.

use std::f64::consts::PI;

use chrono::{Duration, NaiveDate};
use statrs::distribution::{ContinuousCDF, Normal};

/// A weekly series with timestamps at a fixed 7-day cadence.
#[derive(Debug, Clone)]
pub struct WeeklySeries {
    pub timestamps: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl WeeklySeries {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Shape of the generated series.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    pub weeks: usize,
    pub base: f64,
    pub trend_per_week: f64,
    pub seasonal_amplitude: f64,
    /// Season length in weeks.
    pub period: usize,
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            weeks: 104,
            base: 500.0,
            trend_per_week: 1.5,
            seasonal_amplitude: 50.0,
            period: 52,
            noise_std: 10.0,
            seed: 42,
        }
    }
}

/// Generate a weekly series starting at `start`.
///
/// `value[t] = base + trend · t + amplitude · sin(2πt / period) + noise[t]`.
pub fn generate_weekly_series(start: NaiveDate, options: &GeneratorOptions) -> WeeklySeries {
    let normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    let period = options.period.max(1) as f64;
    let mut state = options.seed;

    let mut timestamps = Vec::with_capacity(options.weeks);
    let mut values = Vec::with_capacity(options.weeks);

    for t in 0..options.weeks {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Map the top 31 bits to an open (0, 1) interval.
        let u = ((state >> 33) as f64 + 0.5) / (1u64 << 31) as f64;
        let z = normal.inverse_cdf(u);

        let tf = t as f64;
        let value = options.base
            + options.trend_per_week * tf
            + options.seasonal_amplitude * (2.0 * PI * tf / period).sin()
            + options.noise_std * z;

        timestamps.push(start + Duration::weeks(t as i64));
        values.push(value);
    }

    WeeklySeries { timestamps, values }
}
