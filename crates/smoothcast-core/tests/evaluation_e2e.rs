//! End-to-end test: generate a synthetic weekly series, run both engines
//! through the evaluation harness under both protocols and both metrics.

use chrono::NaiveDate;
use smoothcast_core::{
    evaluate, generate_weekly_series, holt_winters_forecast, sma_forecast, EvaluationMode,
    EvaluationOptions, ForecastMethod, GeneratorOptions, HoltWintersParams, Metric,
};

fn fixture() -> Vec<f64> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 3).expect("valid date");
    let opts = GeneratorOptions {
        weeks: 156,
        ..Default::default()
    };
    let series = generate_weekly_series(start, &opts);
    assert_eq!(series.len(), 156);
    series.values
}

#[test]
fn evaluation_produces_defined_scores_in_all_configurations() {
    let values = fixture();

    for mode in [EvaluationMode::Rolling, EvaluationMode::Holdout] {
        for metric in [Metric::Mape, Metric::Rmse] {
            let opts = EvaluationOptions {
                mode,
                metric,
                ..Default::default()
            };
            let scores = evaluate(&values, &opts).expect("matching lengths");

            for method in [ForecastMethod::Sma, ForecastMethod::HoltWinters] {
                let score = scores
                    .get(method)
                    .unwrap_or_else(|| panic!("{} score undefined", method.name()));
                assert!(score.is_finite(), "{} score not finite", method.name());
                assert!(score >= 0.0, "{} score negative", method.name());
            }
        }
    }
}

#[test]
fn seasonal_model_beats_flat_forecast_on_seasonal_data() {
    // Strong annual seasonality with mild noise: the Holt-Winters holdout
    // forecast has to come out ahead of the flat moving average.
    let start = NaiveDate::from_ymd_opt(2021, 1, 4).expect("valid date");
    let opts = GeneratorOptions {
        weeks: 208,
        seasonal_amplitude: 80.0,
        noise_std: 2.0,
        ..Default::default()
    };
    let values = generate_weekly_series(start, &opts).values;

    let eval_opts = EvaluationOptions {
        mode: EvaluationMode::Holdout,
        metric: Metric::Rmse,
        horizon: 26,
        ..Default::default()
    };
    let scores = evaluate(&values, &eval_opts).expect("matching lengths");
    let sma = scores.get(ForecastMethod::Sma).expect("defined");
    let hw = scores.get(ForecastMethod::HoltWinters).expect("defined");
    assert!(
        hw < sma,
        "expected HW ({hw}) to beat SMA ({sma}) on seasonal data"
    );
}

#[test]
fn forecasts_from_generated_data_stay_in_plausible_range() {
    let values = fixture();
    let horizon = 8;

    let sma = sma_forecast(&values, 4, horizon);
    let hw = holt_winters_forecast(&values, &HoltWintersParams::default(), horizon);
    assert_eq!(sma.len(), horizon);
    assert_eq!(hw.len(), horizon);

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    for v in sma.iter().chain(hw.iter()) {
        let v = v.expect("defined forecast");
        assert!(v > min - span && v < max + span, "forecast {v} out of range");
    }
}
