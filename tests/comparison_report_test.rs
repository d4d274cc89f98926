//! Integration test: comparison runs and their reports
//!
//! Exercises the entry point the UI and headless binary share.

use montyhall::{run_comparison, SimConfig, SimError, Strategy, TrialSettings};

#[test]
fn test_comparison_across_trial_bounds() {
    for trials in [100, 1_000, 100_000] {
        let config = SimConfig::with_trials(trials).unwrap().seeded(7);
        let report = run_comparison(&config);

        assert_eq!(report.trials, trials);
        assert_eq!(report.stay.strategy, Strategy::Stay);
        assert_eq!(report.switch.strategy, Strategy::Switch);
        for stats in report.strategies() {
            assert_eq!(stats.trials, trials);
            assert!((0.0..=100.0).contains(&stats.win_rate));
        }
    }
}

#[test]
fn test_large_comparison_favours_switching() {
    let config = SimConfig::with_trials(100_000).unwrap().seeded(2024);
    let report = run_comparison(&config);

    assert!((report.stay_win_rate() - 33.3).abs() < 2.0);
    assert!((report.switch_win_rate() - 66.7).abs() < 2.0);
    assert!(report.switch_advantage() > 25.0);
}

#[test]
fn test_each_comparison_is_recomputed() {
    let config = SimConfig::with_trials(2_000).unwrap().seeded(99);
    let first = run_comparison(&config);
    let second = run_comparison(&config);
    assert_eq!(first, second);

    let other = run_comparison(&config.clone().seeded(100));
    assert_eq!(other.seed, 100);
}

#[test]
fn test_settings_reject_invalid_counts() {
    assert!(matches!(
        SimConfig::with_trials(0),
        Err(SimError::TrialsOutOfRange { value: 0, .. })
    ));
    assert!(matches!(
        TrialSettings::new(250),
        Err(SimError::TrialsOffStep {
            value: 250,
            step: 100
        })
    ));
    assert_eq!(
        TrialSettings::new(200_000).unwrap_err().to_string(),
        "trial count 200000 is outside 100..=100000"
    );
}

#[test]
fn test_report_outputs() {
    let report = run_comparison(&SimConfig::default().seeded(1));

    let text = report.to_text();
    assert!(text.contains(&format!(
        "Stay Strategy Win Rate:    {:.2}%",
        report.stay_win_rate()
    )));
    assert!(text.contains(&format!(
        "Switch Strategy Win Rate:  {:.2}%",
        report.switch_win_rate()
    )));

    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["trials"], 1000);
    assert_eq!(json["seed"], 1);
    assert!(json["stay_win_rate"].is_f64());
    assert!(json["switch_win_rate"].is_f64());
}
