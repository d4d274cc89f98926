//! Simulation report generation.

use super::stats::StrategyStats;
use crate::constants::{
    ABOUT_LINES, ABOUT_TITLE, CHART_Y_LABEL, EXPECTED_STAY_RATE, EXPECTED_SWITCH_RATE,
};

/// Stay and switch results from one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// Seed the run was drawn from
    pub seed: u64,
    /// Trials played per strategy
    pub trials: u32,
    pub stay: StrategyStats,
    pub switch: StrategyStats,
}

impl SimReport {
    pub fn new(seed: u64, stay: StrategyStats, switch: StrategyStats) -> Self {
        debug_assert_eq!(stay.trials, switch.trials);
        Self {
            seed,
            trials: stay.trials,
            stay,
            switch,
        }
    }

    pub fn stay_win_rate(&self) -> f64 {
        self.stay.win_rate
    }

    pub fn switch_win_rate(&self) -> f64 {
        self.switch.win_rate
    }

    /// Percentage points switching gained over staying. Negative on unlucky runs.
    pub fn switch_advantage(&self) -> f64 {
        self.switch.win_rate - self.stay.win_rate
    }

    /// Both strategies in chart order.
    pub fn strategies(&self) -> [&StrategyStats; 2] {
        [&self.stay, &self.switch]
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 MONTY HALL SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Trials: {} per strategy (seed {})\n\n",
            self.trials, self.seed
        ));

        report.push_str("── STRATEGY OUTCOMES ────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Stay Strategy Win Rate:    {:.2}%  ({} of {})\n",
            self.stay.win_rate, self.stay.wins, self.stay.trials
        ));
        report.push_str(&format!(
            "  Switch Strategy Win Rate:  {:.2}%  ({} of {})\n\n",
            self.switch.win_rate, self.switch.wins, self.switch.trials
        ));

        report.push_str(&format!(
            "── {} ─────────────────────────────────────────────────\n",
            CHART_Y_LABEL.to_uppercase()
        ));
        for stats in self.strategies() {
            let bar_len = (stats.win_rate / 2.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!(
                "  {:<6} {:>6.2}% {}\n",
                stats.strategy.label(),
                stats.win_rate,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── ASSESSMENT ───────────────────────────────────────────────────\n");
        let advantage = self.switch_advantage();
        if advantage >= 0.0 {
            report.push_str(&format!(
                "  Switching won {:.2} points more often than staying.\n",
                advantage
            ));
        } else {
            report.push_str(&format!(
                "  ⚠️  Staying beat switching by {:.2} points - try more trials.\n",
                -advantage
            ));
        }
        report.push_str(&format!(
            "  Expected:  stay {:.2}%, switch {:.2}%\n\n",
            EXPECTED_STAY_RATE, EXPECTED_SWITCH_RATE
        ));

        report.push_str(&format!("── {} ", ABOUT_TITLE.to_uppercase()));
        report.push_str("──────────────────────────────\n");
        for line in ABOUT_LINES {
            report.push_str(&format!("  - {}\n", line));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Flattened rates sit next to the per-strategy detail
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 7)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("trials", &self.trials)?;
        state.serialize_field("stay_win_rate", &self.stay.win_rate)?;
        state.serialize_field("switch_win_rate", &self.switch.win_rate)?;
        state.serialize_field("switch_advantage", &self.switch_advantage())?;
        state.serialize_field("stay", &self.stay)?;
        state.serialize_field("switch", &self.switch)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Strategy;

    fn sample_report() -> SimReport {
        SimReport::new(
            42,
            StrategyStats::from_counts(Strategy::Stay, 1000, 334).unwrap(),
            StrategyStats::from_counts(Strategy::Switch, 1000, 661).unwrap(),
        )
    }

    #[test]
    fn test_report_generation() {
        let report = sample_report();
        assert_eq!(report.trials, 1000);
        assert!((report.stay_win_rate() - 33.4).abs() < 1e-9);
        assert!((report.switch_win_rate() - 66.1).abs() < 1e-9);
        assert!((report.switch_advantage() - 32.7).abs() < 1e-9);
    }

    #[test]
    fn test_text_report_shows_both_rates() {
        let text = sample_report().to_text();
        assert!(text.contains("Stay Strategy Win Rate:    33.40%"));
        assert!(text.contains("Switch Strategy Win Rate:  66.10%"));
        assert!(text.contains("seed 42"));
        assert!(text.contains("Switching won 32.70 points"));
    }

    #[test]
    fn test_text_report_flags_unlucky_run() {
        let report = SimReport::new(
            1,
            StrategyStats::from_counts(Strategy::Stay, 100, 60).unwrap(),
            StrategyStats::from_counts(Strategy::Switch, 100, 40).unwrap(),
        );
        assert!(report.to_text().contains("Staying beat switching by 20.00 points"));
    }

    #[test]
    fn test_json_report_fields() {
        let json: serde_json::Value = serde_json::from_str(&sample_report().to_json()).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["trials"], 1000);
        assert!((json["stay_win_rate"].as_f64().unwrap() - 33.4).abs() < 1e-9);
        assert!((json["switch_win_rate"].as_f64().unwrap() - 66.1).abs() < 1e-9);
        assert_eq!(json["switch"]["strategy"], "switch");
        assert_eq!(json["stay"]["wins"], 334);
    }
}
