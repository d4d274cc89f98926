//! State behind the interactive report.

use crate::simulator::{run_comparison, SimConfig, SimReport, TrialSettings};
use tracing::info;

/// Settings, the latest report, and overlay flags for the terminal UI.
pub struct App {
    pub config: SimConfig,
    pub report: SimReport,
    pub show_help: bool,
    /// Completed comparison runs since startup
    pub runs: u32,
}

impl App {
    /// Builds the app and runs the first comparison.
    pub fn new(config: SimConfig) -> Self {
        let report = run_comparison(&config);
        Self {
            config,
            report,
            show_help: false,
            runs: 1,
        }
    }

    pub fn settings(&self) -> &TrialSettings {
        &self.config.settings
    }

    pub fn settings_mut(&mut self) -> &mut TrialSettings {
        &mut self.config.settings
    }

    /// Throw away the current report and simulate again with the current settings.
    pub fn refresh(&mut self) {
        self.report = run_comparison(&self.config);
        self.runs += 1;
        info!(
            trials = self.report.trials,
            seed = self.report.seed,
            "report refreshed"
        );
    }

    /// Drop any pinned seed and rerun with fresh randomness.
    pub fn reroll(&mut self) {
        self.config.seed = None;
        self.refresh();
    }

    /// Toggle pinning the current report's seed so setting changes replay it.
    pub fn toggle_seed_pin(&mut self) {
        self.config.seed = match self.config.seed {
            Some(_) => None,
            None => Some(self.report.seed),
        };
    }

    pub fn seed_pinned(&self) -> bool {
        self.config.seed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_runs_first_report() {
        let app = App::new(SimConfig::default().seeded(9));
        assert_eq!(app.runs, 1);
        assert_eq!(app.report.trials, 1_000);
        assert_eq!(app.report.seed, 9);
    }

    #[test]
    fn test_refresh_follows_settings() {
        let mut app = App::new(SimConfig::default().seeded(9));
        app.settings_mut().step_up();
        app.refresh();

        assert_eq!(app.runs, 2);
        assert_eq!(app.report.trials, 1_100);
        assert_eq!(app.report.seed, 9);
    }

    #[test]
    fn test_pin_and_reroll() {
        let mut app = App::new(SimConfig::default());
        assert!(!app.seed_pinned());

        app.toggle_seed_pin();
        assert_eq!(app.config.seed, Some(app.report.seed));

        let pinned = app.report.clone();
        app.refresh();
        assert_eq!(app.report, pinned);

        app.reroll();
        assert!(!app.seed_pinned());
    }
}
