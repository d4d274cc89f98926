//! Simulation configuration.

use crate::constants::{DEFAULT_TRIALS, MAX_TRIALS, MIN_TRIALS, TRIAL_STEP};
use crate::error::SimError;

/// Trial count chosen in the settings panel.
///
/// Always within `MIN_TRIALS..=MAX_TRIALS` and a multiple of `TRIAL_STEP`, so a
/// run built from it can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSettings {
    trials: u32,
}

impl TrialSettings {
    pub fn new(trials: u32) -> Result<Self, SimError> {
        if !(MIN_TRIALS..=MAX_TRIALS).contains(&trials) {
            return Err(SimError::TrialsOutOfRange {
                value: trials,
                min: MIN_TRIALS,
                max: MAX_TRIALS,
            });
        }
        if trials % TRIAL_STEP != 0 {
            return Err(SimError::TrialsOffStep {
                value: trials,
                step: TRIAL_STEP,
            });
        }
        Ok(Self { trials })
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Raise the count by `delta`, stopping at the upper bound.
    pub fn increase_by(&mut self, delta: u32) {
        self.trials = self.trials.saturating_add(delta).min(MAX_TRIALS);
    }

    /// Lower the count by `delta`, stopping at the lower bound.
    pub fn decrease_by(&mut self, delta: u32) {
        self.trials = self.trials.saturating_sub(delta).max(MIN_TRIALS);
    }

    pub fn step_up(&mut self) {
        self.increase_by(TRIAL_STEP);
    }

    pub fn step_down(&mut self) {
        self.decrease_by(TRIAL_STEP);
    }

    pub fn to_min(&mut self) {
        self.trials = MIN_TRIALS;
    }

    pub fn to_max(&mut self) {
        self.trials = MAX_TRIALS;
    }
}

impl Default for TrialSettings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
        }
    }
}

/// Configuration for one comparison run.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Number of trials per strategy
    pub settings: TrialSettings,

    /// Random seed for reproducibility (None = fresh entropy each run)
    pub seed: Option<u64>,

    /// Log verbosity for the headless binary (0 = warnings only, 1+ = debug)
    pub verbosity: u8,
}

impl SimConfig {
    pub fn with_trials(trials: u32) -> Result<Self, SimError> {
        Ok(Self {
            settings: TrialSettings::new(trials)?,
            ..Default::default()
        })
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn trials(&self) -> u32 {
        self.settings.trials()
    }
}
