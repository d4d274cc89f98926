//! Per-strategy win counting.

use crate::error::SimError;
use crate::game::Strategy;
use serde::Serialize;

/// Wins and win rate for one strategy over one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyStats {
    pub strategy: Strategy,
    pub trials: u32,
    pub wins: u32,
    /// Percentage of trials won, in `0.0..=100.0`
    pub win_rate: f64,
}

impl StrategyStats {
    pub fn from_counts(strategy: Strategy, trials: u32, wins: u32) -> Result<Self, SimError> {
        Ok(Self {
            strategy,
            trials,
            wins,
            win_rate: win_rate(wins, trials)?,
        })
    }
}

/// `100 * wins / trials`.
pub fn win_rate(wins: u32, trials: u32) -> Result<f64, SimError> {
    if trials == 0 {
        return Err(SimError::ZeroTrials);
    }
    if wins > trials {
        return Err(SimError::WinsExceedTrials { wins, trials });
    }
    Ok(wins as f64 / trials as f64 * 100.0)
}
