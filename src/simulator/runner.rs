//! Runs trials for each strategy and builds the comparison report.
//!
//! A comparison is always recomputed from scratch. Nothing carries over
//! between calls except what the caller passes in.

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::StrategyStats;
use crate::error::SimError;
use crate::game::{simulate_game, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Play `num_trials` games with one strategy and count the wins.
pub fn run_simulation<R: Rng + ?Sized>(
    num_trials: u32,
    strategy: Strategy,
    rng: &mut R,
) -> Result<StrategyStats, SimError> {
    if num_trials == 0 {
        return Err(SimError::ZeroTrials);
    }

    let wins = (0..num_trials)
        .filter(|_| simulate_game(strategy.switches(), &mut *rng))
        .count() as u32;

    let stats = StrategyStats::from_counts(strategy, num_trials, wins)?;
    debug!(
        strategy = %strategy,
        trials = num_trials,
        wins,
        win_rate = stats.win_rate,
        "strategy run complete"
    );
    Ok(stats)
}

/// Run both strategies with the configured trial count and return a report.
///
/// Stay is played first, then switch, from one generator seeded by
/// `config.seed`. Without a seed a fresh one is drawn and recorded in the
/// report so the run can be replayed.
pub fn run_comparison(config: &SimConfig) -> SimReport {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let trials = config.trials();
    let [stay, switch] = Strategy::all().map(|strategy| {
        run_simulation(trials, strategy, &mut rng)
            .unwrap_or_else(|_| unreachable!("trial settings are never zero"))
    });

    info!(
        seed,
        trials,
        stay = stay.win_rate,
        switch = switch.win_rate,
        "comparison complete"
    );

    SimReport::new(seed, stay, switch)
}
