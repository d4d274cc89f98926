//! Monte Carlo comparison of the stay and switch strategies.
//!
//! `run_simulation` is the aggregator for a single strategy. `run_comparison`
//! is the entry point the UI and the headless binary call once per refresh:
//! it plays both strategies and returns a `SimReport`.

mod config;
mod report;
mod runner;
mod stats;

pub use config::{SimConfig, TrialSettings};
pub use report::SimReport;
pub use runner::{run_comparison, run_simulation};
pub use stats::{win_rate, StrategyStats};
