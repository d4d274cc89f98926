//! Monty Hall - stay-or-switch simulator library
//!
//! Exposes the trial engine and the strategy comparison for the binaries and
//! integration tests.

pub mod app;
pub mod build_info;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use error::SimError;
pub use game::{simulate_game, Door, GameRecord, Strategy, DOORS};
pub use simulator::{run_comparison, run_simulation, SimConfig, SimReport, TrialSettings};
