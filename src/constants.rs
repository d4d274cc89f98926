// Trial count bounds for the settings panel
pub const MIN_TRIALS: u32 = 100;
pub const MAX_TRIALS: u32 = 100_000;
pub const DEFAULT_TRIALS: u32 = 1_000;
pub const TRIAL_STEP: u32 = 100;
pub const TRIAL_PAGE_STEP: u32 = 10_000;

// UI timing
pub const INPUT_POLL_MS: u64 = 50;

// Report labels
pub const APP_TITLE: &str = "Monty Hall Problem Simulator";
pub const CHART_TITLE: &str = "Monty Hall Simulation Results";
pub const CHART_Y_LABEL: &str = "Win Rate (%)";
pub const CHART_Y_MAX: u64 = 100;

// Expected long-run win rates, in percent
pub const EXPECTED_STAY_RATE: f64 = 100.0 / 3.0;
pub const EXPECTED_SWITCH_RATE: f64 = 200.0 / 3.0;

pub const ABOUT_TITLE: &str = "About the Monty Hall Problem";
pub const ABOUT_LINES: [&str; 5] = [
    "There are 3 doors. Behind one door is a car (prize); behind the others, goats.",
    "You pick a door.",
    "The host, who knows what is behind the doors, opens another door, revealing a goat.",
    "You are then given the choice to stay with your original choice or switch to the remaining door.",
    "Switching gives you a 2/3 chance of winning, staying only a 1/3 chance!",
];
