//! Errors for out-of-set doors, unusable trial counts and impossible tallies.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("door {0} is not one of the three doors")]
    InvalidDoor(u8),

    #[error("trial count must be at least 1")]
    ZeroTrials,

    #[error("trial count {value} is outside {min}..={max}")]
    TrialsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("trial count {value} is not a multiple of {step}")]
    TrialsOffStep { value: u32, step: u32 },

    #[error("{wins} wins out of {trials} trials is impossible")]
    WinsExceedTrials { wins: u32, trials: u32 },
}
