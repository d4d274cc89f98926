//! Three-door game types and the single-trial engine.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
