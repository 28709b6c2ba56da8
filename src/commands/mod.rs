//! Command implementations

pub mod auto;
pub mod play;
pub mod round;

pub use auto::{AutoConfig, AutoPlayResult, run_auto};
pub use play::run_play;
pub use round::{RoundReport, evaluate_guess};
