//! Constraint inference and candidate filtering
//!
//! The engine is pure and stateless. Leaf to root:
//! - [`FrequencyModel`]: per-letter count bounds
//! - [`is_good_candidate`]: one word against one constraint set
//! - [`filter_candidates`]: a whole corpus against one constraint set
//! - [`search_best_feedback`]: the adversary's choice of feedback for a guess
//! - [`play_round`]: search plus rendering into marks

mod constraints;
mod filter;
mod frequency;
mod predicate;
mod round;
mod search;

pub use constraints::{Category, Constraints, assignment_count, categories};
pub use filter::{count_candidates, filter_candidates};
pub use frequency::{CountRange, FrequencyModel};
pub use predicate::is_good_candidate;
pub use round::{RoundOutcome, feedback_from_constraints, play_round};
pub use search::{SearchOutcome, search_best_feedback};
