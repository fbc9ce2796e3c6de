//! Entropy-based guess scoring
//!
//! Implements Shannon entropy over feedback-code distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub(crate) use calculator::group_by_code;
pub use selector::{ScoredGuess, best_scored, near_top, score_guesses, select_best_guess};
