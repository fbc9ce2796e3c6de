//! Wordle solving algorithms
//!
//! Candidate filtering, entropy scoring, guess strategies, the optional
//! opening table and the round loop that ties them together.

mod engine;
pub mod entropy;
pub mod filter;
pub mod opening;
pub mod strategy;

pub use engine::{FeedbackSource, GuessSource, RoundStep, SolveReport, SolveStatus, Solver};
pub use filter::filter_candidates;
pub use opening::OpeningTable;
pub use strategy::{
    DEFAULT_TOLERANCE, EntropyStrategy, NearTopStrategy, RandomStrategy, Selection, Strategy,
    StrategyKind, StrategyType,
};
