//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod opening;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use interactive::{TerminalFeedback, run_interactive};
pub use opening::{OpeningSummary, build_opening};
pub use solve::{SolveConfig, SolveResult, Target, solve_word};
