//! Benchmark command
//!
//! Runs the solver against the first `count` challenge words (or all of them)
//! and collects round statistics.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::error::WordleError;
use crate::game::Game;
use crate::solver::{SolveStatus, Solver, Strategy};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds used → number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Words the solver ran out of rounds on
    pub exhausted: Vec<String>,
    /// Words whose games failed outright
    pub errors: Vec<(String, String)>,
    /// First guess → number of games it opened
    pub first_guesses: BTreeMap<String, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_words - self.solved
    }
}

/// Run benchmark on the challenge list
///
/// Errors from individual games are recorded, not propagated, so a single
/// bad game never hides the rest of the run.
pub fn run_benchmark<S: Strategy>(
    solver: &mut Solver<'_, S>,
    count: Option<usize>,
    max_rounds: Option<usize>,
    show_progress: bool,
) -> BenchmarkResult {
    let word_list = solver.word_list();
    let targets = &word_list.challenges()[..count.map_or(word_list.challenges().len(), |n| {
        n.min(word_list.challenges().len())
    })];

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_seen = 0;
    let mut distribution = BTreeMap::new();
    let mut exhausted = Vec::new();
    let mut errors = Vec::new();
    let mut first_guesses = BTreeMap::new();

    for (index, target) in targets.iter().enumerate() {
        let outcome = Game::with_target(word_list, target.text())
            .and_then(|mut game| solver.solve(&mut game, max_rounds, false));

        match outcome {
            Ok(report) => {
                if let Some(step) = report.steps.first() {
                    *first_guesses.entry(step.guess.text().to_string()).or_insert(0) += 1;
                }

                match report.status {
                    SolveStatus::Solved(word) if word == target => {
                        solved += 1;
                        total_rounds += report.rounds;
                        min_rounds = min_rounds.min(report.rounds);
                        max_seen = max_seen.max(report.rounds);
                        *distribution.entry(report.rounds).or_insert(0) += 1;
                    }
                    SolveStatus::Solved(word) => {
                        errors.push((target.text().to_string(), format!("solved as '{word}'")));
                    }
                    SolveStatus::Exhausted { .. } => exhausted.push(target.text().to_string()),
                }
            }
            Err(err) => {
                if matches!(err, WordleError::InconsistentState { .. }) {
                    warn!(target = %target, %err, "inconsistent game");
                }
                errors.push((target.text().to_string(), err.to_string()));
            }
        }

        if index % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_rounds as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        strategy: solver.strategy().name(),
        total_words,
        solved,
        total_rounds,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds: max_seen,
        distribution,
        exhausted,
        errors,
        first_guesses,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    }
}
