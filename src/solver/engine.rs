//! Main Wordle solver interface
//!
//! The solver plays rounds until one candidate is left or the round cap is
//! reached:
//!
//! ```text
//! Ready → Scoring → AwaitingFeedback → Filtering → Solved | Exhausted | Continuing
//! ```
//!
//! Only the scoring step runs in parallel (inside the strategy); rounds are
//! strictly sequential because each one depends on the previous filter.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::entropy::calculate_entropy;
use super::filter::filter_candidates;
use super::opening::OpeningTable;
use super::strategy::{Selection, Strategy};
use crate::core::{FeedbackCode, Word};
use crate::error::{Result, WordleError};
use crate::wordlists::WordList;

/// Anything that can score a guess against a hidden target
pub trait FeedbackSource {
    /// Feedback for `guess`
    ///
    /// # Errors
    /// Sources backed by user input may fail or be aborted.
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackCode>;
}

/// How the guess for a round was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// Taken from the opening table
    Opening,
    /// Chosen by the configured strategy
    Strategy,
}

/// One completed round
#[derive(Debug, Clone)]
pub struct RoundStep<'a> {
    pub round: usize,
    pub guess: &'a Word,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess against the candidates it was played against
    pub entropy: Option<f64>,
    pub source: GuessSource,
    /// Time spent choosing the guess and filtering, excluding the wait for feedback
    pub elapsed: Duration,
}

/// Final state of a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus<'a> {
    /// Exactly one candidate remained
    Solved(&'a Word),
    /// The round cap was reached with this many candidates left
    Exhausted { remaining: usize },
}

/// Outcome of [`Solver::solve`]
#[derive(Debug, Clone)]
pub struct SolveReport<'a> {
    pub status: SolveStatus<'a>,
    pub rounds: usize,
    pub steps: Vec<RoundStep<'a>>,
}

impl<'a> SolveReport<'a> {
    /// `(rounds_used, solved_word)`
    #[must_use]
    pub fn summary(&self) -> (usize, Option<&'a Word>) {
        match self.status {
            SolveStatus::Solved(word) => (self.rounds, Some(word)),
            SolveStatus::Exhausted { .. } => (self.rounds, None),
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.status, SolveStatus::Solved(_))
    }
}

/// Main Wordle solver
///
/// Borrows the word list and an optional opening table; owns its strategy
/// and random source. One solver can run any number of games.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    word_list: &'a WordList,
    opening: Option<&'a OpeningTable>,
    rng: StdRng,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver seeded from the operating system
    pub fn new(strategy: S, word_list: &'a WordList) -> Self {
        Self::with_rng(strategy, word_list, StdRng::from_os_rng())
    }

    /// Create a solver with a fixed seed for reproducible runs
    pub fn with_seed(strategy: S, word_list: &'a WordList, seed: u64) -> Self {
        Self::with_rng(strategy, word_list, StdRng::seed_from_u64(seed))
    }

    /// Create a solver with an explicit random source
    pub fn with_rng(strategy: S, word_list: &'a WordList, rng: StdRng) -> Self {
        Self {
            strategy,
            word_list,
            opening: None,
            rng,
        }
    }

    /// Use a precomputed opening table for the first two rounds
    #[must_use]
    pub fn with_opening(mut self, table: &'a OpeningTable) -> Self {
        self.opening = Some(table);
        self
    }

    /// The word list this solver plays with
    #[must_use]
    pub const fn word_list(&self) -> &'a WordList {
        self.word_list
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Solve one game
    ///
    /// Starts from every challenge word and plays until one candidate
    /// remains (`Solved`) or `max_rounds` rounds have been played
    /// (`Exhausted`). With `verbose`, each round is logged at info level
    /// instead of debug.
    ///
    /// # Errors
    /// Returns `WordleError::InconsistentState` if feedback eliminates every
    /// candidate, and passes through errors from the feedback source.
    pub fn solve<F: FeedbackSource + ?Sized>(
        &mut self,
        source: &mut F,
        max_rounds: Option<usize>,
        verbose: bool,
    ) -> Result<SolveReport<'a>> {
        let mut candidates: Vec<&'a Word> = self.word_list.challenges().iter().collect();
        let mut steps: Vec<RoundStep<'a>> = Vec::new();
        let mut opening_feedback: Option<FeedbackCode> = None;

        loop {
            let round = steps.len();
            if let Some(cap) = max_rounds
                && round >= cap
            {
                return Ok(SolveReport {
                    status: SolveStatus::Exhausted {
                        remaining: candidates.len(),
                    },
                    rounds: round,
                    steps,
                });
            }

            let start = Instant::now();
            let (selection, origin) = self.choose_guess(round, opening_feedback, &candidates)?;
            let guess = selection.word;
            let mut elapsed = start.elapsed();

            let feedback = source.feedback(guess)?;
            let start = Instant::now();
            let before = candidates.len();
            candidates = filter_candidates(&candidates, guess, feedback);

            if round == 0 && origin == GuessSource::Opening {
                self.check_opening_partition(feedback, &candidates);
                opening_feedback = Some(feedback);
            }
            elapsed += start.elapsed();
            let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

            if verbose {
                info!(round = round + 1, %guess, %feedback, before, after = candidates.len(), elapsed_ms, "round");
            } else {
                debug!(round = round + 1, %guess, %feedback, before, after = candidates.len(), elapsed_ms, "round");
            }

            steps.push(RoundStep {
                round: round + 1,
                guess,
                feedback,
                candidates_before: before,
                candidates_after: candidates.len(),
                entropy: selection.entropy,
                source: origin,
                elapsed,
            });

            match candidates.as_slice() {
                [] => {
                    return Err(WordleError::InconsistentState {
                        round: round + 1,
                        guess: guess.text().to_string(),
                        feedback: feedback.to_string(),
                    });
                }
                &[word] => {
                    return Ok(SolveReport {
                        status: SolveStatus::Solved(word),
                        rounds: steps.len(),
                        steps,
                    });
                }
                _ => {}
            }
        }
    }

    /// Pick this round's guess: opening table first, strategy otherwise
    fn choose_guess(
        &mut self,
        round: usize,
        opening_feedback: Option<FeedbackCode>,
        candidates: &[&'a Word],
    ) -> Result<(Selection<'a>, GuessSource)> {
        if let Some(word) = self.opening_guess(round, opening_feedback) {
            let selection = Selection {
                word,
                entropy: Some(calculate_entropy(word, candidates)),
            };
            return Ok((selection, GuessSource::Opening));
        }

        self.strategy
            .select_guess(self.word_list.permissible(), candidates, &mut self.rng)
            .map(|selection| (selection, GuessSource::Strategy))
            .ok_or(WordleError::EmptyGuessPool)
    }

    fn opening_guess(&self, round: usize, opening_feedback: Option<FeedbackCode>) -> Option<&'a Word> {
        let table = self.opening?;

        let guess = match (round, opening_feedback) {
            (0, _) => table.first_guess(self.word_list),
            (1, Some(code)) => table.second_guess(self.word_list, code),
            _ => return None,
        };

        if guess.is_none() {
            warn!(round = round + 1, "opening table has no usable guess; scoring live");
        }
        guess
    }

    /// Compare the live round-0 partition with the one recorded in the table
    ///
    /// Returns `false` when the table disagrees; the live candidates are kept
    /// either way.
    fn check_opening_partition(&self, feedback: FeedbackCode, live: &[&Word]) -> bool {
        let Some(recorded) = self.opening.and_then(|t| t.candidates_for(feedback)) else {
            return true;
        };

        let matches = recorded.len() == live.len()
            && recorded.iter().zip(live).all(|(r, w)| r == w.text());
        if !matches {
            warn!(
                %feedback,
                recorded = recorded.len(),
                live = live.len(),
                "opening table partition is stale; using live candidates"
            );
        }
        matches
    }
}
