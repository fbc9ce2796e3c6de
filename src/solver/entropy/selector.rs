//! Entropy-based word selection
//!
//! Scores a guess pool in parallel, then picks the maximum or the set of
//! guesses close to it.

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// A guess together with its entropy against the current candidates
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub entropy: f64,
}

/// Score every guess in the pool against `candidates`
///
/// Scoring is a parallel map over the pool; results keep pool order.
#[must_use]
pub fn score_guesses<'a>(guess_pool: &'a [Word], candidates: &[&Word]) -> Vec<ScoredGuess<'a>> {
    guess_pool
        .par_iter()
        .map(|word| ScoredGuess {
            word,
            entropy: calculate_entropy(word, candidates),
        })
        .collect()
}

/// Highest-entropy entry; ties go to the earliest in the slice
#[must_use]
pub fn best_scored<'a>(scored: &[ScoredGuess<'a>]) -> Option<ScoredGuess<'a>> {
    scored.iter().copied().fold(None, |best, current| match best {
        Some(b) if b.entropy >= current.entropy => Some(b),
        _ => Some(current),
    })
}

/// Every entry whose entropy is within `tolerance` bits of the maximum
///
/// Pool order is kept. Empty input gives an empty result.
#[must_use]
pub fn near_top<'a>(scored: &[ScoredGuess<'a>], tolerance: f64) -> Vec<ScoredGuess<'a>> {
    let Some(top) = best_scored(scored) else {
        return Vec::new();
    };
    let floor = top.entropy - tolerance;

    scored
        .iter()
        .copied()
        .filter(|s| s.entropy >= floor)
        .collect()
}

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&guesses, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    best_scored(&score_guesses(guess_pool, candidates)).map(|s| (s.word, s.entropy))
}
