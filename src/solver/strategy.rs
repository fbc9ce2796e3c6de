//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use rand::RngCore;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::entropy::{best_scored, near_top, score_guesses};
use crate::core::Word;

/// Default width of the near-top band, in bits
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// A chosen guess and, when the strategy scored it, its entropy
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub word: &'a Word,
    pub entropy: Option<f64>,
}

/// A strategy for selecting the next guess from a pool
pub trait Strategy {
    /// Select a guess from `guess_pool` given the remaining `candidates`
    ///
    /// Returns `None` if the guess pool is empty.
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&Word],
        rng: &mut dyn RngCore,
    ) -> Option<Selection<'a>>;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

/// Strategy names accepted by the CLI and config file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Uniform draw among guesses within the tolerance of the best
    #[default]
    NearTop,
    /// Always the single best guess
    MaxEntropy,
    /// Uniform draw from every permissible word
    Random,
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    NearTop(NearTopStrategy),
    MaxEntropy(EntropyStrategy),
    Random(RandomStrategy),
}

impl StrategyType {
    /// Build the strategy named by `kind`; `tolerance` only affects `NearTop`
    #[must_use]
    pub const fn from_kind(kind: StrategyKind, tolerance: f64) -> Self {
        match kind {
            StrategyKind::NearTop => Self::NearTop(NearTopStrategy::new(tolerance)),
            StrategyKind::MaxEntropy => Self::MaxEntropy(EntropyStrategy),
            StrategyKind::Random => Self::Random(RandomStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::NearTop(NearTopStrategy::default())
    }
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&Word],
        rng: &mut dyn RngCore,
    ) -> Option<Selection<'a>> {
        match self {
            Self::NearTop(s) => s.select_guess(guess_pool, candidates, rng),
            Self::MaxEntropy(s) => s.select_guess(guess_pool, candidates, rng),
            Self::Random(s) => s.select_guess(guess_pool, candidates, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::NearTop(s) => s.name(),
            Self::MaxEntropy(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy; ties go to the
/// word that comes first in the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&Word],
        _rng: &mut dyn RngCore,
    ) -> Option<Selection<'a>> {
        best_scored(&score_guesses(guess_pool, candidates)).map(|s| Selection {
            word: s.word,
            entropy: Some(s.entropy),
        })
    }

    fn name(&self) -> &'static str {
        "max-entropy"
    }
}

/// Randomized near-top strategy
///
/// Collects every guess within `tolerance` bits of the best entropy and picks
/// one uniformly. Stops the solver from replaying the same guess when several
/// words score almost equally, which happens most when the best guess is not
/// itself a remaining candidate.
#[derive(Debug, Clone, Copy)]
pub struct NearTopStrategy {
    pub tolerance: f64,
}

impl NearTopStrategy {
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for NearTopStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl Strategy for NearTopStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&Word],
        rng: &mut dyn RngCore,
    ) -> Option<Selection<'a>> {
        let scored = score_guesses(guess_pool, candidates);
        let band = near_top(&scored, self.tolerance);

        band.choose(rng).map(|s| Selection {
            word: s.word,
            entropy: Some(s.entropy),
        })
    }

    fn name(&self) -> &'static str {
        "near-top"
    }
}

/// Random strategy
///
/// Uniform draw from the whole guess pool, ignoring the candidates. Only
/// useful as a baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        _candidates: &[&Word],
        rng: &mut dyn RngCore,
    ) -> Option<Selection<'a>> {
        guess_pool.choose(rng).map(|word| Selection {
            word,
            entropy: None,
        })
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
