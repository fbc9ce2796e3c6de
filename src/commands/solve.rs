//! Word solving command
//!
//! Plays one game against a named, indexed or random challenge and returns
//! the solution path.

use rand::Rng;

use crate::core::Word;
use crate::error::Result;
use crate::game::Game;
use crate::solver::{SolveReport, Solver, Strategy};

/// Which challenge word to play against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'t> {
    /// A specific challenge word
    Word(&'t str),
    /// The challenge at this position in the list
    Index(usize),
    /// A uniformly random challenge
    Random,
}

/// Configuration for solving a word
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig<'t> {
    pub target: Target<'t>,
    pub max_rounds: Option<usize>,
    pub verbose: bool,
}

impl<'t> SolveConfig<'t> {
    #[must_use]
    pub const fn new(target: Target<'t>) -> Self {
        Self {
            target,
            max_rounds: Some(crate::config::DEFAULT_MAX_ROUNDS),
            verbose: false,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult<'a> {
    pub target: &'a Word,
    pub strategy: &'static str,
    pub report: SolveReport<'a>,
}

impl SolveResult<'_> {
    /// Solved and landed on the hidden word
    #[must_use]
    pub fn success(&self) -> bool {
        self.report.summary().1 == Some(self.target)
    }
}

/// Solve one game with the given solver
///
/// `rng` only picks the target for [`Target::Random`]; guess tie-breaks use
/// the solver's own random source.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not a challenge word, or the index is out of range
/// - Feedback leaves no candidates (cannot happen with a real game)
pub fn solve_word<'a, S: Strategy, R: Rng + ?Sized>(
    config: &SolveConfig<'_>,
    solver: &mut Solver<'a, S>,
    rng: &mut R,
) -> Result<SolveResult<'a>> {
    let word_list = solver.word_list();
    let mut game = match config.target {
        Target::Word(text) => Game::with_target(word_list, text)?,
        Target::Index(index) => Game::new(word_list, Some(index), rng)?,
        Target::Random => Game::new(word_list, None, rng)?,
    };

    let report = solver.solve(&mut game, config.max_rounds, config.verbose)?;

    Ok(SolveResult {
        target: game.target(),
        strategy: solver.strategy().name(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordleError;
    use crate::solver::{EntropyStrategy, SolveStatus, StrategyType};
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_list() -> WordList {
        WordList::from_strs(
            &["crane", "slate", "irate", "crate", "grate", "adieu"],
            &["irate", "crate", "grate", "slate"],
        )
        .unwrap()
    }

    #[test]
    fn solve_named_word() {
        let list = setup_list();
        let mut solver = Solver::with_seed(EntropyStrategy, &list, 1);
        let config = SolveConfig::new(Target::Word("grate"));

        let result = solve_word(&config, &mut solver, &mut StdRng::seed_from_u64(0)).unwrap();

        assert!(result.success());
        assert_eq!(result.target.text(), "grate");
        assert_eq!(result.strategy, "max-entropy");
        assert!(!result.report.steps.is_empty());
    }

    #[test]
    fn solve_records_history() {
        let list = setup_list();
        let mut solver = Solver::with_seed(StrategyType::default(), &list, 3);
        let config = SolveConfig::new(Target::Index(3));

        let result = solve_word(&config, &mut solver, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(result.target.text(), "slate");
        for step in &result.report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_random_target() {
        let list = setup_list();
        let mut solver = Solver::with_seed(StrategyType::default(), &list, 3);
        let config = SolveConfig::new(Target::Random);

        let result = solve_word(&config, &mut solver, &mut StdRng::seed_from_u64(21)).unwrap();
        assert!(list.is_challenge(result.target));
        assert!(result.success());
    }

    #[test]
    fn solve_non_challenge_returns_error() {
        let list = setup_list();
        let mut solver = Solver::with_seed(EntropyStrategy, &list, 1);
        let config = SolveConfig::new(Target::Word("adieu"));

        let result = solve_word(&config, &mut solver, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(WordleError::NotAChallenge(_))));
    }

    #[test]
    fn solve_with_round_cap() {
        let list = setup_list();
        let mut solver = Solver::with_seed(EntropyStrategy, &list, 1);
        let mut config = SolveConfig::new(Target::Word("grate"));
        config.max_rounds = Some(0);

        let result = solve_word(&config, &mut solver, &mut StdRng::seed_from_u64(0)).unwrap();

        assert!(!result.success());
        assert_eq!(result.report.status, SolveStatus::Exhausted { remaining: 4 });
    }
}
