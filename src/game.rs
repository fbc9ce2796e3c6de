//! A single Wordle game
//!
//! Holds the hidden target for one session and answers guesses. Illegal
//! guesses (words outside the permissible list) get all-Absent feedback; the
//! evaluator itself never looks at the vocabulary.

use rand::Rng;

use crate::core::{FeedbackCode, Word};
use crate::error::{Result, WordleError};
use crate::solver::FeedbackSource;
use crate::wordlists::WordList;

/// A game with a fixed hidden target
#[derive(Debug, Clone)]
pub struct Game<'a> {
    word_list: &'a WordList,
    target: &'a Word,
}

impl<'a> Game<'a> {
    /// Start a game on the challenge at `target_index`, or a random challenge
    ///
    /// # Errors
    /// Returns `WordleError::TargetIndex` if the index is out of range.
    pub fn new<R: Rng + ?Sized>(
        word_list: &'a WordList,
        target_index: Option<usize>,
        rng: &mut R,
    ) -> Result<Self> {
        let target = match target_index {
            Some(index) => word_list.challenges().get(index).ok_or(WordleError::TargetIndex {
                index,
                count: word_list.challenges().len(),
            })?,
            None => word_list.random_challenge(rng),
        };

        Ok(Self { word_list, target })
    }

    /// Start a game on a specific challenge word
    ///
    /// # Errors
    /// Returns `WordleError::NotAChallenge` if `text` is not a challenge word.
    pub fn with_target(word_list: &'a WordList, text: &str) -> Result<Self> {
        let target = word_list
            .find_challenge(text)
            .ok_or_else(|| WordleError::NotAChallenge(text.to_string()))?;

        Ok(Self { word_list, target })
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> &'a Word {
        self.target
    }

    /// Score a guess against the hidden word
    ///
    /// Guesses that are not permissible (including wrong-length words) get
    /// all-Absent feedback of the guess's own length.
    #[must_use]
    pub fn evaluate_guess(&self, guess: &Word) -> FeedbackCode {
        if !self.word_list.contains(guess) {
            return FeedbackCode::all_absent(guess.len());
        }

        FeedbackCode::evaluate(self.target, guess)
    }
}

impl FeedbackSource for Game<'_> {
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackCode> {
        Ok(self.evaluate_guess(guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list() -> WordList {
        WordList::from_strs(
            &["which", "whisk", "guess", "where", "eerie"],
            &["which", "eerie"],
        )
        .unwrap()
    }

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn indexed_target() {
        let list = list();
        let game = Game::new(&list, Some(1), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(game.target().text(), "eerie");
    }

    #[test]
    fn index_out_of_range() {
        let list = list();
        let err = Game::new(&list, Some(2), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, WordleError::TargetIndex { index: 2, count: 2 }));
    }

    #[test]
    fn random_target_is_challenge() {
        let list = list();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let game = Game::new(&list, None, &mut rng).unwrap();
            assert!(list.is_challenge(game.target()));
        }
    }

    #[test]
    fn evaluates_permissible_guesses() {
        let list = list();
        let game = Game::with_target(&list, "which").unwrap();

        assert_eq!(game.evaluate_guess(&w("whisk")).to_string(), "!!!--");
        assert_eq!(game.evaluate_guess(&w("guess")).to_string(), "-----");
        assert!(game.evaluate_guess(&w("which")).is_solved());
    }

    #[test]
    fn illegal_guess_is_all_absent() {
        let list = list();
        let game = Game::with_target(&list, "which").unwrap();

        // Would be "!!!!-" if it were legal
        assert_eq!(game.evaluate_guess(&w("whici")).to_string(), "-----");
        assert_eq!(game.evaluate_guess(&w("wh")).to_string(), "--");
    }

    #[test]
    fn with_target_requires_challenge() {
        let list = list();
        assert!(matches!(
            Game::with_target(&list, "guess"),
            Err(WordleError::NotAChallenge(_))
        ));
    }

    #[test]
    fn feedback_source_delegates() {
        let list = list();
        let mut game = Game::with_target(&list, "eerie").unwrap();
        assert_eq!(game.feedback(&w("where")).unwrap().to_string(), "--++!");
    }
}
