//! Word lists for Wordle solving
//!
//! A [`WordList`] pairs every permissible guess with the subset of words that
//! may be chosen as a hidden target. It is loaded once and then only borrowed.

pub mod loader;

use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::Word;
use crate::error::{Result, WordleError};

/// Permissible guesses plus the challenge subset
#[derive(Debug, Clone)]
pub struct WordList {
    permissible: Vec<Word>,
    permissible_set: FxHashSet<Word>,
    challenges: Vec<Word>,
    challenge_index: FxHashMap<Word, usize>,
    word_len: usize,
}

impl WordList {
    /// Build a word list from already-validated words
    ///
    /// Repeated words are dropped, keeping the first occurrence. Every
    /// challenge is added to the permissible list if it is missing, so
    /// `challenges ⊆ permissible` always holds.
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` when words differ in length and
    /// `WordleError::NotAChallenge` when `challenges` is empty.
    pub fn new(permissible: Vec<Word>, challenges: Vec<Word>) -> Result<Self> {
        let word_len = challenges
            .first()
            .map(Word::len)
            .ok_or_else(|| WordleError::NotAChallenge("<empty challenge list>".to_string()))?;

        if let Some(bad) = permissible
            .iter()
            .chain(&challenges)
            .find(|w| w.len() != word_len)
        {
            return Err(WordleError::LengthMismatch {
                expected: word_len,
                actual: bad.len(),
            });
        }

        let mut permissible_set = FxHashSet::default();
        let mut permissible: Vec<Word> = permissible
            .into_iter()
            .filter(|w| permissible_set.insert(w.clone()))
            .collect();

        let mut challenge_index = FxHashMap::default();
        let mut unique_challenges = Vec::with_capacity(challenges.len());
        for challenge in challenges {
            if challenge_index.contains_key(&challenge) {
                continue;
            }
            challenge_index.insert(challenge.clone(), unique_challenges.len());
            if permissible_set.insert(challenge.clone()) {
                permissible.push(challenge.clone());
            }
            unique_challenges.push(challenge);
        }
        let challenges = unique_challenges;

        Ok(Self {
            permissible,
            permissible_set,
            challenges,
            challenge_index,
            word_len,
        })
    }

    /// Build from string slices; convenient for tests and small demos
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` for any malformed entry, plus the
    /// errors of [`WordList::new`].
    pub fn from_strs(permissible: &[&str], challenges: &[&str]) -> Result<Self> {
        let parse = |list: &[&str]| -> Result<Vec<Word>> {
            list.iter()
                .map(|&s| {
                    Word::new(s).map_err(|source| WordleError::InvalidWord {
                        word: s.to_string(),
                        source,
                    })
                })
                .collect()
        };
        Self::new(parse(permissible)?, parse(challenges)?)
    }

    /// Every word that may be entered as a guess
    #[must_use]
    pub fn permissible(&self) -> &[Word] {
        &self.permissible
    }

    /// Words eligible to be the hidden target
    #[must_use]
    pub fn challenges(&self) -> &[Word] {
        &self.challenges
    }

    /// Shared length of every word in the list
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Is `word` a legal guess?
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.permissible_set.contains(word)
    }

    /// Is `word` one of the challenge targets?
    #[must_use]
    pub fn is_challenge(&self, word: &Word) -> bool {
        self.challenge_index.contains_key(word)
    }

    /// Look up a permissible word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.permissible_set.get(&word)
    }

    /// Look up a challenge word by text
    #[must_use]
    pub fn find_challenge(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.challenge_index
            .get(&word)
            .map(|&i| &self.challenges[i])
    }

    /// Uniformly random challenge word
    pub fn random_challenge<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // `new` guarantees at least one challenge
        self.challenges
            .choose(rng)
            .unwrap_or(&self.challenges[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn challenges_are_added_to_permissible() {
        let list = WordList::from_strs(&["abcd", "bcde"], &["abcd", "wxyz"]).unwrap();
        assert_eq!(list.permissible().len(), 3);
        assert!(list.contains(&Word::new("wxyz").unwrap()));
        assert!(
            list.challenges()
                .iter()
                .all(|challenge| list.contains(challenge))
        );
    }

    #[test]
    fn repeated_words_kept_once() {
        let list =
            WordList::from_strs(&["crane", "irate", "crane"], &["crane", "slate", "crane"]).unwrap();

        let challenges: Vec<&str> = list.challenges().iter().map(Word::text).collect();
        assert_eq!(challenges, ["crane", "slate"]);
        let permissible: Vec<&str> = list.permissible().iter().map(Word::text).collect();
        assert_eq!(permissible, ["crane", "irate", "slate"]);
        assert_eq!(list.find_challenge("slate").map(Word::text), Some("slate"));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let err = WordList::from_strs(&["abcd", "abcde"], &["abcd"]).unwrap_err();
        assert!(matches!(
            err,
            WordleError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn empty_challenges_rejected() {
        assert!(WordList::from_strs(&["abcd"], &[]).is_err());
    }

    #[test]
    fn invalid_word_rejected() {
        let err = WordList::from_strs(&["ab1d"], &["abcd"]).unwrap_err();
        assert!(matches!(err, WordleError::InvalidWord { .. }));
    }

    #[test]
    fn find_and_membership() {
        let list = WordList::from_strs(&["crane", "slate"], &["slate"]).unwrap();
        assert_eq!(list.find("CRANE").map(Word::text), Some("crane"));
        assert!(list.find("zzzzz").is_none());
        assert!(list.is_challenge(&Word::new("slate").unwrap()));
        assert!(!list.is_challenge(&Word::new("crane").unwrap()));
        assert_eq!(list.find_challenge("slate").map(Word::text), Some("slate"));
        assert!(list.find_challenge("crane").is_none());
        assert_eq!(list.word_len(), 5);
    }

    #[test]
    fn random_challenge_is_a_challenge() {
        let list = WordList::from_strs(&["crane", "slate", "irate"], &["slate", "irate"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(list.is_challenge(list.random_challenge(&mut rng)));
        }
    }
}
