//! Precomputed opening moves
//!
//! An [`OpeningTable`] records a fixed first guess, the challenge words left
//! for every feedback code that guess can produce, and the best second guess
//! for each of those codes. It lets the solver skip the two most expensive
//! scoring rounds. Tables are stored as pretty-printed JSON keyed by `!+-`
//! feedback strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::entropy::{group_by_code, select_best_guess};
use crate::core::{FeedbackCode, Word};
use crate::error::{Result, WordleError};
use crate::wordlists::WordList;

/// Decision tree for the first two rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningTable {
    /// Guess played in round 0
    pub first_guess: String,
    /// Feedback code after the first guess → challenge words consistent with it
    pub candidates: BTreeMap<String, Vec<String>>,
    /// Feedback code after the first guess → guess to play in round 1
    pub second_guesses: BTreeMap<String, String>,
}

impl OpeningTable {
    /// Precompute a table for `word_list`
    ///
    /// Without an explicit `first_guess`, the highest-entropy permissible
    /// word against all challenges is used. Second guesses are the
    /// highest-entropy word for each partition of two or more candidates.
    ///
    /// # Errors
    /// Returns `WordleError::OpeningTable` if `first_guess` is not permissible.
    pub fn build(word_list: &WordList, first_guess: Option<&Word>) -> Result<Self> {
        let all: Vec<&Word> = word_list.challenges().iter().collect();

        let first = match first_guess {
            Some(word) if word_list.contains(word) => word,
            Some(word) => {
                return Err(WordleError::OpeningTable(format!(
                    "first guess '{word}' is not a permissible word"
                )));
            }
            None => {
                select_best_guess(word_list.permissible(), &all)
                    .map(|(word, _)| word)
                    .ok_or_else(|| WordleError::OpeningTable("empty guess pool".to_string()))?
            }
        };

        let codes = group_by_code(first, &all);
        info!(first_guess = %first, partitions = codes.len(), "building opening table");

        let mut candidates = BTreeMap::new();
        let mut second_guesses = BTreeMap::new();

        for code in codes.keys() {
            let partition: Vec<&Word> = all
                .iter()
                .copied()
                .filter(|&c| FeedbackCode::evaluate(c, first) == *code)
                .collect();

            if partition.len() > 1
                && let Some((second, _)) = select_best_guess(word_list.permissible(), &partition)
            {
                second_guesses.insert(code.to_string(), second.text().to_string());
            }

            candidates.insert(
                code.to_string(),
                partition.iter().map(|w| w.text().to_string()).collect(),
            );
        }

        Ok(Self {
            first_guess: first.text().to_string(),
            candidates,
            second_guesses,
        })
    }

    /// Read a table from a JSON file
    ///
    /// # Errors
    /// Returns `WordleError::Io` or `WordleError::Json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WordleError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the table as pretty JSON
    ///
    /// # Errors
    /// Returns `WordleError::Io` or `WordleError::Json`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| WordleError::io(path, e))
    }

    /// Check the table against a word list
    ///
    /// # Errors
    /// Returns `WordleError::OpeningTable` naming the first problem found:
    /// an unknown or wrong-length guess, a malformed feedback key, or a
    /// candidate that is not a challenge word.
    pub fn validate(&self, word_list: &WordList) -> Result<()> {
        let reject = |msg: String| Err(WordleError::OpeningTable(msg));

        if word_list.find(&self.first_guess).is_none() {
            return reject(format!(
                "first guess '{}' is not in the word list",
                self.first_guess
            ));
        }

        let check_key = |key: &str| match FeedbackCode::parse(key) {
            Some(code) if code.len() == word_list.word_len() => Ok(()),
            _ => Err(WordleError::OpeningTable(format!(
                "bad feedback key '{key}' for {}-letter words",
                word_list.word_len()
            ))),
        };

        for (key, words) in &self.candidates {
            check_key(key)?;
            if let Some(bad) = words.iter().find(|w| word_list.find_challenge(w).is_none()) {
                return reject(format!("candidate '{bad}' under '{key}' is not a challenge"));
            }
        }

        for (key, guess) in &self.second_guesses {
            check_key(key)?;
            if word_list.find(guess).is_none() {
                return reject(format!("second guess '{guess}' under '{key}' is unknown"));
            }
        }

        Ok(())
    }

    /// The round-0 guess, if it is still a permissible word
    #[must_use]
    pub fn first_guess<'a>(&self, word_list: &'a WordList) -> Option<&'a Word> {
        word_list.find(&self.first_guess)
    }

    /// The round-1 guess after observing `first_feedback`, if recorded and permissible
    #[must_use]
    pub fn second_guess<'a>(
        &self,
        word_list: &'a WordList,
        first_feedback: FeedbackCode,
    ) -> Option<&'a Word> {
        self.second_guesses
            .get(&first_feedback.to_string())
            .and_then(|text| word_list.find(text))
    }

    /// Recorded candidate texts for a round-0 feedback code
    #[must_use]
    pub fn candidates_for(&self, first_feedback: FeedbackCode) -> Option<&[String]> {
        self.candidates
            .get(&first_feedback.to_string())
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> WordList {
        WordList::from_strs(
            &["crane", "slate", "irate", "crate", "grate", "trace", "adieu"],
            &["irate", "crate", "grate", "slate", "trace"],
        )
        .unwrap()
    }

    #[test]
    fn build_partitions_every_challenge() {
        let list = sample_list();
        let table = OpeningTable::build(&list, None).unwrap();

        let total: usize = table.candidates.values().map(Vec::len).sum();
        assert_eq!(total, list.challenges().len());
        assert!(list.find(&table.first_guess).is_some());
        table.validate(&list).unwrap();
    }

    #[test]
    fn build_with_explicit_first_guess() {
        let list = sample_list();
        let crane = Word::new("crane").unwrap();
        let table = OpeningTable::build(&list, Some(&crane)).unwrap();

        assert_eq!(table.first_guess, "crane");
        for (key, words) in &table.candidates {
            let code = FeedbackCode::parse(key).unwrap();
            for text in words {
                let word = Word::new(text.as_str()).unwrap();
                assert_eq!(FeedbackCode::evaluate(&word, &crane), code);
            }
            // Second guesses exist exactly for ambiguous partitions
            assert_eq!(table.second_guesses.contains_key(key), words.len() > 1);
        }
    }

    #[test]
    fn build_rejects_unknown_first_guess() {
        let list = sample_list();
        let zzzzz = Word::new("zzzzz").unwrap();
        assert!(matches!(
            OpeningTable::build(&list, Some(&zzzzz)),
            Err(WordleError::OpeningTable(_))
        ));
    }

    #[test]
    fn json_round_trip_through_file() {
        let list = sample_list();
        let table = OpeningTable::build(&list, None).unwrap();

        let file = tempfile::NamedTempFile::new().unwrap();
        table.save(file.path()).unwrap();
        let loaded = OpeningTable::load(file.path()).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn validate_rejects_stale_entries() {
        let list = sample_list();
        let mut table = OpeningTable::build(&list, None).unwrap();
        table
            .second_guesses
            .insert("-----".to_string(), "qqqqq".to_string());
        assert!(table.validate(&list).is_err());

        let mut table = OpeningTable::build(&list, None).unwrap();
        table.candidates.insert("!!".to_string(), vec![]);
        assert!(table.validate(&list).is_err());

        let mut table = OpeningTable::build(&list, None).unwrap();
        table.first_guess = "zzzzz".to_string();
        assert!(table.validate(&list).is_err());
        assert!(table.first_guess(&list).is_none());
    }

    #[test]
    fn lookups_resolve_words() {
        let list = sample_list();
        let crane = Word::new("crane").unwrap();
        let table = OpeningTable::build(&list, Some(&crane)).unwrap();

        assert_eq!(table.first_guess(&list), Some(&crane));

        let target = Word::new("grate").unwrap();
        let code = FeedbackCode::evaluate(&target, &crane);
        let recorded = table.candidates_for(code).unwrap();
        assert!(recorded.iter().any(|w| w == "grate"));
        assert!(table.second_guess(&list, code).is_some());

        let unseen = FeedbackCode::all_exact(5);
        assert!(table.candidates_for(unseen).is_none());
    }
}
